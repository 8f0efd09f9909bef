use async_trait::async_trait;
use medidir_core::Doctor;
use medidir_storage::{DoctorQuery, DoctorStorage, StorageError, listing_order};
use papaya::HashMap as PapayaHashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// One stored record plus its insertion sequence number.
///
/// The sequence number realizes storage order: it breaks listing ties and is
/// preserved across updates, so an updated record keeps its position.
#[derive(Debug, Clone)]
struct Entry {
    doctor: Doctor,
    seq: u64,
}

/// In-memory doctor storage backend using papaya lock-free HashMap.
///
/// This storage implementation provides:
/// - Lock-free concurrent access via papaya::HashMap
/// - Full CRUD operations keyed by record id
/// - Bulk delete/insert for the reset/seed flow
/// - Filtered listing with the presentation sort applied
#[derive(Debug)]
pub struct InMemoryStorage {
    /// Main storage using papaya for lock-free concurrent access
    data: Arc<PapayaHashMap<String, Entry>>,
    /// Atomic counter assigning insertion sequence numbers
    insert_counter: AtomicU64,
}

impl InMemoryStorage {
    /// Creates a new, empty in-memory storage.
    pub fn new() -> Self {
        Self {
            data: Arc::new(PapayaHashMap::new()),
            insert_counter: AtomicU64::new(1),
        }
    }

    fn next_seq(&self) -> u64 {
        self.insert_counter.fetch_add(1, Ordering::SeqCst)
    }

    pub async fn count(&self) -> usize {
        let guard = self.data.pin();
        guard.len()
    }

    pub async fn exists(&self, id: &str) -> bool {
        let guard = self.data.pin();
        guard.get(id).is_some()
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DoctorStorage for InMemoryStorage {
    async fn insert(&self, doctor: Doctor) -> Result<Doctor, StorageError> {
        let seq = self.next_seq();
        let guard = self.data.pin();

        // Check for conflicts
        if guard.get(&doctor.id).is_some() {
            return Err(StorageError::already_exists(&doctor.id));
        }

        guard.insert(doctor.id.clone(), Entry {
            doctor: doctor.clone(),
            seq,
        });
        Ok(doctor)
    }

    async fn insert_many(&self, doctors: Vec<Doctor>) -> Result<usize, StorageError> {
        let mut stored = 0;
        for doctor in doctors {
            self.insert(doctor).await?;
            stored += 1;
        }
        Ok(stored)
    }

    async fn fetch(&self, id: &str) -> Result<Option<Doctor>, StorageError> {
        let guard = self.data.pin();
        Ok(guard.get(id).map(|entry| entry.doctor.clone()))
    }

    async fn update(&self, doctor: Doctor) -> Result<Doctor, StorageError> {
        let guard = self.data.pin();

        // Keep the original insertion sequence so the record holds its
        // storage-order position.
        let seq = match guard.get(&doctor.id) {
            Some(entry) => entry.seq,
            None => return Err(StorageError::not_found(&doctor.id)),
        };

        guard.insert(doctor.id.clone(), Entry {
            doctor: doctor.clone(),
            seq,
        });
        Ok(doctor)
    }

    async fn delete(&self, id: &str) -> Result<bool, StorageError> {
        let guard = self.data.pin();
        Ok(guard.remove(id).is_some())
    }

    async fn delete_all(&self) -> Result<usize, StorageError> {
        let guard = self.data.pin();
        let ids: Vec<String> = guard.iter().map(|(id, _)| id.clone()).collect();
        for id in &ids {
            guard.remove(id);
        }
        Ok(ids.len())
    }

    async fn search(&self, query: &DoctorQuery) -> Result<Vec<Doctor>, StorageError> {
        let mut matching: Vec<Entry> = {
            let guard = self.data.pin();
            guard
                .iter()
                .filter(|(_, entry)| query.matches(&entry.doctor))
                .map(|(_, entry)| entry.clone())
                .collect()
        };

        matching.sort_by(|a, b| listing_order(&a.doctor, &b.doctor).then(a.seq.cmp(&b.seq)));

        Ok(matching.into_iter().map(|entry| entry.doctor).collect())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
