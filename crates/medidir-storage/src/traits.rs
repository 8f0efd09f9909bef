//! Storage trait for the doctor-directory storage abstraction layer.

use async_trait::async_trait;
use medidir_core::Doctor;

use crate::error::StorageError;
use crate::query::DoctorQuery;

/// The storage trait every backend must implement.
///
/// This trait defines the contract for CRUD operations, the bulk operations
/// used by the reset/seed flow, and the filtered listing. Implementations
/// must be thread-safe (`Send + Sync`).
///
/// # Example
///
/// ```ignore
/// use medidir_storage::{DoctorStorage, StorageError};
///
/// async fn get_doctor(
///     storage: &dyn DoctorStorage,
///     id: &str,
/// ) -> Result<medidir_core::Doctor, StorageError> {
///     storage
///         .fetch(id)
///         .await?
///         .ok_or_else(|| StorageError::not_found(id))
/// }
/// ```
#[async_trait]
pub trait DoctorStorage: Send + Sync {
    /// Persists a new record keyed by its id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::AlreadyExists` if the id is already taken.
    async fn insert(&self, doctor: Doctor) -> Result<Doctor, StorageError>;

    /// Persists a batch of records, returning how many were stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::AlreadyExists` on the first duplicate id;
    /// records stored before the failure remain stored.
    async fn insert_many(&self, doctors: Vec<Doctor>) -> Result<usize, StorageError>;

    /// Reads a record by id.
    ///
    /// Returns `None` if the record does not exist. An identifier that could
    /// never have been assigned is indistinguishable from a missing one.
    ///
    /// # Errors
    ///
    /// Returns an error only for infrastructure issues, not for missing
    /// records.
    async fn fetch(&self, id: &str) -> Result<Option<Doctor>, StorageError>;

    /// Replaces an existing record in place, keeping its storage-order
    /// position.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the record does not exist.
    async fn update(&self, doctor: Doctor) -> Result<Doctor, StorageError>;

    /// Removes a record by id.
    ///
    /// Returns `false` when nothing was removed, so a delete racing another
    /// delete of the same id surfaces as a miss rather than an error.
    async fn delete(&self, id: &str) -> Result<bool, StorageError>;

    /// Removes every record, returning how many were removed.
    async fn delete_all(&self) -> Result<usize, StorageError>;

    /// Returns all records matching the query, in presentation order
    /// (`is_doctor` descending, experience descending, ties in storage
    /// order). An empty result is a success, never an error.
    async fn search(&self, query: &DoctorQuery) -> Result<Vec<Doctor>, StorageError>;

    /// Returns the name of this storage backend for logging/debugging.
    fn backend_name(&self) -> &'static str;
}

// Ensure the trait stays object-safe by using it as a trait object
#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time test that DoctorStorage is object-safe
    fn _assert_storage_object_safe(_: &dyn DoctorStorage) {}
}
