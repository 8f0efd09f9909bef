//! In-memory storage backend for the medidir server.
//!
//! This crate provides an in-memory implementation of the `DoctorStorage`
//! trait from `medidir-storage`, using papaya lock-free HashMap for
//! concurrent access.
//!
//! # Example
//!
//! ```ignore
//! use medidir_db_memory::InMemoryStorage;
//! use medidir_storage::DoctorStorage;
//!
//! let storage = InMemoryStorage::new();
//!
//! let doctor = medidir_core::Doctor::builder(
//!     "Dr. Smith", "Cardiologist", "MBBS, MD", 9, "Delhi", 600.0,
//! )
//! .build();
//! let created = storage.insert(doctor).await?;
//! ```

pub mod storage;

// Re-export the DoctorStorage trait for convenience
pub use medidir_storage::{DoctorQuery, DoctorStorage, StorageError};
pub use storage::InMemoryStorage;

/// Type alias for a shareable DoctorStorage instance.
pub type DynDoctorStorage = std::sync::Arc<dyn DoctorStorage>;

/// Creates a new in-memory DoctorStorage instance.
pub fn create_storage() -> DynDoctorStorage {
    std::sync::Arc::new(InMemoryStorage::new())
}
