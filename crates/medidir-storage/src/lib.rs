//! # medidir-storage
//!
//! Storage abstraction layer for the medidir server.
//!
//! This crate defines the trait and types every storage backend must
//! implement. It contains no backend itself; implementations live in
//! separate crates.
//!
//! ## Overview
//!
//! The main trait is [`DoctorStorage`], which defines the contract for:
//! - CRUD operations (insert, fetch, update, delete)
//! - Bulk operations used by the reset/seed flow (`insert_many`, `delete_all`)
//! - Filtered listing via [`DoctorQuery`]
//!
//! ## Example
//!
//! ```ignore
//! use medidir_storage::{DoctorQuery, DoctorStorage, StorageError};
//!
//! async fn senior_cardiologists(
//!     storage: &dyn DoctorStorage,
//! ) -> Result<Vec<medidir_core::Doctor>, StorageError> {
//!     let query = DoctorQuery::new()
//!         .with_specialty("cardio")
//!         .with_min_experience(10);
//!     storage.search(&query).await
//! }
//! ```

mod error;
mod query;
mod traits;

pub use error::{ErrorCategory, StorageError};
pub use query::{DoctorQuery, listing_order};
pub use traits::DoctorStorage;

/// Type alias for a storage result.
pub type StorageResult<T> = Result<T, StorageError>;

/// Type alias for a shared storage trait object.
pub type DynStorage = std::sync::Arc<dyn DoctorStorage>;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use medidir_storage::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ErrorCategory, StorageError};
    pub use crate::query::{DoctorQuery, listing_order};
    pub use crate::traits::DoctorStorage;
    pub use crate::{DynStorage, StorageResult};
}
