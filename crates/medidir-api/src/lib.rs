//! HTTP-facing types for the medidir server.
//!
//! This crate carries the request/query payload shapes and the error
//! taxonomy the handlers translate everything into. Every error response
//! has the same two-field JSON body: a stable human-facing `message` and an
//! `error` echoing the underlying failure description.

mod error;
mod requests;

pub use error::{ApiError, ErrorBody};
pub use requests::{CreateDoctorRequest, DoctorListQuery, UpdateDoctorRequest};
