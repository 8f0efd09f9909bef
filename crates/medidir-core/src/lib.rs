pub mod doctor;
pub mod id;
pub mod seed;
pub mod time;

pub use doctor::{DEFAULT_HOSPITAL, DEFAULT_LANGUAGE, Doctor, DoctorBuilder};
pub use id::generate_id;
pub use seed::seed_doctors;
pub use time::{Timestamp, TimestampError, now_utc};
