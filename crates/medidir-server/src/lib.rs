pub mod config;
pub mod handlers;
pub mod observability;
pub mod server;

pub use config::{AppConfig, CorsConfig, LoggingConfig, ServerConfig};
pub use observability::{init_tracing, shutdown_tracing};
pub use server::{AppState, MedidirServer, ServerBuilder, build_app, build_app_with_storage};
