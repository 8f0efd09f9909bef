use std::net::SocketAddr;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use medidir_db_memory::{DynDoctorStorage, create_storage};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{config::AppConfig, handlers};

const FALLBACK_ORIGIN: &str = "http://localhost:3000";

/// Shared handler state. The storage handle is created once at startup and
/// lives for the whole process.
#[derive(Clone)]
pub struct AppState {
    pub storage: DynDoctorStorage,
}

pub struct MedidirServer {
    addr: SocketAddr,
    app: Router,
    backend: &'static str,
}

pub fn build_app(cfg: &AppConfig) -> Router {
    build_app_with_storage(cfg, create_storage())
}

pub fn build_app_with_storage(cfg: &AppConfig, storage: DynDoctorStorage) -> Router {
    let body_limit = cfg.server.body_limit_bytes;
    let state = AppState { storage };
    Router::new()
        // Liveness probe
        .route("/", get(handlers::root))
        // Doctor collection
        .route(
            "/api/doctors",
            get(handlers::list_doctors).post(handlers::create_doctor),
        )
        .route(
            "/api/doctors/{id}",
            get(handlers::get_doctor)
                .put(handlers::update_doctor)
                .delete(handlers::delete_doctor),
        )
        // Development reset: wipes the collection and inserts the sample set
        .route("/api/seed-doctors", post(handlers::seed_doctors))
        .with_state(state)
        .layer(cors_layer(cfg))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    use tracing::field::Empty;
                    // Browser favicon probes get a disabled span and no access log
                    if req.uri().path() == "/favicon.ico" {
                        return tracing::span!(tracing::Level::TRACE, "noop");
                    }
                    tracing::info_span!(
                        "http.request",
                        http.method = %req.method(),
                        http.target = %req.uri(),
                        http.status_code = Empty,
                    )
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &tracing::Span| {
                        span.record(
                            "http.status_code",
                            &tracing::field::display(res.status().as_u16()),
                        );
                        if let Some(meta) = span.metadata() {
                            if meta.name() != "noop" {
                                tracing::info!(
                                    http.status = %res.status().as_u16(),
                                    elapsed_ms = %latency.as_millis(),
                                    "request handled"
                                );
                            }
                        }
                    },
                ),
        )
        .layer(DefaultBodyLimit::max(body_limit))
}

// The declared method list stays GET and POST; PUT and DELETE are still
// served on /api/doctors/{id} without being advertised here.
fn cors_layer(cfg: &AppConfig) -> CorsLayer {
    let origin = match cfg.cors.allowed_origin.parse::<HeaderValue>() {
        Ok(v) => v,
        Err(_) => HeaderValue::from_static(FALLBACK_ORIGIN),
    };
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

pub struct ServerBuilder {
    addr: SocketAddr,
    config: AppConfig,
    storage: Option<DynDoctorStorage>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        let cfg = AppConfig::default();
        Self {
            addr: cfg.addr(),
            config: cfg,
            storage: None,
        }
    }

    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    pub fn with_config(mut self, cfg: AppConfig) -> Self {
        self.addr = cfg.addr();
        self.config = cfg;
        self
    }

    pub fn with_storage(mut self, storage: DynDoctorStorage) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn build(self) -> MedidirServer {
        let storage = self.storage.unwrap_or_else(create_storage);
        let backend = storage.backend_name();
        let app = build_app_with_storage(&self.config, storage);

        MedidirServer {
            addr: self.addr,
            app,
            backend,
        }
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MedidirServer {
    pub async fn run(self) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        tracing::info!(storage.backend = self.backend, "listening on {}", self.addr);
        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    // Wait for Ctrl+C
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
