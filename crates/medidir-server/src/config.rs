use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

// Default derived via field defaults

impl AppConfig {
    pub fn validate(&self) -> Result<(), String> {
        // Server validations
        if self.server.port == 0 {
            return Err("server.port must be > 0".into());
        }
        if self.server.host.trim().is_empty() {
            return Err("server.host must not be empty".into());
        }
        if self.server.body_limit_bytes == 0 {
            return Err("server.body_limit_bytes must be > 0".into());
        }
        // CORS validation: the origin must be usable as a header value
        let origin = self.cors.allowed_origin.trim();
        if origin.is_empty() {
            return Err("cors.allowed_origin must not be empty".into());
        }
        if origin.parse::<HeaderValue>().is_err() {
            return Err(format!("cors.allowed_origin is not a valid origin: {origin:?}"));
        }
        // Logging validation
        let lvl = self.logging.level.to_ascii_lowercase();
        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_levels.contains(&lvl.as_str()) {
            return Err(format!("logging.level must be one of {valid_levels:?}"));
        }
        Ok(())
    }

    pub fn addr(&self) -> SocketAddr {
        use std::net::{IpAddr, Ipv4Addr};
        let host: IpAddr = self
            .server
            .host
            .parse()
            .unwrap_or(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));
        SocketAddr::from((host, self.server.port))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    8080
}
fn default_body_limit() -> usize {
    1024 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_bytes: default_body_limit(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// The single origin allowed by the CORS policy.
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

fn default_allowed_origin() -> String {
    "http://localhost:3000".into()
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: default_allowed_origin(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}
fn default_log_level() -> String {
    "info".into()
}
impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

pub mod loader {
    use super::AppConfig;
    use config::{Config, Environment, File};
    use std::path::PathBuf;

    pub fn load_config(path: Option<&str>) -> Result<AppConfig, String> {
        let mut builder = Config::builder();
        match path {
            Some(p) => {
                let pathbuf = PathBuf::from(p);
                if pathbuf.exists() {
                    builder = builder.add_source(File::from(pathbuf));
                }
            }
            None => {
                // Try default root-level file
                let default_path = PathBuf::from("medidir.toml");
                if default_path.exists() {
                    builder = builder.add_source(File::from(default_path));
                }
            }
        }
        // Environment variable overrides, e.g., MEDIDIR__SERVER__PORT=9090
        builder = builder.add_source(
            Environment::with_prefix("MEDIDIR")
                .try_parsing(true)
                .separator("__"),
        );
        let cfg = builder
            .build()
            .map_err(|e| format!("config build error: {e}"))?;
        let merged: AppConfig = cfg
            .try_deserialize()
            .map_err(|e| format!("config deserialize error: {e}"))?;
        // Validate
        merged.validate()?;
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = AppConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.body_limit_bytes, 1024 * 1024);
        assert_eq!(cfg.cors.allowed_origin, "http://localhost:3000");
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn validate_rejects_zero_port() {
        let mut cfg = AppConfig::default();
        cfg.server.port = 0;
        let err = cfg.validate().unwrap_err();
        assert!(err.contains("server.port"));
    }

    #[test]
    fn validate_rejects_blank_host() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "   ".into();
        assert!(cfg.validate().unwrap_err().contains("server.host"));
    }

    #[test]
    fn validate_rejects_zero_body_limit() {
        let mut cfg = AppConfig::default();
        cfg.server.body_limit_bytes = 0;
        assert!(cfg.validate().unwrap_err().contains("body_limit_bytes"));
    }

    #[test]
    fn validate_rejects_bad_origin() {
        let mut cfg = AppConfig::default();
        cfg.cors.allowed_origin = String::new();
        assert!(cfg.validate().unwrap_err().contains("allowed_origin"));

        cfg.cors.allowed_origin = "http://local\nhost".into();
        assert!(cfg.validate().unwrap_err().contains("allowed_origin"));
    }

    #[test]
    fn validate_rejects_unknown_log_level() {
        let mut cfg = AppConfig::default();
        cfg.logging.level = "chatty".into();
        assert!(cfg.validate().unwrap_err().contains("logging.level"));
    }

    #[test]
    fn addr_falls_back_to_unspecified_on_unparseable_host() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not-an-ip".into();
        cfg.server.port = 8081;
        assert_eq!(cfg.addr().to_string(), "0.0.0.0:8081");
    }
}
