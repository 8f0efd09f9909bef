use std::{env, fs};

use medidir_server::config::loader::load_config;

#[test]
fn config_parsing_and_env_overrides_and_validation() {
    // Create a temporary TOML configuration file
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("medidir.toml");

    let toml_content = r#"
[server]
host = "127.0.0.1"
port = 8081
body_limit_bytes = 2048

[cors]
allowed_origin = "http://localhost:5173"

[logging]
level = "debug"
"#;
    fs::write(&path, toml_content).expect("write toml");

    // 1) Valid config parses
    let cfg = load_config(path.to_str()).expect("should parse config");
    assert_eq!(cfg.server.host, "127.0.0.1");
    assert_eq!(cfg.server.port, 8081);
    assert_eq!(cfg.server.body_limit_bytes, 2048);
    assert_eq!(cfg.cors.allowed_origin, "http://localhost:5173");
    assert_eq!(cfg.logging.level.to_ascii_lowercase(), "debug");

    // 2) Env override should win over file
    unsafe {
        env::set_var("MEDIDIR__SERVER__PORT", "9090");
    }
    let cfg_env = load_config(path.to_str()).expect("should parse config with env overrides");
    assert_eq!(cfg_env.server.port, 9090);
    // cleanup env var
    unsafe {
        env::remove_var("MEDIDIR__SERVER__PORT");
    }

    // 3) Invalid config (zero port) should error
    let invalid_path = dir.path().join("invalid.toml");
    let invalid_toml = r#"
[server]
port = 0
"#;
    fs::write(&invalid_path, invalid_toml).expect("write invalid toml");
    let err = load_config(invalid_path.to_str()).expect_err("expected validation error");
    assert!(err.contains("server.port"));

    // 4) A missing file falls back to the defaults
    let missing = dir.path().join("nope.toml");
    let cfg = load_config(missing.to_str()).expect("defaults apply without a file");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.cors.allowed_origin, "http://localhost:3000");
}
