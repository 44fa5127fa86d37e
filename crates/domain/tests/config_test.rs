use certwatch_domain::config::CacheBackend;
use certwatch_domain::{CliOverrides, Config, ConfigError};
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.server.web_port, 8080);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.server.http_cache_max_age, 86400);
    assert_eq!(config.cache.backend, CacheBackend::Memory);
    assert_eq!(config.cache.ssl_ttl_secs, 86400);
    assert_eq!(config.cache.whois_ttl_secs, 300);
    assert_eq!(config.upstream.timeout_ms, 5000);
    assert_eq!(config.upstream.whois_root_server, "whois.iana.org");
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = Config::from_toml_str(
        r#"
        [cache]
        backend = "file"
        whois_ttl_secs = 60

        [upstream.whois_servers]
        com = "whois.verisign-grs.com"
        "#,
    )
    .unwrap();

    assert_eq!(config.cache.backend, CacheBackend::File);
    assert_eq!(config.cache.whois_ttl_secs, 60);
    assert_eq!(config.cache.ssl_ttl_secs, 86400);
    assert_eq!(config.server.web_port, 8080);
    assert_eq!(
        config.upstream.whois_servers.get("com").map(String::as_str),
        Some("whois.verisign-grs.com")
    );
}

#[test]
fn test_cli_overrides_win() {
    let mut config = Config::from_toml_str("[server]\nweb_port = 9000\n").unwrap();
    config.apply_overrides(CliOverrides {
        web_port: Some(9100),
        log_level: Some("debug".to_string()),
        cache_backend: Some(CacheBackend::File),
        cache_dir: Some(PathBuf::from("/tmp/certwatch")),
        ..Default::default()
    });

    assert_eq!(config.server.web_port, 9100);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.cache.backend, CacheBackend::File);
    assert_eq!(config.cache.directory, PathBuf::from("/tmp/certwatch"));
}

#[test]
fn test_validate_rejects_zero_ttl() {
    let mut config = Config::default();
    config.cache.whois_ttl_secs = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_unknown_log_level() {
    let mut config = Config::default();
    config.logging.level = "loud".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_load_missing_file_reports_path() {
    let err = Config::load(Some("/nonexistent/certwatch.toml"), CliOverrides::default())
        .unwrap_err();
    assert!(err.to_string().contains("/nonexistent/certwatch.toml"));
}

#[test]
fn test_cache_backend_from_str() {
    assert_eq!("memory".parse::<CacheBackend>(), Ok(CacheBackend::Memory));
    assert_eq!("FILE".parse::<CacheBackend>(), Ok(CacheBackend::File));
    assert!("redis".parse::<CacheBackend>().is_err());
}
