use crate::{AppConfig, DatabaseConfig};
use secrecy::{ExposeSecret, Secret};

#[test]
fn test_secret_redaction() {
    let secret = Secret::new("sqlite://catalog.db".to_string());
    let debug_output = format!("{:?}", secret);
    assert!(debug_output.contains("Secret([REDACTED"));
    assert!(!debug_output.contains("catalog.db"));
}

#[test]
fn test_config_struct_redaction() {
    let config = DatabaseConfig {
        url: Secret::new("sqlite:///var/lib/catalog/catalog.db".to_string()),
        max_connections: 5,
    };
    let debug_output = format!("{:?}", config);
    assert!(!debug_output.contains("/var/lib"));
    assert!(debug_output.contains("Secret([REDACTED"));
}

#[test]
fn test_load_from_toml() {
    figment::Jail::expect_with(|jail| {
        jail.create_dir("config")?;
        jail.create_file(
            "config/default.toml",
            r#"
            app_name = "product-catalog"

            [database]
            url = "sqlite::memory:"

            [server]
            host = "0.0.0.0"
            port = 8000
            "#,
        )?;

        let config = AppConfig::load("config").expect("config loads");
        assert_eq!(config.app_name, "product-catalog");
        assert_eq!(config.database.url.expose_secret(), "sqlite::memory:");
        assert_eq!(config.server.port, 8000);
        assert!(config.is_development());
        assert!(!config.is_production());
        Ok(())
    });
}

#[test]
fn test_defaults_applied() {
    figment::Jail::expect_with(|jail| {
        jail.create_dir("config")?;
        jail.create_file(
            "config/default.toml",
            r#"
            app_name = "product-catalog"

            [database]
            url = "sqlite::memory:"

            [server]
            "#,
        )?;

        let config = AppConfig::load("config").expect("config loads");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.telemetry.log_level, "info");
        Ok(())
    });
}
