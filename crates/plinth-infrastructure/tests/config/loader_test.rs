//! Configuration Loader Tests

use figment::Jail;
use plinth_infrastructure::config::{AppConfig, ConfigLoader, DataSettings};
use plinth_infrastructure::constants::DEFAULT_LOG_LEVEL;
use tempfile::TempDir;

#[test]
fn test_config_loader_default() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        assert!(!config.startup.ignore_startup_tasks);
        assert_eq!(config.web.virtual_root, "~/");
        assert!(!config.data.is_valid());
        Ok(())
    });
}

#[test]
fn test_default_file_in_working_directory_is_loaded() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "plinth.toml",
            r#"
            [data]
            provider = "SqlServer"
            connection_string = "Server=.;Database=site"

            [startup]
            ignore_startup_tasks = true
            "#,
        )?;

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.data.provider, "SqlServer");
        assert!(config.startup.ignore_startup_tasks);
        let provider_config = config.data.provider_config();
        assert!(provider_config.is_valid);
        assert_eq!(provider_config.connection, "Server=.;Database=site");
        Ok(())
    });
}

#[test]
fn test_environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
            [data]
            provider = "sqlce"
            connection_string = "Data Source=site.sdf"
            "#,
        )?;
        jail.set_env("PLINTH__DATA__PROVIDER", "mysql");
        jail.set_env("PLINTH__LOGGING__LEVEL", "debug");

        let config = ConfigLoader::new()
            .with_config_path("custom.toml")
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.data.provider, "mysql");
        assert_eq!(config.data.connection_string, "Data Source=site.sdf");
        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let loader = ConfigLoader::new().with_config_path("does-not-exist.toml");
        let config = loader.load().map_err(|e| e.to_string())?;

        assert_eq!(config.data, DataSettings::default());
        assert!(loader.config_path().is_some());
        Ok(())
    });
}

#[test]
fn test_invalid_log_level_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("PLINTH__LOGGING__LEVEL", "chatty");

        let err = ConfigLoader::new().load().unwrap_err();
        assert!(err.is_configuration());
        Ok(())
    });
}

#[test]
fn test_invalid_discovery_pattern_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("PLINTH__DISCOVERY__SKIP_PATTERN", "([");

        let err = ConfigLoader::new().load().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("discovery.skip_pattern"));
        Ok(())
    });
}

#[test]
fn test_empty_virtual_root_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("plinth.toml", "[web]\nvirtual_root = \"  \"\n")?;

        let err = ConfigLoader::new().load().unwrap_err();
        assert!(err.to_string().contains("virtual_root"));
        Ok(())
    });
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("saved.toml");

    let mut original = AppConfig::default();
    original.data = DataSettings::new("mysql", "Server=localhost;Database=site");
    original.startup.ignore_startup_tasks = true;

    let loader = ConfigLoader::new().with_env_prefix("PLINTH_SAVE_TEST");
    loader.save_to_file(&original, &config_path).unwrap();

    let loaded = ConfigLoader::new()
        .with_env_prefix("PLINTH_SAVE_TEST")
        .with_config_path(&config_path)
        .load()
        .unwrap();

    assert_eq!(loaded.data, original.data);
    assert!(loaded.startup.ignore_startup_tasks);
}
