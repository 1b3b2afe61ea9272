//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use std::path::{Path, PathBuf};

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use planner_config::{ConfigError, PlannerConfig};

#[test]
fn loads_storage_and_general_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[storage]
data_dir = "/var/lib/sysplanner"
file_name = "planner.jsonl"

[general]
default_category = "Geral"
default_limit = 5
"#,
        )?;

        let config = PlannerConfig::load_from_file(Path::new("config.toml"))
            .map_err(|e| e.to_string())?;

        assert_eq!(
            config.storage.tasks_path(),
            PathBuf::from("/var/lib/sysplanner/planner.jsonl")
        );
        assert_eq!(config.general.default_category, "Geral");
        assert_eq!(config.general.default_limit, 5);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_limit = 50
"#,
        )?;

        let config: PlannerConfig = Figment::from(Serialized::defaults(PlannerConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_limit, 50);
        assert_eq!(config.general.default_category, "General");
        assert_eq!(config.storage.file_name, "tasks.jsonl");
        assert!(config.storage.data_dir.is_empty());
        Ok(())
    });
}

#[test]
fn invalid_value_in_toml_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_category = ""
"#,
        )?;

        let result = PlannerConfig::load_from_file(Path::new("config.toml"));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[general\ndefault_limit = ")?;

        let result = PlannerConfig::load_from_file(Path::new("config.toml"));
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}
