use alimento_mealplan::{MAX_DAYS, MIN_DAYS};
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    pub planner: PlannerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON catalog to load instead of the bundled sample
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    pub days: u8,
    #[serde(default)]
    pub preferences: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (ALIMENTO__PLANNER__DAYS, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("planner.days", 7)?
            .set_default("planner.preferences", "")?
            .set_default("observability.log_level", "info")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Missing file is fine, defaults cover everything
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("ALIMENTO")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_DAYS..=MAX_DAYS).contains(&self.planner.days) {
            return Err(format!(
                "planner.days must be between {MIN_DAYS} and {MAX_DAYS}, got {}",
                self.planner.days
            ));
        }
        if self.observability.log_level.trim().is_empty() {
            return Err("observability.log_level must not be empty".to_string());
        }
        if self
            .catalog
            .path
            .as_deref()
            .is_some_and(|path| path.trim().is_empty())
        {
            return Err("catalog.path must not be empty when set".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(days: u8) -> Config {
        Config {
            catalog: CatalogConfig::default(),
            planner: PlannerConfig {
                days,
                preferences: String::new(),
            },
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_zero_days() {
        assert!(config(0).validate().is_err());
    }

    #[test]
    fn test_validation_too_many_days() {
        assert!(config(15).validate().is_err());
    }

    #[test]
    fn test_validation_empty_log_level() {
        let mut config = config(7);
        config.observability.log_level = " ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_blank_catalog_path() {
        let mut config = config(7);
        config.catalog.path = Some(String::new());

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config(1).validate().is_ok());
        assert!(config(14).validate().is_ok());
    }
}
