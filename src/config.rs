use crate::error::Result;
use config::{Config, Environment, File as ConfigFile, FileFormat, Map};
use serde::Deserialize;

const ENV_KEYS: [&str; 2] = ["TRACING_LEVEL", "LOG_FILE_PATH"];

/// Logging knobs read from an optional `extdir.toml` and the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub tracing_level: String,
    pub log_file_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tracing_level: "info".to_string(),
            log_file_path: None,
        }
    }
}

pub fn load_configuration() -> Result<AppConfig> {
    let builder = Config::builder()
        .set_default("tracing_level", "info")?
        .add_source(ConfigFile::new("extdir.toml", FileFormat::Toml).required(false))
        .add_source(Environment::default().source(Some(logging_env())))
        .build()?;
    Ok(builder.try_deserialize::<AppConfig>()?)
}

/// Only the logging variables are read; the rest of the environment is ignored.
fn logging_env() -> Map<String, String> {
    ENV_KEYS
        .iter()
        .filter_map(|key| std::env::var(key).ok().map(|value| (key.to_string(), value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.tracing_level, "info");
        assert!(config.log_file_path.is_none());
    }

    #[test]
    fn test_deserialize_from_toml_source() {
        let config = Config::builder()
            .set_default("tracing_level", "info")
            .unwrap()
            .add_source(ConfigFile::from_str(
                "tracing_level = \"debug\"\nlog_file_path = \"logs/extdir.log\"",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize::<AppConfig>()
            .unwrap();
        assert_eq!(config.tracing_level, "debug");
        assert_eq!(config.log_file_path.as_deref(), Some("logs/extdir.log"));
    }
}
