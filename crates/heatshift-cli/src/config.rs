use std::env;
use std::fmt;
use std::path::PathBuf;

/// Process-level settings, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Catalog file used when `--catalog` is not given. `None` means the
    /// bundled dataset.
    pub catalog_path: Option<PathBuf>,
    pub telemetry: TelemetryConfig,
}

impl CliConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let log_level = env::var("HEATSHIFT_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        let catalog_path = match env::var("HEATSHIFT_CATALOG") {
            Ok(raw) if raw.trim().is_empty() => None,
            Ok(raw) => {
                let path = PathBuf::from(raw.trim());
                if !path.is_file() {
                    return Err(ConfigError::MissingCatalog { path });
                }
                Some(path)
            }
            Err(_) => None,
        };

        Ok(Self {
            catalog_path,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingCatalog { path: PathBuf },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingCatalog { path } => write!(
                f,
                "HEATSHIFT_CATALOG points to '{}', which is not a readable file",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("HEATSHIFT_LOG_LEVEL");
        env::remove_var("HEATSHIFT_CATALOG");
    }

    #[test]
    fn defaults_when_unset() {
        let _lock = env_guard().lock().unwrap();
        reset_env();

        let config = CliConfig::load().expect("config loads");
        assert_eq!(config.telemetry.log_level, "warn");
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn reads_log_level() {
        let _lock = env_guard().lock().unwrap();
        reset_env();
        env::set_var("HEATSHIFT_LOG_LEVEL", "heatshift_core=debug");

        let config = CliConfig::load().expect("config loads");
        assert_eq!(config.telemetry.log_level, "heatshift_core=debug");
        reset_env();
    }

    #[test]
    fn blank_catalog_means_builtin() {
        let _lock = env_guard().lock().unwrap();
        reset_env();
        env::set_var("HEATSHIFT_CATALOG", "   ");

        let config = CliConfig::load().expect("config loads");
        assert!(config.catalog_path.is_none());
        reset_env();
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        let _lock = env_guard().lock().unwrap();
        reset_env();
        env::set_var("HEATSHIFT_CATALOG", "/definitely/not/here/catalog.json");

        let err = CliConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::MissingCatalog { .. }));
        reset_env();
    }
}
