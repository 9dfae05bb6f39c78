use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// =============================================================================
// Release source constants
// =============================================================================

/// Default base URL of the HashiCorp releases site
pub const DEFAULT_RELEASES_URL: &str = "https://releases.hashicorp.com";

/// Product whose releases are fetched
pub const DEFAULT_PRODUCT: &str = "terraform";

/// Timeout for fetch operations in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Default log level when neither the CLI nor RUST_LOG sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Tool configuration, loaded from an optional JSON file
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub releases: ReleasesConfig,
    pub log: LogConfig,
}

/// Release source configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ReleasesConfig {
    pub base_url: String,
    pub product: String,
    /// Request timeout in milliseconds
    pub timeout: u64,
}

impl ReleasesConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout)
    }
}

impl Default for ReleasesConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_RELEASES_URL.to_string(),
            product: DEFAULT_PRODUCT.to_string(),
            timeout: FETCH_TIMEOUT_MS,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LogConfig {
    pub level: String,
    /// Write logs to [`log_path`] instead of stderr
    pub to_file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            to_file: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Config {
    /// Load configuration from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the path to the data directory for tf-version.
/// Uses $XDG_DATA_HOME/tf-version if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/tf-version,
/// or ./tf-version if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("tf-version.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("tf-version")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "releases": {
                "timeout": 1000
            }
        }))
        .unwrap();

        assert_eq!(result.releases.timeout, 1000);
        assert_eq!(result.releases.base_url, DEFAULT_RELEASES_URL);
        assert_eq!(result.releases.product, DEFAULT_PRODUCT);
        assert_eq!(result.log, LogConfig::default());
    }

    #[test]
    fn config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "releases": {
                "baseUrl": "https://mirror.example.com",
                "product": "tofu",
                "timeout": 5000
            },
            "log": {
                "level": "debug",
                "toFile": true
            }
        }))
        .unwrap();

        assert_eq!(
            result,
            Config {
                releases: ReleasesConfig {
                    base_url: "https://mirror.example.com".to_string(),
                    product: "tofu".to_string(),
                    timeout: 5000,
                },
                log: LogConfig {
                    level: "debug".to_string(),
                    to_file: true,
                },
            }
        );
        assert_eq!(result.releases.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn load_reads_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"log": {"level": "info"}}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.log.level, "info");
        assert_eq!(config.releases, ReleasesConfig::default());
    }

    #[test]
    fn load_returns_error_for_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Json { .. })));
    }

    #[test]
    fn load_returns_error_for_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");

        assert!(matches!(Config::load(&path), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/tf-version"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.local/share/tf-version"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./tf-version"));
    }
}
