//! User configuration (stored in ~/.config/linkwatch/config.toml)

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{LinkwatchError, Result};
use crate::sources::SourceMatch;

const CONFIG_DIR: &str = "linkwatch";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "LINKWATCH_CONFIG_DIR";

/// Environment variable naming the store locator
pub const STORE_ENV_VAR: &str = "LINKWATCH_STORE";

/// Environment variable overriding the request timeout, in seconds
pub const TIMEOUT_ENV_VAR: &str = "LINKWATCH_TIMEOUT";

const MIN_TIMEOUT_SECONDS: u64 = 1;
const MAX_TIMEOUT_SECONDS: u64 = 300;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Endpoint URL or path to a local store file
    #[serde(default)]
    pub store: Option<String>,

    /// Per-request timeout; requests wait indefinitely when unset
    #[serde(default)]
    pub timeout_seconds: Option<u64>,

    /// How link sources are matched to known sources
    #[serde(default)]
    pub source_match: SourceMatch,
}

impl Config {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    LinkwatchError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config_missing_using_defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from the explicit path if given, else the default location, then
    /// apply environment overrides
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(LinkwatchError::not_found(
                        "config file",
                        path.display(),
                    ));
                }
                Self::load(path)?
            }
            None => Self::load(&Self::default_path()?)?,
        };
        config.apply_env();
        Ok(config)
    }

    /// Apply `LINKWATCH_STORE` and `LINKWATCH_TIMEOUT`
    pub fn apply_env(&mut self) {
        self.apply_overrides(
            std::env::var(STORE_ENV_VAR).ok(),
            std::env::var(TIMEOUT_ENV_VAR).ok(),
        );
    }

    fn apply_overrides(&mut self, store: Option<String>, timeout: Option<String>) {
        if let Some(store) = store.filter(|s| !s.trim().is_empty()) {
            self.store = Some(store);
        }

        if let Some(raw) = timeout {
            match raw.trim().parse::<u64>() {
                Ok(seconds) => self.timeout_seconds = Some(clamp_timeout(seconds)),
                Err(_) => tracing::warn!(value = raw.as_str(), "ignoring_invalid_timeout"),
            }
        }
    }

    /// Per-request timeout, kept within 1..=300 seconds whatever its origin
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds
            .map(|seconds| Duration::from_secs(clamp_timeout(seconds)))
    }
}

fn clamp_timeout(seconds: u64) -> u64 {
    seconds.clamp(MIN_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.store.is_none());
        assert!(config.timeout().is_none());
        assert_eq!(config.source_match, SourceMatch::Canonical);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "store = \"https://script.example.com/exec\"\ntimeout_seconds = 30\nsource_match = \"exact\"\n",
        )
        .unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(
            loaded.store.as_deref(),
            Some("https://script.example.com/exec")
        );
        assert_eq!(loaded.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(loaded.source_match, SourceMatch::Exact);
    }

    #[test]
    fn test_file_timeout_is_clamped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        fs::write(&path, "timeout_seconds = 0\n").unwrap();
        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.timeout(), Some(Duration::from_secs(1)));

        fs::write(&path, "timeout_seconds = 86400\n").unwrap();
        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.timeout(), Some(Duration::from_secs(300)));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let loaded = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "timeout_seconds = \"soon\"").unwrap();
        assert!(matches!(
            Config::load(&path).unwrap_err(),
            LinkwatchError::Toml(_)
        ));
    }

    #[test]
    fn test_overrides_clamp_timeout() {
        let mut config = Config::default();
        config.apply_overrides(Some("links.json".to_string()), Some("0".to_string()));
        assert_eq!(config.store.as_deref(), Some("links.json"));
        assert_eq!(config.timeout_seconds, Some(1));

        config.apply_overrides(None, Some("9000".to_string()));
        assert_eq!(config.timeout_seconds, Some(300));
        assert_eq!(config.store.as_deref(), Some("links.json"));

        config.apply_overrides(Some("  ".to_string()), Some("later".to_string()));
        assert_eq!(config.timeout_seconds, Some(300));
        assert_eq!(config.store.as_deref(), Some("links.json"));
    }
}
