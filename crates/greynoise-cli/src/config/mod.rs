//! Configuration management.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Environment variable consulted when neither the flag nor the config file
/// provide an API key.
pub const API_KEY_ENV: &str = "GREYNOISE_API_KEY";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// GreyNoise API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Config {
    /// Configuration holding just an API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
        }
    }
}

/// Errors raised while reading or writing the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No file, or a file without an API key
    #[error("no API key configured in {}", .0.display())]
    NotFound(PathBuf),

    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Location of the configuration file and the operations on it.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// The per-user config file, e.g. `~/.config/greynoise/config.toml`.
    pub fn default_location() -> Result<Self, ConfigError> {
        let dirs = ProjectDirs::from("io", "greynoise", "greynoise").ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::at(dirs.config_dir().join("config.toml")))
    }

    /// A store backed by an explicit file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load configuration from file.
    ///
    /// A missing file, or one without a usable `api_key`, is reported as
    /// [`ConfigError::NotFound`].
    pub fn load(&self) -> Result<Config, ConfigError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound(self.path.clone()));
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;

        match config.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(config),
            _ => Err(ConfigError::NotFound(self.path.clone())),
        }
    }

    /// Save configuration to file, replacing any previous content.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: self.path.clone(),
            source,
        };

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(io_err)?;

        let content = toml::to_string_pretty(config)?;

        // Staging file is created owner-only with a unique name, then swapped in
        let mut staging = NamedTempFile::new_in(parent).map_err(io_err)?;
        staging.write_all(content.as_bytes()).map_err(io_err)?;
        staging.persist(&self.path).map_err(|e| io_err(e.error))?;

        Ok(())
    }
}

/// Pick the API key: explicit flag, then config file, then environment.
///
/// The first non-empty source wins. Config files that exist but cannot be
/// read or parsed are reported rather than skipped.
pub fn resolve_api_key(
    flag: Option<String>,
    store: &ConfigStore,
    env: Option<String>,
) -> anyhow::Result<String> {
    let non_empty = |key: &String| !key.trim().is_empty();

    if let Some(key) = flag.filter(non_empty) {
        return Ok(key);
    }

    match store.load() {
        Ok(Config { api_key: Some(key) }) => return Ok(key),
        Ok(Config { api_key: None }) | Err(ConfigError::NotFound(_)) => {}
        Err(e) => return Err(e.into()),
    }

    env.filter(non_empty).ok_or_else(|| {
        anyhow::anyhow!(
            "API key not found.\n\n\
             To fix this problem, please use any of the following methods:\n  \
             - Run 'greynoise setup -k <KEY>' to save it to the configuration file.\n  \
             - Pass it using the -k/--api-key option.\n  \
             - Set it in the {API_KEY_ENV} environment variable."
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ConfigStore {
        ConfigStore::at(dir.path().join("nested").join("config.toml"))
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = store_in(&dir).load().unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&Config::with_api_key("abc123")).unwrap();
        assert_eq!(store.load().unwrap().api_key.as_deref(), Some("abc123"));

        let text = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(text.trim(), r#"api_key = "abc123""#);
    }

    #[test]
    fn test_save_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&Config::with_api_key("old")).unwrap();
        store.save(&Config::with_api_key("new")).unwrap();

        assert_eq!(store.load().unwrap().api_key.as_deref(), Some("new"));
        let entries = std::fs::read_dir(store.path().parent().unwrap()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&Config::with_api_key("secret")).unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_load_without_key() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::at(dir.path().join("config.toml"));
        std::fs::write(store.path(), "api_key = \"\"\n").unwrap();

        assert!(matches!(store.load(), Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_malformed() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::at(dir.path().join("config.toml"));
        std::fs::write(store.path(), "api_key = ").unwrap();

        assert!(matches!(store.load(), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_flag_wins() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&Config::with_api_key("from-file")).unwrap();

        let key = resolve_api_key(Some("from-flag".into()), &store, Some("from-env".into())).unwrap();
        assert_eq!(key, "from-flag");
    }

    #[test]
    fn test_config_beats_env() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&Config::with_api_key("from-file")).unwrap();

        let key = resolve_api_key(None, &store, Some("from-env".into())).unwrap();
        assert_eq!(key, "from-file");
    }

    #[test]
    fn test_env_fallback() {
        let dir = TempDir::new().unwrap();
        let key = resolve_api_key(Some(String::new()), &store_in(&dir), Some("from-env".into())).unwrap();
        assert_eq!(key, "from-env");
    }

    #[test]
    fn test_no_key_anywhere() {
        let dir = TempDir::new().unwrap();
        let err = resolve_api_key(None, &store_in(&dir), None).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("greynoise setup"));
        assert!(message.contains("-k/--api-key"));
        assert!(message.contains(API_KEY_ENV));
    }
}
