//! `greynoise setup` - Save the API key to the configuration file.

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::args::SetupArgs;
use crate::config::{Config, ConfigStore};

pub fn execute(store: &ConfigStore, args: SetupArgs) -> Result<String> {
    let api_key = args.api_key.context("an API key is required, pass it with -k/--api-key")?;
    store.save(&Config::with_api_key(api_key))?;
    debug!(path = %store.path().display(), "configuration saved");

    Ok(format!("Configuration saved to '{}'", store.path().display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_config() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::at(dir.path().join("config.toml"));
        let args = SetupArgs {
            api_key: Some("<api_key>".to_string()),
        };

        let message = execute(&store, args).unwrap();

        assert_eq!(message, format!("Configuration saved to '{}'", store.path().display()));
        assert_eq!(store.load().unwrap(), Config::with_api_key("<api_key>"));
    }

    #[test]
    fn test_missing_key_saves_nothing() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::at(dir.path().join("config.toml"));

        assert!(execute(&store, SetupArgs { api_key: None }).is_err());
        assert!(!store.path().exists());
    }
}
