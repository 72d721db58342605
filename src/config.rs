use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use config::{Config, Environment, File};
use moka::future::Cache;
use serde::Deserialize;
use tracing::{debug, info};

use crate::schemas::AppState;

/// Server settings, resolved from defaults, an optional config file and
/// `PHOENIX_*` environment variables, in that order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerSettings {
    /// Address the HTTP server binds to
    pub bind_address: String,
    /// CSV file served at the dataset endpoint
    pub dataset_path: PathBuf,
    /// Directory holding the built wasm bundle, served under `/pkg`
    pub static_dir: PathBuf,
    /// Lifetime of cached dataset summaries
    pub cache_ttl_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            dataset_path: PathBuf::from("data/temperature_data.csv"),
            static_dir: PathBuf::from("workspace/frontend/pkg"),
            cache_ttl_secs: 300,
        }
    }
}

impl ServerSettings {
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("bind_address", defaults.bind_address)?
            .set_default(
                "dataset_path",
                defaults.dataset_path.to_string_lossy().to_string(),
            )?
            .set_default(
                "static_dir",
                defaults.static_dir.to_string_lossy().to_string(),
            )?
            .set_default("cache_ttl_secs", defaults.cache_ttl_secs as i64)?;

        if let Some(path) = config_file {
            debug!("Reading configuration file {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings: ServerSettings = builder
            .add_source(Environment::with_prefix("PHOENIX"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

/// Initialize application state from resolved settings
pub fn initialize_app_state(settings: &ServerSettings) -> AppState {
    info!("Serving dataset from {}", settings.dataset_path.display());
    debug!("Static assets directory: {}", settings.static_dir.display());

    let cache = Cache::builder()
        .max_capacity(100)
        .time_to_live(Duration::from_secs(settings.cache_ttl_secs))
        .build();

    AppState {
        dataset_path: settings.dataset_path.clone(),
        static_dir: settings.static_dir.clone(),
        cache,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        let settings = ServerSettings::load(None).unwrap();
        let defaults = ServerSettings::default();
        // Environment may override the bind address on CI machines.
        assert_eq!(settings.dataset_path, defaults.dataset_path);
        assert_eq!(settings.cache_ttl_secs, 300);
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let path = std::env::temp_dir().join(format!(
            "phoenix-climate-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "bind_address = \"127.0.0.1:8088\"\ncache_ttl_secs = 5\n",
        )
        .unwrap();

        let settings = ServerSettings::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.bind_address, "127.0.0.1:8088");
        assert_eq!(settings.cache_ttl_secs, 5);
        assert_eq!(settings.static_dir, ServerSettings::default().static_dir);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let path = std::env::temp_dir().join("phoenix-climate-does-not-exist.toml");
        assert!(ServerSettings::load(Some(&path)).is_err());
    }
}
