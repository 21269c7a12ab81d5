//! Engine configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Which document store backs the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StoreBackend {
    /// Process-local arena; everything is lost on exit.
    #[default]
    Memory,
    /// JSON file under [`EngineConfig::data_dir`].
    File,
}

/// Configuration required to build a [`StatsEngine`](crate::StatsEngine).
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub store: StoreBackend,
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let data_dir = default_data_dir();
        Self {
            store: StoreBackend::Memory,
            log_dir: data_dir.join("logs"),
            data_dir,
        }
    }
}

impl EngineConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `VOLLEY_STORE` - `memory` or `file` (default: file)
    /// - `VOLLEY_DATA_DIR` - Directory holding the file store (default: platform-specific)
    /// - `VOLLEY_LOG_DIR` - Directory for log files (default: `<data dir>/logs`)
    pub fn from_env() -> Self {
        let mut config = Self {
            store: StoreBackend::File,
            ..Self::default()
        };

        if let Some(store) = read_env::<StoreBackend>("VOLLEY_STORE") {
            config.store = store;
        }

        if let Some(data_dir) = read_env::<PathBuf>("VOLLEY_DATA_DIR") {
            config.log_dir = data_dir.join("logs");
            config.data_dir = data_dir;
        }

        if let Some(log_dir) = read_env::<PathBuf>("VOLLEY_LOG_DIR") {
            config.log_dir = log_dir;
        }

        config
    }
}

/// Platform data directory for volley.
///
/// - macOS: `~/Library/Application Support/volley`
/// - Linux: `~/.local/share/volley` (or `$XDG_DATA_HOME/volley`)
/// - Windows: `%APPDATA%\volley`
/// - Fallback: `./volley-data`
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "volley")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./volley-data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_names_parse_case_insensitively() {
        assert_eq!("FILE".parse::<StoreBackend>().unwrap(), StoreBackend::File);
        assert_eq!("memory".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert!("mongo".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn default_keeps_logs_under_data_dir() {
        let config = EngineConfig::default();
        assert_eq!(config.store, StoreBackend::Memory);
        assert_eq!(config.log_dir, config.data_dir.join("logs"));
    }
}
