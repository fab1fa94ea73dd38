use std::fs;
use std::path::Path;
use std::time::Duration;

use engine_logging::{engine_info, engine_warn};
use estimator_engine::ConnectorSettings;
use serde::{Deserialize, Serialize};

/// On-disk form of [`ConnectorSettings`]. Credentials are never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct PersistedSettings {
    api_base: String,
    table: String,
    connect_timeout_secs: u64,
    request_timeout_secs: u64,
    max_body_bytes: u64,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        let defaults = ConnectorSettings::default();
        Self {
            api_base: defaults.api_base,
            table: defaults.table,
            connect_timeout_secs: defaults.connect_timeout.as_secs(),
            request_timeout_secs: defaults.request_timeout.as_secs(),
            max_body_bytes: defaults.max_body_bytes,
        }
    }
}

impl From<PersistedSettings> for ConnectorSettings {
    fn from(persisted: PersistedSettings) -> Self {
        Self {
            api_base: persisted.api_base,
            table: persisted.table,
            connect_timeout: Duration::from_secs(persisted.connect_timeout_secs),
            request_timeout: Duration::from_secs(persisted.request_timeout_secs),
            max_body_bytes: persisted.max_body_bytes,
        }
    }
}

/// Load connector settings; any problem falls back to defaults with a warning.
pub(crate) fn load_settings(path: &Path) -> ConnectorSettings {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return ConnectorSettings::default();
        }
        Err(err) => {
            engine_warn!("Failed to read settings from {:?}: {}", path, err);
            return ConnectorSettings::default();
        }
    };

    let persisted: PersistedSettings = match ron::from_str(&content) {
        Ok(settings) => settings,
        Err(err) => {
            engine_warn!("Failed to parse settings from {:?}: {}", path, err);
            return ConnectorSettings::default();
        }
    };

    engine_info!("Loaded settings from {:?}", path);
    persisted.into()
}
