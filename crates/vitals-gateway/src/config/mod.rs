//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use vitals_core::error::{Result, VitalsError};

pub use schema::{GatewayConfig, GatewaySection, HealthSection};

/// Env var naming the config file.
pub const CONFIG_ENV: &str = "VITALS_CONFIG";
/// Config file used when `VITALS_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "vitals.yaml";

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| VitalsError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| VitalsError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the startup config.
///
/// An explicit `VITALS_CONFIG` path must exist. A missing default file falls
/// back to built-in defaults.
pub fn load_from_env() -> Result<GatewayConfig> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return load_from_file(&path);
    }

    match fs::read_to_string(DEFAULT_CONFIG_PATH) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = DEFAULT_CONFIG_PATH, "config file not found, using defaults");
            Ok(GatewayConfig::default())
        }
        Err(e) => Err(VitalsError::Internal(format!(
            "read config failed ({DEFAULT_CONFIG_PATH}): {e}"
        ))),
    }
}
