use std::net::SocketAddr;

use serde::Deserialize;
use vitals_core::error::{Result, VitalsError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub health: HealthSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            health: HealthSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(VitalsError::UnsupportedVersion);
        }

        self.gateway.validate()?;
        self.health.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            VitalsError::BadRequest(format!("gateway.listen must be a valid SocketAddr: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthSection {
    /// Reported as `environment.service_name`.
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Blocking window used to measure process CPU.
    #[serde(default = "default_cpu_sample_window_ms")]
    pub cpu_sample_window_ms: u64,
}

impl Default for HealthSection {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            cpu_sample_window_ms: default_cpu_sample_window_ms(),
        }
    }
}

impl HealthSection {
    pub fn validate(&self) -> Result<()> {
        if self.service_name.trim().is_empty() {
            return Err(VitalsError::BadRequest(
                "health.service_name must not be empty".into(),
            ));
        }
        if !(10..=1000).contains(&self.cpu_sample_window_ms) {
            return Err(VitalsError::BadRequest(
                "health.cpu_sample_window_ms must be between 10 and 1000".into(),
            ));
        }
        Ok(())
    }
}

fn default_service_name() -> String {
    "search-service".into()
}
fn default_cpu_sample_window_ms() -> u64 {
    100
}
