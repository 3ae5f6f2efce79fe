//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `hubreport.toml` in the working directory unless another path
//! is given on the command line. Every field has a default so the file is
//! optional. Environment variables take precedence over file values.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use hubreport_adapter_http_reqwest::HubClientConfig;
use hubreport_adapter_report_file::ReportFileConfig;
use hubreport_domain::endpoint::SensorEndpoint;
use hubreport_domain::error::HubReportError;

/// Default configuration file name.
pub const DEFAULT_PATH: &str = "hubreport.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sensor state URLs.
    pub sensors: SensorsConfig,
    /// Hub connection settings.
    pub hub: HubClientConfig,
    /// Report file location.
    pub report: ReportFileConfig,
    /// HTTP front settings (`serve` mode only).
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// The three polled sensors.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SensorsConfig {
    pub air_url: String,
    pub water_url: String,
    pub pressure_url: String,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Upper bound for one on-demand run, in seconds.
    pub run_timeout_secs: u64,
    /// Directory served for paths that match no route.
    pub static_dir: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("HUBREPORT_AIR_URL") {
            self.sensors.air_url = val;
        }
        if let Some(val) = var("HUBREPORT_WATER_URL") {
            self.sensors.water_url = val;
        }
        if let Some(val) = var("HUBREPORT_PRESSURE_URL") {
            self.sensors.pressure_url = val;
        }
        if let Some(val) = var("HUBREPORT_TOKEN") {
            self.hub.auth_token = val;
        }
        if let Some(val) = var("HUBREPORT_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse() {
                self.hub.timeout_secs = secs;
            }
        }
        if let Some(val) = var("HUBREPORT_REPORT_PATH") {
            self.report.path = PathBuf::from(val);
        }
        if let Some(val) = var("HUBREPORT_REPORT_TMP_PATH") {
            self.report.tmp_path = Some(PathBuf::from(val));
        }
        if let Some(val) = var("HUBREPORT_HOST") {
            self.server.host = val;
        }
        if let Some(val) = var("HUBREPORT_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("HUBREPORT_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = var("HUBREPORT_STATIC_DIR") {
            self.server.static_dir = Some(PathBuf::from(val));
        }
        if let Some(val) = var("HUBREPORT_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.endpoints()?;
        if self.hub.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "hub timeout must be non-zero".to_string(),
            ));
        }
        if self.report.resolved_tmp_path() == self.report.path {
            return Err(ConfigError::Validation(
                "report tmp_path must differ from path".to_string(),
            ));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.server.run_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "run timeout must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// The polled endpoints, in report order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Endpoint`] when a sensor URL is empty.
    pub fn endpoints(&self) -> Result<Vec<SensorEndpoint>, ConfigError> {
        Ok(vec![
            SensorEndpoint::new("Air", &self.sensors.air_url)?,
            SensorEndpoint::new("Eau", &self.sensors.water_url)?,
            SensorEndpoint::new("Pression", &self.sensors.pressure_url)?,
        ])
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Upper bound for one run triggered over HTTP.
    #[must_use]
    pub fn run_timeout(&self) -> Duration {
        Duration::from_secs(self.server.run_timeout_secs)
    }
}

impl Default for SensorsConfig {
    fn default() -> Self {
        Self {
            air_url: "http://localhost:8123/api/states/sensor.air_temperature".to_string(),
            water_url: "http://localhost:8123/api/states/sensor.water_temperature".to_string(),
            pressure_url: "http://localhost:8123/api/states/sensor.pressure".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            run_timeout_secs: 15,
            static_dir: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "hubreport=info,hubreport_app=info,hubreport_adapter_http_reqwest=info,tower_http=debug"
                .to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// A sensor endpoint is not usable.
    #[error("invalid sensor endpoint")]
    Endpoint(#[from] HubReportError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
