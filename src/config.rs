//! Dashboard configuration: coordinator endpoint, launch policy, triggers.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::app_dirs;
use crate::dashboard::state::TriggerId;
use crate::training_gateway::JobType;

/// Default filename used to store the dashboard configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Persisted dashboard settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Base URL of the federated-learning coordinator.
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Probe the coordinator banner once at startup.
    #[serde(default = "default_true")]
    pub probe_on_startup: bool,
    /// How a settled launch with a non-200 status is surfaced.
    #[serde(default)]
    pub non_success_policy: NonSuccessPolicy,
    /// Launch triggers rendered by the dashboard, in declared order.
    #[serde(default = "default_triggers")]
    pub triggers: Vec<TriggerSpec>,
}

/// One configured launch trigger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerSpec {
    pub id: TriggerId,
    pub label: String,
    /// Workload sent with the launch; omit for a bare request.
    #[serde(default)]
    pub training_type: Option<JobType>,
}

/// Treatment of launches the coordinator answered with a non-200 status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NonSuccessPolicy {
    /// Record nothing; the absent start event is the only signal.
    Silent,
    /// Record one warning naming the status.
    Error,
}

impl Default for NonSuccessPolicy {
    fn default() -> Self {
        Self::Silent
    }
}

/// Errors that may occur while loading, validating, or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
    #[error("Invalid server URL {url}: {source}")]
    InvalidServerUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("Server URL {url} must use http or https")]
    UnsupportedUrlScheme { url: String },
    #[error("Config declares no launch triggers")]
    NoTriggers,
    #[error("Trigger ids may not be empty")]
    EmptyTriggerId,
    #[error("Duplicate trigger id {id}")]
    DuplicateTriggerId { id: TriggerId },
    #[error("Trigger {id} declares an empty training type")]
    EmptyTrainingType { id: TriggerId },
    #[error("No suitable config directory found")]
    NoConfigDir,
}

impl DashboardConfig {
    /// Reject configurations the dashboard cannot safely run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.server_url).map_err(|source| ConfigError::InvalidServerUrl {
            url: self.server_url.clone(),
            source,
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedUrlScheme {
                url: self.server_url.clone(),
            });
        }
        if self.triggers.is_empty() {
            return Err(ConfigError::NoTriggers);
        }
        let mut seen = std::collections::BTreeSet::new();
        for trigger in &self.triggers {
            if trigger.id.as_str().trim().is_empty() {
                return Err(ConfigError::EmptyTriggerId);
            }
            if !seen.insert(trigger.id.clone()) {
                return Err(ConfigError::DuplicateTriggerId {
                    id: trigger.id.clone(),
                });
            }
            if let Some(job) = &trigger.training_type {
                if job.as_str().trim().is_empty() {
                    return Err(ConfigError::EmptyTrainingType {
                        id: trigger.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            probe_on_startup: true,
            non_success_policy: NonSuccessPolicy::default(),
            triggers: default_triggers(),
        }
    }
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk, returning validated defaults if missing.
pub fn load_or_default() -> Result<DashboardConfig, ConfigError> {
    let path = config_path()?;
    if path.exists() {
        load_from(&path)
    } else {
        let config = DashboardConfig::default();
        config.validate()?;
        Ok(config)
    }
}

/// Persist configuration to the default location.
pub fn save(config: &DashboardConfig) -> Result<(), ConfigError> {
    let path = config_path()?;
    save_to_path(config, &path)
}

/// Save configuration to a specific path, creating parent directories as needed.
pub fn save_to_path(config: &DashboardConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = toml::to_string_pretty(config).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, data).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn load_from(path: &Path) -> Result<DashboardConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: DashboardConfig =
        toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate()?;
    Ok(config)
}

fn default_server_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_true() -> bool {
    true
}

fn default_triggers() -> Vec<TriggerSpec> {
    vec![
        TriggerSpec {
            id: TriggerId::new("mnist"),
            label: "Train MNIST".to_string(),
            training_type: Some(JobType::new("MNIST")),
        },
        TriggerSpec {
            id: TriggerId::new("chest_x_ray"),
            label: "Train Chest X-Ray".to_string(),
            training_type: Some(JobType::new("CHEST_X_RAY_PNEUMONIA")),
        },
    ]
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => {
            ConfigError::CreateDir { path, source }
        }
    }
}
