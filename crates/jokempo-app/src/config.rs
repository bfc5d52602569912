use jokempo_core::AppInfo;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

pub const DATA_FILE_ENV: &str = "JOKEMPO_DATA_FILE";
const LOG_FILE_NAME: &str = "jokempo.log";

/// Optional YAML configuration; every field has a default.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub plain: bool,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: AppConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        if let Some(data_file) = self.data_file.as_ref() {
            validate_data_file(data_file)?;
        }
        self.logging.normalize();
        if self.logging.level().is_none() {
            return Err(ValidationError::InvalidField {
                field: "logging.tracing_level".to_string(),
                message: format!("unknown level '{}'", self.logging.tracing_level),
            });
        }
        Ok(())
    }

    /// Explicit path first, then `JOKEMPO_DATA_FILE`, then the per-user data directory.
    pub fn resolved_data_file(&self) -> PathBuf {
        self.resolved_data_file_with(|key| std::env::var_os(key).map(PathBuf::from))
    }

    pub fn resolved_data_file_with<F>(&self, env: F) -> PathBuf
    where
        F: Fn(&str) -> Option<PathBuf>,
    {
        if let Some(path) = self.data_file.as_ref() {
            return path.clone();
        }
        if let Some(path) = env(DATA_FILE_ENV).filter(|p| !p.as_os_str().is_empty()) {
            return path;
        }
        default_data_file_with(env)
    }

    pub fn resolved_log_file(&self, data_file: &Path) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(|| data_file.with_file_name(LOG_FILE_NAME))
    }
}

/// Logging configuration defaults to disabled structured logs.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_structured: bool,
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            tracing_level: default_tracing_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "info".to_string()
}

fn validate_data_file(path: &Path) -> Result<(), ValidationError> {
    if path.as_os_str().is_empty() {
        return Err(ValidationError::InvalidField {
            field: "data_file".to_string(),
            message: "path must not be empty".to_string(),
        });
    }

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if !is_json {
        return Err(ValidationError::InvalidField {
            field: "data_file".to_string(),
            message: format!("{} is not a .json file", path.display()),
        });
    }

    Ok(())
}

/// `%LOCALAPPDATA%` on Windows, XDG data home elsewhere, current directory as a last resort.
fn default_data_file_with<F>(env: F) -> PathBuf
where
    F: Fn(&str) -> Option<PathBuf>,
{
    let non_empty = |key: &str| env(key).filter(|p| !p.as_os_str().is_empty());
    let base = if cfg!(windows) {
        non_empty("LOCALAPPDATA")
    } else {
        non_empty("XDG_DATA_HOME").or_else(|| non_empty("HOME").map(|home| home.join(".local").join("share")))
    };
    match base {
        Some(dir) => dir
            .join(AppInfo::data_dir_name())
            .join(AppInfo::statistics_file_name()),
        None => PathBuf::from(AppInfo::statistics_file_name()),
    }
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
