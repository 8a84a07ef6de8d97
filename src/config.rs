use log::{ debug, info };
use serde::{ Deserialize, Serialize };
use std::fs;
use std::path::{ Path, PathBuf };
use thiserror::Error;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "license-agenda.yaml";

pub const DATA_FILE_ENV: &str = "AGENDA_DATA_FILE";
pub const SEED_FILE_ENV: &str = "AGENDA_SEED_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Configuration for the license agenda
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AgendaConfig {
    /// Inventory file that is read and overwritten on every change
    pub data_file: PathBuf,

    /// Read-only inventory used when the data file does not exist yet
    pub seed_file: PathBuf,

    /// Colorize terminal output
    pub color: bool,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("software_agenda.json"),
            seed_file: PathBuf::from("softwares_default.json"),
            color: true,
        }
    }
}

impl AgendaConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: AgendaConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must exist. Without one, `license-agenda.yaml` in the
    /// working directory is used if present, defaults otherwise. Environment
    /// variables (including those from a `.env` file) override file paths last.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Self::from_file(path)?
            }
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    info!("Loading configuration from {}", fallback.display());
                    Self::from_file(fallback)?
                } else {
                    debug!("No configuration file found, using defaults");
                    Self::default()
                }
            }
        };

        if let Err(e) = dotenv::dotenv() {
            debug!("No .env file loaded: {}", e);
        }
        config.apply_env_overrides();

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var(DATA_FILE_ENV) {
            debug!("{} overrides data file: {}", DATA_FILE_ENV, path);
            self.data_file = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var(SEED_FILE_ENV) {
            debug!("{} overrides seed file: {}", SEED_FILE_ENV, path);
            self.seed_file = PathBuf::from(path);
        }
    }
}
