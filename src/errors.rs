use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised by the license agenda
#[derive(Debug, Error)]
pub enum AgendaError {
    #[error("Invalid date: '{0}'. Use YYYY-MM-DD or DD-MM-YYYY")]
    InvalidDateFormat(String),

    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("Software not found: {0}")]
    RecordNotFound(String),

    #[error("Failed to access {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Terminal I/O error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Failed to (de)serialize inventory: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type specific to agenda operations
pub type AgendaResult<T> = Result<T, AgendaError>;

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Fatal,
    Error,
    Warning,
}

/// Recoverable vs. non-recoverable errors
pub trait RecoverableError {
    fn is_recoverable(&self) -> bool;
    fn recovery_strategy(&self) -> Option<String>;
    fn severity(&self) -> ErrorSeverity;
}

impl RecoverableError for AgendaError {
    fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AgendaError::InvalidDateFormat(_)
                | AgendaError::MissingRequiredField(_)
                | AgendaError::RecordNotFound(_)
        )
    }

    fn recovery_strategy(&self) -> Option<String> {
        match self {
            AgendaError::InvalidDateFormat(_) => Some(
                "Enter the date as YYYY-MM-DD or DD-MM-YYYY, or 'vitalício' for a lifetime license"
                    .to_string(),
            ),
            AgendaError::MissingRequiredField(field) => {
                Some(format!("Provide a value for '{}'", field))
            }
            AgendaError::RecordNotFound(_) => {
                Some("Run 'license-agenda list' to see names and ids".to_string())
            }
            AgendaError::Storage { path, .. } => Some(format!(
                "Check that {} is readable and writable",
                path.display()
            )),
            AgendaError::Serialization(_) => {
                Some("The inventory file is not valid JSON; fix or restore it".to_string())
            }
            AgendaError::Terminal(_) | AgendaError::Config(_) => None,
        }
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            AgendaError::InvalidDateFormat(_)
            | AgendaError::MissingRequiredField(_)
            | AgendaError::RecordNotFound(_) => ErrorSeverity::Warning,
            AgendaError::Storage { .. } | AgendaError::Terminal(_) => ErrorSeverity::Error,
            AgendaError::Serialization(_) | AgendaError::Config(_) => ErrorSeverity::Fatal,
        }
    }
}
