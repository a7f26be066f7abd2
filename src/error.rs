//! Centralized error types for taginput.
//!
//! The widget core reports contract violations through [`WidgetError`]; the
//! terminal host aggregates those together with configuration and terminal
//! failures into [`AppError`]. Ordinary rejections (duplicates, capacity) are
//! not errors and are reported through `AddOutcome` instead.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised by the widget core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// A candidate did not carry the identifier field used for serialization.
    #[error("candidate '{item}' has no '{field}' field")]
    MissingIdentifier {
        /// The configured identifier field.
        field: String,
        /// Display text of the offending candidate.
        item: String,
    },

    /// A synchronous candidate provider failed.
    #[error("candidate source failed: {0}")]
    Source(String),
}

impl WidgetError {
    /// Create a source error.
    pub fn source(msg: impl Into<String>) -> Self {
        WidgetError::Source(msg.into())
    }
}

/// Result type for widget operations.
pub type Result<T> = std::result::Result<T, WidgetError>;

/// The application error type used by the terminal host.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Widget contract violations.
    #[error("{0}")]
    Widget(#[from] WidgetError),

    /// IO errors (candidate files, terminal streams).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal-related errors.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Candidate file could not be understood.
    #[error("Invalid candidate file: {0}")]
    Candidates(String),
}

impl AppError {
    /// Create a terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        AppError::Terminal(msg.into())
    }

    /// Get a user-friendly message for display in the status line.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Please check the file exists and is readable."
                        .to_string()
                }
                ConfigError::WriteError(_) => {
                    "Could not save configuration. Please check file permissions.".to_string()
                }
                ConfigError::ParseError(_) => {
                    "Configuration file is invalid. Please check the file format.".to_string()
                }
                ConfigError::SerializeError(_) => {
                    "Could not save configuration. Internal error.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
            },
            AppError::Widget(e) => match e {
                WidgetError::MissingIdentifier { field, item } => {
                    format!("'{}' cannot be added: it has no '{}' field.", item, field)
                }
                WidgetError::Source(msg) => format!("Suggestions unavailable: {}", msg),
            },
            AppError::Io(_) => "A file operation failed. Please check file permissions.".to_string(),
            AppError::Terminal(msg) => format!("Terminal error: {}", msg),
            AppError::Candidates(msg) => format!("Could not load candidates: {}", msg),
        }
    }

    /// Check if this error prevents the widget from running at all.
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            AppError::Config(_) | AppError::Terminal(_) | AppError::Candidates(_)
        )
    }

    /// Get a suggested action for the user.
    pub fn suggested_action(&self) -> Option<&'static str> {
        match self {
            AppError::Config(ConfigError::ParseError(_)) => {
                Some("Run 'taginput --print-config' to see a valid configuration file.")
            }
            AppError::Widget(WidgetError::MissingIdentifier { .. }) => {
                Some("Check the candidate file or set 'id_field' in the configuration.")
            }
            AppError::Candidates(_) => {
                Some("Use a JSON array of strings or objects, or one candidate per line.")
            }
            _ => None,
        }
    }
}
