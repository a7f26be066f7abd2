//! Widget settings: the plain, serializable part of the widget options.

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};

/// How accepted identifiers are written into the bound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueEncoding {
    /// A JSON array of identifiers; no delimiter can collide with an id.
    #[default]
    Json,
    /// Identifiers joined with commas.
    Comma,
}

impl ValueEncoding {
    /// Encode a list of identifiers.
    pub fn encode(&self, ids: &[String]) -> String {
        match self {
            ValueEncoding::Json => {
                serde_json::to_string(ids).unwrap_or_else(|_| String::from("[]"))
            }
            ValueEncoding::Comma => ids.join(","),
        }
    }
}

/// Options recognised by the tag input, without the injected functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    /// Minimum query length (in characters) before a lookup runs.
    pub min_length: usize,
    /// Maximum number of suggestions rendered at once.
    pub items: usize,
    /// Whether the same value may be accepted more than once.
    pub allow_duplicates: bool,
    /// Compare values by display text ignoring case when checking duplicates.
    pub case_insensitive: bool,
    /// Maximum number of accepted values.
    pub max: Option<usize>,
    /// Field used to extract identifiers from keyed candidates.
    pub id_field: String,
    /// Placeholder shown in the empty entry.
    pub placeholder: String,
    /// Encoding of the bound value.
    pub value_encoding: ValueEncoding,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            min_length: 1,
            items: 8,
            allow_duplicates: false,
            case_insensitive: true,
            max: None,
            id_field: "id".to_string(),
            placeholder: String::new(),
            value_encoding: ValueEncoding::Json,
        }
    }
}

impl WidgetSettings {
    /// Validate the settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` when `items` or `max` is zero or
    /// the identifier field is blank.
    pub fn validate(&self) -> Result<()> {
        if self.items == 0 {
            return Err(ConfigError::ValidationError(
                "items must be at least 1".to_string(),
            ));
        }

        if self.max == Some(0) {
            return Err(ConfigError::ValidationError(
                "max must be at least 1 when set".to_string(),
            ));
        }

        if self.id_field.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "id_field cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
