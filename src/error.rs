//! # Error Types
//!
//! This module defines error types used throughout the label-printer library.

use thiserror::Error;

use crate::protocol::Kind;

/// Main error type for label-printer operations
#[derive(Debug, Error)]
pub enum LabelPrinterError {
    /// A mandatory command parameter was not supplied
    #[error("{command}: missing required field '{field}'")]
    MissingRequiredField {
        command: Kind,
        field: &'static str,
    },

    /// A provider name or literal code that nothing resolves to
    #[error("Unknown command reference: {0}")]
    UnknownCommandReference(String),

    /// A value that does not fit its fixed-width field
    #[error("{command}: invalid {field} '{value}': {reason}")]
    MalformedControlValue {
        command: Kind,
        field: &'static str,
        value: String,
        reason: String,
    },

    /// A print job entry naming a label the template does not define
    #[error("Unknown label '{0}'")]
    UnknownLabel(String),

    /// A print job value for a field the label does not define
    #[error("Unknown field '{field}' for label '{label}'")]
    UnknownField { label: String, field: String },

    /// JSON input could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LabelPrinterError {
    pub(crate) fn malformed(
        command: Kind,
        field: &'static str,
        value: &str,
        reason: impl Into<String>,
    ) -> Self {
        LabelPrinterError::MalformedControlValue {
            command,
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_field() {
        let err = LabelPrinterError::MissingRequiredField {
            command: Kind::BitmapFormat,
            field: "x_origin",
        };
        assert_eq!(err.to_string(), "PC: missing required field 'x_origin'");

        let err = LabelPrinterError::malformed(Kind::AdjustPosition, "feed_value", "12345", "too wide");
        assert_eq!(err.to_string(), "AX: invalid feed_value '12345': too wide");
    }
}
