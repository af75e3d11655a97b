//! Error types and reporting policy for message resolution.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// An error that occurred while resolving or formatting a message.
///
/// The `Display` text of each variant is exactly what the resolver returns in
/// [`ErrorReporting::Message`] mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No message is defined for the key.
    #[error("Undefined message key: '{key}'")]
    UndefinedKey { key: String },

    /// A plural message was resolved through the plain-message path.
    #[error("Message for key '{key}' is a plural object; expected string")]
    ExpectedPlain { key: String },

    /// A plain message was resolved through the plural path.
    #[error("Expected message for key '{key}' to be plural object but got string \"{template}\"")]
    ExpectedPlural { key: String, template: String },

    /// No template matches the amount and there is no catch-all.
    #[error("Missing catch-all in plural message for key '{key}'")]
    MissingCatchAll { key: String },

    /// No formatter is registered under the name.
    #[error("Missing formatter: {name}")]
    MissingFormatter { name: String },

    /// Direct formatter invocation requires exactly one argument.
    #[error("Formatter '{name}' expects exactly one argument but got {got}")]
    MissingFormatterArgument { name: String, got: usize },

    /// A formatter received a value it cannot format.
    #[error("Cannot format {value} as {expected}")]
    InvalidValue {
        value: String,
        expected: &'static str,
    },

    /// A formatter failed for another reason, such as missing locale data.
    #[error("Formatting failed: {reason}")]
    Formatting { reason: String },
}

impl ResolveError {
    /// Returns true for errors caused by resolving a message with the wrong
    /// variant (plain versus plural).
    pub fn is_type_mismatch(&self) -> bool {
        matches!(
            self,
            ResolveError::ExpectedPlain { .. } | ResolveError::ExpectedPlural { .. }
        )
    }
}

/// How resolution errors reach the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorReporting {
    /// Return the error text as the resolved string. Suited for development,
    /// where a visible message beats a failed render.
    #[default]
    Message,

    /// Return the error to the caller.
    Exception,
}

impl ErrorReporting {
    /// Applies this reporting mode to an error.
    pub fn report(self, error: ResolveError) -> Result<String, ResolveError> {
        match self {
            ErrorReporting::Message => {
                debug!(%error, "reporting resolve error inline");
                Ok(error.to_string())
            }
            ErrorReporting::Exception => Err(error),
        }
    }
}
