//! Error types for quoting.

use thiserror::Error;

/// Errors that abort a quote.
///
/// None of these are transient: the engine does no I/O, so retrying the same
/// request against the same catalogs fails the same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteError {
    /// Material is not stocked.
    #[error("unknown material: {material}")]
    UnknownMaterial {
        /// Requested material.
        material: String,
    },

    /// Material is stocked but not in this color.
    #[error("unknown color {color} for material {material}")]
    UnknownColor {
        /// Requested material.
        material: String,
        /// Requested color.
        color: String,
    },

    /// Quality tier is not configured.
    #[error("unknown quality: {0}")]
    UnknownQuality(String),

    /// Purpose is not configured.
    #[error("unknown purpose: {0}")]
    UnknownPurpose(String),

    /// No printer with this name.
    #[error("unknown printer: {0}")]
    UnknownPrinter(String),

    /// A numeric input is out of range.
    #[error("invalid {field} = {value}: {reason}")]
    InvalidParameter {
        /// Request field name.
        field: &'static str,
        /// Rejected value, as given.
        value: String,
        /// Accepted range.
        reason: &'static str,
    },
}

impl QuoteError {
    pub(crate) fn invalid(field: &'static str, value: impl ToString, reason: &'static str) -> Self {
        QuoteError::InvalidParameter {
            field,
            value: value.to_string(),
            reason,
        }
    }

    /// Whether the caller sent a bad request (every quote error does).
    pub fn is_client_error(&self) -> bool {
        true
    }

    /// Request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            QuoteError::UnknownMaterial { .. } => "material",
            QuoteError::UnknownColor { .. } => "color",
            QuoteError::UnknownQuality(_) => "quality",
            QuoteError::UnknownPurpose(_) => "purpose",
            QuoteError::UnknownPrinter(_) => "printer",
            QuoteError::InvalidParameter { field, .. } => *field,
        }
    }
}

/// Result type for quoting operations.
pub type Result<T> = std::result::Result<T, QuoteError>;
