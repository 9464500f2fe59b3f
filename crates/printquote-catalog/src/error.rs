//! Error types for catalog loading and lookup.

use thiserror::Error;

use crate::tags::TagKind;

/// Errors that can occur while loading or validating a pricing config.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Reading the config file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for a pricing config.
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be written as TOML.
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The config declares a version this build does not understand.
    #[error("unsupported config version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the file.
        found: u32,
        /// Version this build reads.
        expected: u32,
    },

    /// A catalog value breaks one of the catalog invariants.
    #[error("invalid catalog: {0}")]
    Invalid(String),
}

/// A string did not name any known material, color, quality or purpose.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseTagError {
    /// Which tag family was being parsed.
    pub kind: TagKind,
    /// The rejected input.
    pub value: String,
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
