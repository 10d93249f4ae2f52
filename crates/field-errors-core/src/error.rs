//! Error types for catalog configuration and traversal misuse.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable, machine-readable error codes.
///
/// Serialized as `snake_case` strings. Variant names are part of the public
/// contract and must not change once published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorCode {
    /// Top-level value is neither a composite nor a collection.
    UnsupportedShape,
    /// The collection entry point received something that is not a collection.
    /// Renders the same message as [`ErrorCode::UnsupportedShape`].
    NotCollection,
    /// A template override was empty.
    EmptyTemplate,
    /// A template override used a placeholder other than `{field}` / `{param}`.
    UnknownPlaceholder,
    /// The placeholder scanner could not be built.
    InvalidPattern,
}

/// Misuse of a traversal entry point.
///
/// Never returned as `Err`: [`crate::DeepValidator`] renders it as a single
/// report entry under the configured root key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("provided value is neither a composite nor a collection")]
    UnsupportedShape,

    #[error("provided value is neither a composite nor a collection")]
    NotCollection,
}

impl UsageError {
    /// Returns the stable error code for this error variant.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            UsageError::UnsupportedShape => ErrorCode::UnsupportedShape,
            UsageError::NotCollection => ErrorCode::NotCollection,
        }
    }
}

/// Rejected message template override.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("template for '{tag}' is empty")]
    EmptyTemplate { tag: String },

    #[error("template for '{tag}' uses unknown placeholder '{{{placeholder}}}'")]
    UnknownPlaceholder { tag: String, placeholder: String },

    #[error("placeholder pattern error: {0}")]
    InvalidPattern(String),
}

impl CatalogError {
    /// Returns the stable error code for this error variant.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            CatalogError::EmptyTemplate { .. } => ErrorCode::EmptyTemplate,
            CatalogError::UnknownPlaceholder { .. } => ErrorCode::UnknownPlaceholder,
            CatalogError::InvalidPattern(_) => ErrorCode::InvalidPattern,
        }
    }

    /// Returns the constraint tag the rejected override was registered for.
    pub fn tag(&self) -> Option<&str> {
        match self {
            CatalogError::EmptyTemplate { tag } => Some(tag),
            CatalogError::UnknownPlaceholder { tag, .. } => Some(tag),
            CatalogError::InvalidPattern(_) => None,
        }
    }
}
