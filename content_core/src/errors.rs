//! # Error Types
//!
//! Structured error types for content_core. The pipeline has a narrow
//! failure surface: configuration problems are caught while the registry
//! is being built and never reach a live page request, and the only
//! request-path error is a missing slug.
//!
//! ## Example
//!
//! ```rust
//! use content_core::errors::{ContentError, ContentResult};
//!
//! fn require_slug(slug: &str) -> ContentResult<()> {
//!     if slug.is_empty() {
//!         return Err(ContentError::calculator_not_found(slug));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for content_core operations
pub type ContentResult<T> = Result<T, ContentError>;

/// Structured error type for the content pipeline.
///
/// Each variant carries enough context to diagnose the offending entry
/// without a debugger. Configuration variants are only produced by
/// [`crate::registry::ContentRegistry::build`] and friends.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ContentError {
    /// Two entries were registered under the same slug
    #[error("Duplicate slug: '{slug}' is registered more than once")]
    DuplicateSlug { slug: String },

    /// A component binding is neither a usable name nor a usable schema
    #[error("Invalid component binding for '{slug}': {reason}")]
    InvalidBinding { slug: String, reason: String },

    /// A locale override has the wrong shape (wrong field type, etc.)
    #[error("Malformed override for locale '{locale}': {reason}")]
    MalformedOverride { locale: String, reason: String },

    /// No calculator is registered under the requested slug.
    ///
    /// This is the one recoverable request-path error; callers turn it
    /// into a 404.
    #[error("Calculator not found: {slug}")]
    CalculatorNotFound { slug: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ContentError {
    /// Create a DuplicateSlug error
    pub fn duplicate_slug(slug: impl Into<String>) -> Self {
        ContentError::DuplicateSlug { slug: slug.into() }
    }

    /// Create an InvalidBinding error
    pub fn invalid_binding(slug: impl Into<String>, reason: impl Into<String>) -> Self {
        ContentError::InvalidBinding {
            slug: slug.into(),
            reason: reason.into(),
        }
    }

    /// Create a MalformedOverride error
    pub fn malformed_override(locale: impl Into<String>, reason: impl Into<String>) -> Self {
        ContentError::MalformedOverride {
            locale: locale.into(),
            reason: reason.into(),
        }
    }

    /// Create a CalculatorNotFound error
    pub fn calculator_not_found(slug: impl Into<String>) -> Self {
        ContentError::CalculatorNotFound { slug: slug.into() }
    }

    /// Create a Serialization error
    pub fn serialization(reason: impl Into<String>) -> Self {
        ContentError::Serialization { reason: reason.into() }
    }

    /// True for errors that must abort startup rather than surface to
    /// a request.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ContentError::DuplicateSlug { .. }
                | ContentError::InvalidBinding { .. }
                | ContentError::MalformedOverride { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ContentError::DuplicateSlug { .. } => "DUPLICATE_SLUG",
            ContentError::InvalidBinding { .. } => "INVALID_BINDING",
            ContentError::MalformedOverride { .. } => "MALFORMED_OVERRIDE",
            ContentError::CalculatorNotFound { .. } => "CALCULATOR_NOT_FOUND",
            ContentError::Serialization { .. } => "SERIALIZATION_ERROR",
            ContentError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ContentError::invalid_binding("loan-calculator", "empty component name");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: ContentError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ContentError::duplicate_slug("bmi-calculator").error_code(),
            "DUPLICATE_SLUG"
        );
        assert_eq!(
            ContentError::calculator_not_found("nope").error_code(),
            "CALCULATOR_NOT_FOUND"
        );
    }

    #[test]
    fn test_config_error_classification() {
        assert!(ContentError::duplicate_slug("x").is_config_error());
        assert!(ContentError::malformed_override("es", "title must be a string").is_config_error());
        assert!(!ContentError::calculator_not_found("x").is_config_error());
    }
}
