//! # Validation Error Contract
//!
//! Defines the error type validators report through the
//! `DestinationsValidator` capability. Message-carrying rather than a
//! closed variant set so rule sets can evolve without changing the trait.

use thiserror::Error;

/// Semantic rejection reported by an egress-destinations validator.
///
/// The wire mapper renders this prefixed with `"validate destinations: "`;
/// the message here is the bare rule-level reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Create a validation error with the given reason.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The bare rule-level reason, without any caller prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}
