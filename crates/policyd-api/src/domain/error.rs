//! Contract-layer error types.
//!
//! Three kinds, all locally recoverable: the payload was not well-formed
//! JSON, the payload decoded but failed semantic validation, or encoding
//! the outbound envelope failed. The caller (the HTTP layer) translates
//! them into client-visible responses; the mapper never retries.

use policyd_types::ValidationError;
use thiserror::Error;

/// Errors produced by the egress-destination mapper.
///
/// Display renders the client-facing message with the underlying cause
/// appended; the cause itself stays reachable through `source()`.
#[derive(Debug, Error)]
pub enum MapperError {
    /// Input bytes were not well-formed JSON.
    #[error("unmarshal json: {0}")]
    Decode(#[source] serde_json::Error),

    /// Input decoded structurally but failed semantic checks.
    #[error("validate destinations: {0}")]
    Validation(#[source] ValidationError),

    /// Producing the outbound envelope bytes failed.
    #[error("marshal json: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result type for mapper operations
pub type MapperResult<T> = Result<T, MapperError>;
