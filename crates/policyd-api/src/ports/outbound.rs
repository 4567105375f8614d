//! Outbound ports for the contract layer.

use policyd_types::{EgressDestination, ValidationError};

/// Semantic gate for decoded egress destinations.
///
/// The mapper invokes this exactly once per decode with the full batch, so
/// implementations can apply cross-destination rules (duplicate detection,
/// aggregate limits) that a per-item check cannot express.
///
/// Implementations must be stateless and reentrant with no side effects;
/// the mapper is shared across request-handling contexts without locking.
pub trait DestinationsValidator: Send + Sync {
    /// Returns an error if any destination in the batch is semantically
    /// invalid.
    fn validate(&self, destinations: &[EgressDestination]) -> Result<(), ValidationError>;
}

/// Validator that accepts every batch.
///
/// Lets the mapper be exercised in isolation from any rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllValidator;

impl DestinationsValidator for AcceptAllValidator {
    fn validate(&self, _destinations: &[EgressDestination]) -> Result<(), ValidationError> {
        Ok(())
    }
}
