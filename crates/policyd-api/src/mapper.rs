//! Egress-destination mapper.
//!
//! Translates between the wire envelope clients exchange and the domain
//! destinations the store and enforcement path consume. Decode is a
//! two-phase pipeline: pure structural mapping first, then a single batch
//! semantic check through the injected validator, so cross-destination
//! rules get one unambiguous error instead of a partial result.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::error::{MapperError, MapperResult};
use crate::ports::outbound::DestinationsValidator;
use crate::wire::envelope::{DestinationsEnvelope, WireDestination};
use policyd_types::EgressDestination;

/// Stateless translator between wire payloads and domain destinations.
///
/// Holds no mutable state and performs no I/O; safe to share across
/// request-handling contexts as long as the injected validator is itself
/// stateless and reentrant.
pub struct EgressDestinationMapper {
    validator: Arc<dyn DestinationsValidator>,
}

impl EgressDestinationMapper {
    /// Create a mapper gated by the given validator.
    pub fn new(validator: Arc<dyn DestinationsValidator>) -> Self {
        Self { validator }
    }

    /// Encode a stored destination sequence into the wire envelope.
    ///
    /// Order preserving; empty-valued fields are omitted from the payload.
    /// Fails only if producing the bytes themselves fails.
    pub fn encode(&self, destinations: &[EgressDestination]) -> MapperResult<Vec<u8>> {
        let envelope = DestinationsEnvelope::from_destinations(destinations);
        let payload = serde_json::to_vec(&envelope).map_err(MapperError::Serialize)?;
        debug!(count = destinations.len(), "encoded egress destinations");
        Ok(payload)
    }

    /// Decode a wire payload into validated domain destinations.
    ///
    /// All-or-nothing: a malformed payload or a validator rejection
    /// discards the whole batch. Order is preserved from the payload.
    pub fn decode(&self, payload: &[u8]) -> MapperResult<Vec<EgressDestination>> {
        let envelope: DestinationsEnvelope =
            serde_json::from_slice(payload).map_err(MapperError::Decode)?;

        let destinations: Vec<EgressDestination> = envelope
            .destinations
            .into_iter()
            .map(WireDestination::into_destination)
            .collect();

        if let Err(err) = self.validator.validate(&destinations) {
            warn!(error = %err, "rejected egress destinations payload");
            return Err(MapperError::Validation(err));
        }

        debug!(count = destinations.len(), "decoded egress destinations");
        Ok(destinations)
    }
}
