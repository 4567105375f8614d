//! Wire representation of egress destinations.
//!
//! DTOs here define the exact JSON shape exchanged with clients; they are
//! deliberately separate from the domain entities in `policyd-types` so
//! renames, omission rules, and field defaults stay at the boundary.

pub mod envelope;

pub use envelope::{DestinationsEnvelope, WireDestination};
