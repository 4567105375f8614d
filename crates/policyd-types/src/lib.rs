//! # Policyd Types Crate
//!
//! This crate contains the egress-destination domain entities and the
//! validation error contract shared across the control plane.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate destination types are
//!   defined here.
//! - **Structural, not semantic**: Types admit any structurally well-formed
//!   value (unknown protocols, unparsed addresses); semantic rules live
//!   behind the validator capability in `policyd-api`.
//! - **Transient values**: Destinations are plain data passed between the
//!   wire boundary and the store; nothing here holds state.

pub mod destination;
pub mod errors;

pub use destination::*;
pub use errors::*;
