//! Policyd API - Egress-destination contract layer for the network-policy
//! control plane.
//!
//! This crate is the single boundary where untrusted wire payloads that
//! describe egress destinations are decoded, defaulted, and gated before
//! they can influence access-control state, and where stored destinations
//! are encoded back into the wire envelope.
//!
//! # Architecture
//!
//! ```text
//! inbound payload bytes
//!         │
//!         ▼
//! ┌──────────────────────────┐
//! │ EgressDestinationMapper  │  decode: parse envelope, apply field
//! │        (mapper)          │  defaults, map wire → domain
//! └────────────┬─────────────┘
//!              │ full decoded batch, exactly once
//!              ▼
//! ┌──────────────────────────┐
//! │  DestinationsValidator   │  injected capability; RuleValidator is
//! │     (ports/outbound)     │  the shipped rule set
//! └────────────┬─────────────┘
//!              ▼
//!    domain destinations → store (external)
//! ```
//!
//! Outbound: store → domain destinations → `encode` → response bytes.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use policyd_api::{EgressDestinationMapper, RuleValidator, ValidatorLimits};
//!
//! let validator = Arc::new(RuleValidator::new(ValidatorLimits::default()));
//! let mapper = EgressDestinationMapper::new(validator);
//! let destinations = mapper.decode(br#"{"total_destinations":0,"destinations":[]}"#)?;
//! assert!(destinations.is_empty());
//! # Ok::<(), policyd_api::MapperError>(())
//! ```
//!
//! # Security
//!
//! - Decode is all-or-nothing: a validation failure discards the whole
//!   batch, never partial results.
//! - The mapper is structural only; semantic rules (protocol membership,
//!   address well-formedness, field combinations) live behind the
//!   validator capability and are swappable without touching the mapper.
//! - Mapper and shipped validators are stateless and reentrant; safe to
//!   share across request-handling contexts without locking.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod mapper;
pub mod ports;
pub mod validation;
pub mod wire;

// Re-exports for public API
pub use domain::config::ValidatorLimits;
pub use domain::error::{MapperError, MapperResult};
pub use mapper::EgressDestinationMapper;
pub use ports::outbound::{AcceptAllValidator, DestinationsValidator};
pub use validation::RuleValidator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
