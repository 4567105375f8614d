//! Ports for the contract layer.

pub mod outbound;
