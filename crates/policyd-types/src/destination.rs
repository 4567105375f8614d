//! # Egress Destination Entities
//!
//! Defines the domain representation of an egress destination: a named,
//! reusable description of an external network target that access-control
//! policies can reference.
//!
//! ## Clusters
//!
//! - **Destination**: `EgressDestination`, `AppLifecycle`
//! - **Sub-parts**: `PortRange`, `IpRange`
//! - **Protocol identifiers**: `protocols`

use serde::{Deserialize, Serialize};

/// Sentinel for "match any ICMP type/code".
///
/// Distinguishes "match any" from "match none": a destination that omitted
/// the ICMP parameters on the wire carries this value after decode.
pub const ICMP_MATCH_ANY: i32 = -1;

/// Recognized protocol identifiers.
///
/// The domain model carries the protocol as a free string so the wire
/// boundary never has to reject an unrecognized value; membership in this
/// set is enforced by validators.
pub mod protocols {
    /// Transmission Control Protocol.
    pub const TCP: &str = "tcp";
    /// User Datagram Protocol.
    pub const UDP: &str = "udp";
    /// Internet Control Message Protocol.
    pub const ICMP: &str = "icmp";

    /// All recognized protocol identifiers.
    pub const ALL: [&str; 3] = [TCP, UDP, ICMP];

    /// Check if a protocol identifier is recognized.
    pub fn is_recognized(protocol: &str) -> bool {
        ALL.contains(&protocol)
    }
}

/// An inclusive range of transport-layer ports.
///
/// Bounds checking (1..=65535, start <= end) is a validator concern, so the
/// fields are signed ints rather than `u16` at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PortRange {
    /// First port in the range, inclusive.
    pub start: i32,
    /// Last port in the range, inclusive.
    pub end: i32,
}

/// An inclusive range of IP addresses, endpoints as address strings.
///
/// Parseability and ordering of the endpoints is a validator concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IpRange {
    /// First address in the range, inclusive.
    pub start: String,
    /// Last address in the range, inclusive.
    pub end: String,
}

/// Application lifecycle stages a destination's rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppLifecycle {
    /// Applies to every lifecycle stage.
    #[default]
    All,
    /// Applies only to running application instances.
    Running,
    /// Applies only to staging application instances.
    Staging,
}

impl AppLifecycle {
    /// Returns the stable string label used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppLifecycle::All => "all",
            AppLifecycle::Running => "running",
            AppLifecycle::Staging => "staging",
        }
    }
}

/// A named, reusable egress access-control target.
///
/// Values are transient: produced at the wire boundary or loaded from the
/// store, consumed immediately, never retained or mutated in between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EgressDestination {
    /// Opaque unique identifier, assigned by the store and immutable once
    /// created.
    pub id: String,
    /// Optional human label; empty when not provided.
    pub name: String,
    /// Optional free text; empty when not provided.
    pub description: String,
    /// Transport protocol identifier (see [`protocols`]).
    pub protocol: String,
    /// Port ranges; meaningful only for tcp/udp. Never absent after decode,
    /// an empty vector is the floor.
    pub ports: Vec<PortRange>,
    /// IP address ranges. Required for every destination; an empty vector
    /// is structurally permitted here and rejected by validators.
    pub ip_ranges: Vec<IpRange>,
    /// ICMP type; populated only for icmp destinations, where
    /// [`ICMP_MATCH_ANY`] means "match any type".
    pub icmp_type: Option<i32>,
    /// ICMP code; populated only for icmp destinations, where
    /// [`ICMP_MATCH_ANY`] means "match any code".
    pub icmp_code: Option<i32>,
    /// Lifecycle stages this destination applies to.
    pub app_lifecycle: AppLifecycle,
}

impl EgressDestination {
    /// Check if this destination uses the ICMP protocol.
    pub fn is_icmp(&self) -> bool {
        self.protocol == protocols::ICMP
    }
}
