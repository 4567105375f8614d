//! Wire envelope and destination DTOs.
//!
//! Decode is lenient: every field is defaulted when absent, so a payload
//! missing `ports` or the ICMP parameters still maps 1:1 into the domain
//! model. Semantic rejection happens later, behind the validator port.
//!
//! Encode omits empty-valued fields entirely rather than emitting
//! null/zero, keeping payloads minimal and round-trip stable against
//! hand-authored fixtures.

use policyd_types::{AppLifecycle, EgressDestination, IpRange, PortRange, ICMP_MATCH_ANY};
use serde::{Deserialize, Serialize};

/// Wire-level container for a sequence of destinations.
///
/// `total_destinations` is informational on the wire: decode never
/// cross-checks it against the actual sequence length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationsEnvelope {
    /// Count of destinations, as reported by the producer.
    #[serde(default)]
    pub total_destinations: usize,
    /// The destinations themselves, order significant.
    #[serde(default)]
    pub destinations: Vec<WireDestination>,
}

impl DestinationsEnvelope {
    /// Build the outbound envelope for a stored destination sequence,
    /// preserving input order.
    pub fn from_destinations(destinations: &[EgressDestination]) -> Self {
        Self {
            total_destinations: destinations.len(),
            destinations: destinations.iter().map(WireDestination::from).collect(),
        }
    }
}

/// Wire shape of a single egress destination.
///
/// The wire field for IP ranges is `ips`, not `ip_ranges`; the rename is
/// owned here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireDestination {
    /// Store-assigned identifier. Always emitted.
    #[serde(default)]
    pub id: String,
    /// Human label; omitted when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Free-text description; omitted when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Protocol identifier. Always emitted; membership in the recognized
    /// set is a validator rule, not a wire rule.
    #[serde(default)]
    pub protocol: String,
    /// Port ranges; omitted when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<PortRange>,
    /// IP ranges; omitted when empty (absence is a validation failure, not
    /// a wire failure).
    #[serde(rename = "ips", default, skip_serializing_if = "Vec::is_empty")]
    pub ip_ranges: Vec<IpRange>,
    /// ICMP type; icmp destinations only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icmp_type: Option<i32>,
    /// ICMP code; icmp destinations only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icmp_code: Option<i32>,
    /// Lifecycle scope. Accepted on decode (defaulting to "all"), never
    /// re-emitted by encode.
    #[serde(default, skip_serializing)]
    pub app_lifecycle: AppLifecycle,
}

impl WireDestination {
    /// Map this wire object 1:1 into the domain model, applying the
    /// field-level decode defaults.
    pub fn into_destination(self) -> EgressDestination {
        let icmp_type = icmp_param_or_any(&self.protocol, self.icmp_type);
        let icmp_code = icmp_param_or_any(&self.protocol, self.icmp_code);
        EgressDestination {
            id: self.id,
            name: self.name,
            description: self.description,
            protocol: self.protocol,
            ports: self.ports,
            ip_ranges: self.ip_ranges,
            icmp_type,
            icmp_code,
            app_lifecycle: self.app_lifecycle,
        }
    }
}

impl From<&EgressDestination> for WireDestination {
    fn from(dest: &EgressDestination) -> Self {
        // ICMP parameters are only meaningful for icmp destinations; the
        // wire never carries them for tcp/udp regardless of stored values.
        let (icmp_type, icmp_code) = if dest.is_icmp() {
            (dest.icmp_type, dest.icmp_code)
        } else {
            (None, None)
        };
        Self {
            id: dest.id.clone(),
            name: dest.name.clone(),
            description: dest.description.clone(),
            protocol: dest.protocol.clone(),
            ports: dest.ports.clone(),
            ip_ranges: dest.ip_ranges.clone(),
            icmp_type,
            icmp_code,
            app_lifecycle: dest.app_lifecycle,
        }
    }
}

/// Decode default for one ICMP parameter.
///
/// For icmp destinations an absent parameter means "match any"; for every
/// other protocol the parameter carries no meaning and stays unpopulated.
fn icmp_param_or_any(protocol: &str, value: Option<i32>) -> Option<i32> {
    if protocol == policyd_types::protocols::ICMP {
        Some(value.unwrap_or(ICMP_MATCH_ANY))
    } else {
        None
    }
}
