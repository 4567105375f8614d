//! Semantic rules for egress destinations.
//!
//! The shipped `DestinationsValidator` implementation. The mapper admits
//! anything structurally well-formed; this is where unrecognized
//! protocols, malformed address ranges, and invalid field combinations
//! are rejected before they can reach stored policy state.

use std::collections::HashSet;
use std::net::Ipv4Addr;

use tracing::warn;

use crate::domain::config::ValidatorLimits;
use crate::ports::outbound::DestinationsValidator;
use policyd_types::{protocols, EgressDestination, IpRange, PortRange, ValidationError};

/// Lowest valid transport-layer port.
const MIN_PORT: i32 = 1;

/// Highest valid transport-layer port.
const MAX_PORT: i32 = 65535;

/// Stateless rule set for egress destinations.
///
/// Checks each destination's fields and field combinations, plus the
/// cross-destination rules a batch enables: duplicate ids, duplicate
/// non-empty names, and the envelope size limit.
#[derive(Debug, Clone, Default)]
pub struct RuleValidator {
    limits: ValidatorLimits,
}

impl RuleValidator {
    /// Create a rule validator with the given limits.
    pub fn new(limits: ValidatorLimits) -> Self {
        Self { limits }
    }
}

impl DestinationsValidator for RuleValidator {
    fn validate(&self, destinations: &[EgressDestination]) -> Result<(), ValidationError> {
        if self.limits.max_destinations > 0 && destinations.len() > self.limits.max_destinations {
            warn!(
                count = destinations.len(),
                max = self.limits.max_destinations,
                "egress destinations batch over limit"
            );
            return Err(ValidationError::new(format!(
                "too many destinations: {} exceeds limit {}",
                destinations.len(),
                self.limits.max_destinations
            )));
        }

        let mut seen_ids = HashSet::new();
        let mut seen_names = HashSet::new();
        for dest in destinations {
            validate_destination(dest)?;

            if !seen_ids.insert(dest.id.as_str()) {
                return Err(ValidationError::new(format!(
                    "duplicate destination id '{}'",
                    dest.id
                )));
            }
            if !dest.name.is_empty() && !seen_names.insert(dest.name.as_str()) {
                return Err(ValidationError::new(format!(
                    "duplicate destination name '{}'",
                    dest.name
                )));
            }
        }

        Ok(())
    }
}

/// Validate a single destination's fields and field combinations.
fn validate_destination(dest: &EgressDestination) -> Result<(), ValidationError> {
    if dest.id.is_empty() {
        return Err(ValidationError::new("missing destination id"));
    }

    if !protocols::is_recognized(&dest.protocol) {
        return Err(ValidationError::new(format!(
            "destination '{}': unknown protocol '{}', must be tcp, udp, or icmp",
            dest.id, dest.protocol
        )));
    }

    if dest.ip_ranges.is_empty() {
        return Err(ValidationError::new(format!(
            "destination '{}': requires at least one ip range",
            dest.id
        )));
    }
    for range in &dest.ip_ranges {
        validate_ip_range(dest, range)?;
    }

    if dest.is_icmp() {
        if !dest.ports.is_empty() {
            return Err(ValidationError::new(format!(
                "destination '{}': icmp destinations may not specify ports",
                dest.id
            )));
        }
    } else {
        if dest.icmp_type.is_some() || dest.icmp_code.is_some() {
            return Err(ValidationError::new(format!(
                "destination '{}': icmp type/code are only valid for icmp destinations",
                dest.id
            )));
        }
        for range in &dest.ports {
            validate_port_range(dest, range)?;
        }
    }

    Ok(())
}

/// Validate one IP range: both endpoints parseable IPv4, start <= end.
fn validate_ip_range(dest: &EgressDestination, range: &IpRange) -> Result<(), ValidationError> {
    let start = parse_ipv4(dest, &range.start)?;
    let end = parse_ipv4(dest, &range.end)?;
    if u32::from(start) > u32::from(end) {
        return Err(ValidationError::new(format!(
            "destination '{}': ip range start {} is after end {}",
            dest.id, range.start, range.end
        )));
    }
    Ok(())
}

fn parse_ipv4(dest: &EgressDestination, address: &str) -> Result<Ipv4Addr, ValidationError> {
    address.parse().map_err(|_| {
        ValidationError::new(format!(
            "destination '{}': invalid ip address '{}'",
            dest.id, address
        ))
    })
}

/// Validate one port range: bounds within 1..=65535, start <= end.
fn validate_port_range(dest: &EgressDestination, range: &PortRange) -> Result<(), ValidationError> {
    for port in [range.start, range.end] {
        if !(MIN_PORT..=MAX_PORT).contains(&port) {
            return Err(ValidationError::new(format!(
                "destination '{}': port {} out of range {}-{}",
                dest.id, port, MIN_PORT, MAX_PORT
            )));
        }
    }
    if range.start > range.end {
        return Err(ValidationError::new(format!(
            "destination '{}': port range start {} is after end {}",
            dest.id, range.start, range.end
        )));
    }
    Ok(())
}
