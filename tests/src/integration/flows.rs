//! # Integration Test Flows
//!
//! Tests that the egress-destination mapper and the shipped rule validator
//! work together correctly at the contract boundary.
//!
//! ## Flows Tested
//!
//! 1. **Inbound**: payload bytes → decode → rule validation → domain
//!    destinations, including the rejection paths with their
//!    client-visible error messages.
//! 2. **Outbound**: domain destinations → encode → payload bytes with the
//!    omission rules clients rely on.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use policyd_api::{
        EgressDestinationMapper, MapperError, RuleValidator, ValidatorLimits,
    };
    use policyd_types::{AppLifecycle, EgressDestination, IpRange, PortRange};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Mapper wired to the shipped rule set, as the API layer deploys it.
    fn production_mapper() -> EgressDestinationMapper {
        let validator = Arc::new(RuleValidator::new(ValidatorLimits::default()));
        EgressDestinationMapper::new(validator)
    }

    fn web_destination() -> EgressDestination {
        EgressDestination {
            id: "destination-web".to_string(),
            name: "frontend".to_string(),
            description: "edge traffic".to_string(),
            protocol: "tcp".to_string(),
            ports: vec![PortRange {
                start: 443,
                end: 443,
            }],
            ip_ranges: vec![IpRange {
                start: "203.0.113.10".to_string(),
                end: "203.0.113.20".to_string(),
            }],
            ..Default::default()
        }
    }

    // =============================================================================
    // INBOUND FLOW: DECODE → VALIDATE
    // =============================================================================

    #[test]
    fn test_valid_payload_decodes_through_rules() {
        let payload = br#"{
            "total_destinations": 2,
            "destinations": [
                {
                    "id": "a",
                    "name": "dns",
                    "protocol": "udp",
                    "ports": [{ "start": 53, "end": 53 }],
                    "ips": [{ "start": "8.8.8.8", "end": "8.8.8.8" }]
                },
                {
                    "id": "b",
                    "protocol": "icmp",
                    "ips": [{ "start": "10.0.0.1", "end": "10.0.0.255" }]
                }
            ]
        }"#;

        let destinations = production_mapper().decode(payload).unwrap();
        assert_eq!(destinations.len(), 2);
        assert_eq!(destinations[0].id, "a");
        assert_eq!(destinations[0].ports, vec![PortRange { start: 53, end: 53 }]);
        assert_eq!(destinations[1].icmp_type, Some(-1));
        assert_eq!(destinations[1].icmp_code, Some(-1));
        assert_eq!(destinations[1].app_lifecycle, AppLifecycle::All);
    }

    #[test]
    fn test_unknown_protocol_is_gated_not_a_parse_error() {
        // The wire admits any protocol string; the rule set rejects it
        // with the client-visible prefix.
        let payload = br#"{
            "total_destinations": 1,
            "destinations": [
                { "id": "a", "protocol": "gre", "ips": [{ "start": "10.0.0.1", "end": "10.0.0.2" }] }
            ]
        }"#;

        let err = production_mapper().decode(payload).unwrap_err();
        assert!(matches!(err, MapperError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "validate destinations: destination 'a': unknown protocol 'gre', must be tcp, udp, or icmp"
        );
    }

    #[test]
    fn test_missing_ip_ranges_rejected() {
        let payload = br#"{
            "total_destinations": 1,
            "destinations": [ { "id": "a", "protocol": "tcp" } ]
        }"#;

        let err = production_mapper().decode(payload).unwrap_err();
        assert_eq!(
            err.to_string(),
            "validate destinations: destination 'a': requires at least one ip range"
        );
    }

    #[test]
    fn test_duplicate_ids_rejected_across_batch() {
        let payload = br#"{
            "total_destinations": 2,
            "destinations": [
                { "id": "a", "protocol": "tcp", "ips": [{ "start": "10.0.0.1", "end": "10.0.0.2" }] },
                { "id": "a", "protocol": "udp", "ips": [{ "start": "10.0.1.1", "end": "10.0.1.2" }] }
            ]
        }"#;

        let err = production_mapper().decode(payload).unwrap_err();
        assert_eq!(
            err.to_string(),
            "validate destinations: duplicate destination id 'a'"
        );
    }

    #[test]
    fn test_ports_on_icmp_rejected() {
        let payload = br#"{
            "total_destinations": 1,
            "destinations": [
                {
                    "id": "a",
                    "protocol": "icmp",
                    "ports": [{ "start": 80, "end": 80 }],
                    "ips": [{ "start": "10.0.0.1", "end": "10.0.0.2" }]
                }
            ]
        }"#;

        let err = production_mapper().decode(payload).unwrap_err();
        assert_eq!(
            err.to_string(),
            "validate destinations: destination 'a': icmp destinations may not specify ports"
        );
    }

    #[test]
    fn test_malformed_payload_reports_parser_message() {
        let err = production_mapper().decode(b"%%%").unwrap_err();
        assert!(matches!(err, MapperError::Decode(_)));
        assert_eq!(
            err.to_string(),
            "unmarshal json: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_truncated_payload_is_a_decode_error() {
        let err = production_mapper()
            .decode(br#"{"total_destinations": 1, "destinations": ["#)
            .unwrap_err();
        assert!(matches!(err, MapperError::Decode(_)));
    }

    // =============================================================================
    // OUTBOUND FLOW: ENCODE
    // =============================================================================

    #[test]
    fn test_encode_then_decode_round_trips_through_rules() {
        let mapper = production_mapper();
        let stored = vec![web_destination()];

        let payload = mapper.encode(&stored).unwrap();
        let decoded = mapper.decode(&payload).unwrap();
        assert_eq!(decoded, stored);
    }

    #[test]
    fn test_encode_reports_count_and_order() {
        let mapper = production_mapper();
        let mut second = web_destination();
        second.id = "destination-api".to_string();
        second.name = "api".to_string();
        let stored = vec![web_destination(), second];

        let payload = mapper.encode(&stored).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&payload).unwrap();
        assert_eq!(value["total_destinations"], 2);
        assert_eq!(value["destinations"][0]["id"], "destination-web");
        assert_eq!(value["destinations"][1]["id"], "destination-api");
    }
}
