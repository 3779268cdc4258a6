//! Unit tests for the Identifiers module
//!
//! Tests cover creation, parsing, conversion, ordering, and serialization
//! of the integer identifier newtypes.

use core_kernel::{ClaimId, PolicyId, PolicyholderId};
use proptest::prelude::*;

mod policyholder_id_tests {
    use super::*;

    #[test]
    fn test_value_round_trip() {
        let id = PolicyholderId::new(30);
        assert_eq!(id.value(), 30);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(PolicyholderId::prefix(), "PH");
    }

    #[test]
    fn test_display_format() {
        assert_eq!(PolicyholderId::new(1).to_string(), "PH-1");
    }
}

mod policy_id_tests {
    use super::*;

    #[test]
    fn test_from_str_with_prefix() {
        let parsed: PolicyId = "POL-15".parse().unwrap();
        assert_eq!(parsed, PolicyId::new(15));
    }

    #[test]
    fn test_from_str_without_prefix() {
        let parsed: PolicyId = "15".parse().unwrap();
        assert_eq!(parsed, PolicyId::new(15));
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("POL-abc".parse::<PolicyId>().is_err());
        assert!("CLM-1".parse::<PolicyId>().is_err());
    }

    #[test]
    fn test_negative_ids_are_representable() {
        let parsed: PolicyId = "POL--3".parse().unwrap();
        assert_eq!(parsed.value(), -3);
    }
}

mod claim_id_tests {
    use super::*;

    #[test]
    fn test_ordering_follows_value() {
        let mut ids = vec![ClaimId::new(3), ClaimId::new(1), ClaimId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![ClaimId::new(1), ClaimId::new(2), ClaimId::new(3)]);
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_string(&ClaimId::new(5)).unwrap();
        assert_eq!(json, "5");

        let back: ClaimId = serde_json::from_str("5").unwrap();
        assert_eq!(back, ClaimId::new(5));
    }
}

proptest! {
    #[test]
    fn prop_display_parse_round_trip(raw in any::<i64>()) {
        let id = PolicyholderId::new(raw);
        let parsed: PolicyholderId = id.to_string().parse().unwrap();
        prop_assert_eq!(parsed, id);
    }
}
