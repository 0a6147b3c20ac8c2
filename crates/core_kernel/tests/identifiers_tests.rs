//! Unit tests for the Identifiers module
//!
//! Tests cover creation, parsing, conversion, ordering and
//! serialization of customer identifiers.

use core_kernel::{CoreError, CustomerId};
use proptest::prelude::*;

mod customer_id_tests {
    use super::*;

    #[test]
    fn test_value_roundtrip() {
        let id = CustomerId::new(1);
        assert_eq!(id.value(), 1);
    }

    #[test]
    fn test_display_is_plain_number() {
        assert_eq!(CustomerId::new(250).to_string(), "250");
    }

    #[test]
    fn test_from_str() {
        let parsed: CustomerId = "99".parse().unwrap();
        assert_eq!(parsed, CustomerId::new(99));
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        let result = "abc".parse::<CustomerId>();
        match result {
            Err(CoreError::Validation(msg)) => assert!(msg.contains("abc")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_ordering_follows_raw_key() {
        let mut ids = vec![CustomerId::new(3), CustomerId::new(1), CustomerId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![CustomerId::new(1), CustomerId::new(2), CustomerId::new(3)]);
    }

    #[test]
    fn test_json_is_transparent() {
        let id = CustomerId::new(5);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "5");

        let deserialized: CustomerId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, id);
    }
}

proptest! {
    #[test]
    fn prop_display_parse_roundtrip(raw in any::<i32>()) {
        let id = CustomerId::new(raw);
        let parsed: CustomerId = id.to_string().parse().unwrap();
        prop_assert_eq!(parsed, id);
    }
}
