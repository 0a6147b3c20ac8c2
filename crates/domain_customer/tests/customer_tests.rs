//! Tests for the customer model, request reconciliation and error mapping

use proptest::prelude::*;

use core_kernel::{CustomerId, PortError};
use domain_customer::{
    Customer, CustomerError, CustomerField, CustomerUpdateRequest, Gender,
};

fn arb_gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

fn arb_customer() -> impl Strategy<Value = Customer> {
    (
        1..10_000i32,
        "[A-Z][a-z]{1,12}",
        "[a-z]{1,10}@[a-z]{1,8}\\.com",
        0..120i32,
        proptest::option::of(arb_gender()),
    )
        .prop_map(|(id, name, email, age, gender)| Customer {
            id: CustomerId::new(id),
            name,
            email,
            age,
            gender,
        })
}

// ============================================================================
// Gender Tests
// ============================================================================

mod gender_tests {
    use super::*;

    #[test]
    fn test_gender_json_uses_stored_codes() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"MALE\"");
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"FEMALE\"");
    }

    #[test]
    fn test_gender_json_rejects_unknown_code() {
        assert!(serde_json::from_str::<Gender>("\"OTHER\"").is_err());
        assert!(serde_json::from_str::<Gender>("\"male\"").is_err());
    }
}

// ============================================================================
// Error Tests
// ============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_transformation_becomes_mapping_error() {
        let err: CustomerError = PortError::transformation("bad row").into();
        assert!(matches!(err, CustomerError::Mapping(ref m) if m == "bad row"));
    }

    #[test]
    fn test_other_port_errors_pass_through_unmodified() {
        let err: CustomerError = PortError::conflict("unique violation").into();
        match err {
            CustomerError::Storage(PortError::Conflict { message }) => {
                assert_eq!(message, "unique violation")
            }
            other => panic!("Expected Storage(Conflict), got {:?}", other),
        }
    }

    #[test]
    fn test_not_found_message() {
        let err = CustomerError::not_found(CustomerId::new(12));
        assert_eq!(err.to_string(), "customer with id [12] not found");
    }
}

// ============================================================================
// Reconciliation Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_echoing_current_values_is_never_a_change(
        current in arb_customer(),
        send_name in any::<bool>(),
        send_email in any::<bool>(),
        send_age in any::<bool>(),
        send_gender in any::<bool>(),
    ) {
        let request = CustomerUpdateRequest {
            name: send_name.then(|| current.name.clone()),
            email: send_email.then(|| current.email.clone()),
            age: send_age.then_some(current.age),
            gender: if send_gender { current.gender } else { None },
        };

        let reconciled = request.reconcile(&current);
        prop_assert!(!reconciled.has_changes());
        prop_assert_eq!(reconciled.customer, current);
    }

    #[test]
    fn prop_absent_fields_are_preserved(current in arb_customer(), new_age in 0..120i32) {
        let reconciled = CustomerUpdateRequest::default().age(new_age).reconcile(&current);

        prop_assert_eq!(reconciled.customer.id, current.id);
        prop_assert_eq!(&reconciled.customer.name, &current.name);
        prop_assert_eq!(&reconciled.customer.email, &current.email);
        prop_assert_eq!(reconciled.customer.gender, current.gender);
        prop_assert_eq!(reconciled.customer.age, new_age);
        prop_assert_eq!(reconciled.has_changes(), new_age != current.age);
    }

    #[test]
    fn prop_changed_fields_match_differences(
        current in arb_customer(),
        other in arb_customer(),
    ) {
        let request = CustomerUpdateRequest {
            name: Some(other.name.clone()),
            email: Some(other.email.clone()),
            age: Some(other.age),
            gender: other.gender,
        };

        let reconciled = request.reconcile(&current);

        prop_assert_eq!(
            reconciled.changed.contains(&CustomerField::Name),
            other.name != current.name
        );
        prop_assert_eq!(
            reconciled.changed.contains(&CustomerField::Email),
            other.email != current.email
        );
        prop_assert_eq!(
            reconciled.changed.contains(&CustomerField::Age),
            other.age != current.age
        );
        prop_assert_eq!(reconciled.customer.id, current.id);
    }
}
