//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for customer types that give
//! more meaningful error messages than standard assertions.

use domain_customer::{Customer, CustomerError, CustomerRegistrationRequest};

/// Asserts that a persisted customer carries exactly the registered fields
///
/// # Panics
///
/// Panics naming the first field that differs
pub fn assert_customer_matches_registration(
    customer: &Customer,
    request: &CustomerRegistrationRequest,
) {
    assert_eq!(customer.name, request.name, "name differs for customer {}", customer.id);
    assert_eq!(customer.email, request.email, "email differs for customer {}", customer.id);
    assert_eq!(customer.age, request.age, "age differs for customer {}", customer.id);
    assert_eq!(customer.gender, request.gender, "gender differs for customer {}", customer.id);
}

/// Asserts that two customers agree on every field except the id
pub fn assert_same_fields(actual: &Customer, expected: &Customer) {
    assert_eq!(
        (&actual.name, &actual.email, actual.age, actual.gender),
        (&expected.name, &expected.email, expected.age, expected.gender),
        "customer {} does not match expected customer {}",
        actual.id,
        expected.id
    );
}

/// Asserts that a service result is a `NotFound` error
pub fn assert_not_found<T: std::fmt::Debug>(result: Result<T, CustomerError>) {
    match result {
        Err(CustomerError::NotFound(_)) => {}
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

/// Asserts that a service result is a `DuplicateResource` error
pub fn assert_duplicate<T: std::fmt::Debug>(result: Result<T, CustomerError>) {
    match result {
        Err(CustomerError::DuplicateResource(_)) => {}
        other => panic!("Expected DuplicateResource, got {:?}", other),
    }
}

/// Asserts that a service result is a `NoChanges` error
pub fn assert_no_changes<T: std::fmt::Debug>(result: Result<T, CustomerError>) {
    match result {
        Err(CustomerError::NoChanges) => {}
        other => panic!("Expected NoChanges, got {:?}", other),
    }
}
