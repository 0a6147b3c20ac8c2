//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating customers and update
//! requests.

use proptest::prelude::*;

use core_kernel::CustomerId;
use domain_customer::{Customer, CustomerUpdateRequest, Gender};

/// Strategy for generating customer IDs
pub fn customer_id_strategy() -> impl Strategy<Value = CustomerId> {
    (1i32..1_000_000i32).prop_map(CustomerId::new)
}

/// Strategy for generating names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,12}( [A-Z][a-z]{1,12})?"
}

/// Strategy for generating email addresses
pub fn email_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,10}\\.[a-z]{1,10}@[a-z]{2,8}\\.(com|dev|org)"
}

/// Strategy for generating ages
pub fn age_strategy() -> impl Strategy<Value = i32> {
    0i32..130i32
}

/// Strategy for generating genders
pub fn gender_strategy() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

/// Strategy for generating persisted customers
pub fn customer_strategy() -> impl Strategy<Value = Customer> {
    (
        customer_id_strategy(),
        name_strategy(),
        email_strategy(),
        age_strategy(),
        proptest::option::of(gender_strategy()),
    )
        .prop_map(|(id, name, email, age, gender)| Customer {
            id,
            name,
            email,
            age,
            gender,
        })
}

/// Strategy for generating arbitrary partial update requests
pub fn update_request_strategy() -> impl Strategy<Value = CustomerUpdateRequest> {
    (
        proptest::option::of(name_strategy()),
        proptest::option::of(email_strategy()),
        proptest::option::of(age_strategy()),
        proptest::option::of(gender_strategy()),
    )
        .prop_map(|(name, email, age, gender)| CustomerUpdateRequest {
            name,
            email,
            age,
            gender,
        })
}

/// Strategy for a customer paired with a request that repeats a random
/// subset of its current values
pub fn echoed_update_strategy() -> impl Strategy<Value = (Customer, CustomerUpdateRequest)> {
    (customer_strategy(), any::<[bool; 4]>()).prop_map(|(customer, [name, email, age, gender])| {
        let request = CustomerUpdateRequest {
            name: name.then(|| customer.name.clone()),
            email: email.then(|| customer.email.clone()),
            age: age.then_some(customer.age),
            gender: if gender { customer.gender } else { None },
        };
        (customer, request)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_customer::CustomerField;

    proptest! {
        #[test]
        fn test_echoed_updates_never_change(pair in echoed_update_strategy()) {
            let (customer, request) = pair;
            prop_assert!(!request.reconcile(&customer).has_changes());
        }

        #[test]
        fn test_reconcile_only_reports_sent_fields(
            customer in customer_strategy(),
            request in update_request_strategy(),
        ) {
            let reconciled = request.reconcile(&customer);

            prop_assert_eq!(reconciled.customer.id, customer.id);
            for field in &reconciled.changed {
                let sent = match field {
                    CustomerField::Name => request.name.is_some(),
                    CustomerField::Email => request.email.is_some(),
                    CustomerField::Age => request.age.is_some(),
                    CustomerField::Gender => request.gender.is_some(),
                };
                prop_assert!(sent);
            }
        }

        #[test]
        fn test_generated_emails_contain_at(email in email_strategy()) {
            prop_assert!(email.contains('@'));
        }
    }
}
