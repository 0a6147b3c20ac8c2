//! Pre-built Test Fixtures
//!
//! Provides ready-to-use customers and requests. These fixtures are
//! consistent and predictable for unit tests.

use core_kernel::CustomerId;
use domain_customer::{
    Customer, CustomerRegistrationRequest, CustomerUpdateRequest, Gender, NewCustomer,
};

/// Fixture for customer test data
pub struct CustomerFixtures;

impl CustomerFixtures {
    /// The customer used in the update walkthrough
    pub fn german() -> Customer {
        Customer {
            id: CustomerId::new(1),
            name: "German".to_string(),
            email: "g@x.com".to_string(),
            age: 20,
            gender: None,
        }
    }

    /// A customer with a gender set
    pub fn ana() -> Customer {
        Customer {
            id: CustomerId::new(2),
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            age: 34,
            gender: Some(Gender::Female),
        }
    }

    /// A second customer with a gender set
    pub fn bruno() -> Customer {
        Customer {
            id: CustomerId::new(3),
            name: "Bruno".to_string(),
            email: "bruno@x.com".to_string(),
            age: 41,
            gender: Some(Gender::Male),
        }
    }

    /// All named customers, in id order
    pub fn all() -> Vec<Customer> {
        vec![Self::german(), Self::ana(), Self::bruno()]
    }

    /// An unsaved customer matching `german()`
    pub fn new_german() -> NewCustomer {
        NewCustomer::new("German", "g@x.com", 20)
    }
}

/// Fixture for service requests
pub struct RequestFixtures;

impl RequestFixtures {
    /// Registration for `german()`
    pub fn register_german() -> CustomerRegistrationRequest {
        CustomerRegistrationRequest::new("German", "g@x.com", 20)
    }

    /// Update that only changes the age
    pub fn age_thirty() -> CustomerUpdateRequest {
        CustomerUpdateRequest::default().age(30)
    }

    /// Update that repeats every field of `customer`
    pub fn echo(customer: &Customer) -> CustomerUpdateRequest {
        let request = CustomerUpdateRequest::default()
            .name(customer.name.clone())
            .email(customer.email.clone())
            .age(customer.age);

        match customer.gender {
            Some(gender) => request.gender(gender),
            None => request,
        }
    }
}
