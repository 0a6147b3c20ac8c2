//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use fake::faker::name::en::{FirstName, LastName};
use fake::{Fake, Faker};

use core_kernel::CustomerId;
use domain_customer::{Customer, CustomerRegistrationRequest, Gender, NewCustomer};

use crate::fixtures::CustomerFixtures;

/// Builder for constructing test customers
#[derive(Debug, Clone)]
pub struct CustomerBuilder {
    id: CustomerId,
    name: String,
    email: String,
    age: i32,
    gender: Option<Gender>,
}

impl Default for CustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerBuilder {
    /// Creates a new builder with the values of `CustomerFixtures::german()`
    pub fn new() -> Self {
        let german = CustomerFixtures::german();
        Self {
            id: german.id,
            name: german.name,
            email: german.email,
            age: german.age,
            gender: german.gender,
        }
    }

    /// Creates a builder filled with fake data
    ///
    /// The email is derived from the generated name, so two random builders
    /// can collide; override it when uniqueness matters.
    pub fn random() -> Self {
        let first: String = FirstName().fake();
        let last: String = LastName().fake();
        let gender = if Faker.fake::<bool>() {
            Gender::Male
        } else {
            Gender::Female
        };

        Self {
            id: CustomerId::new((1..10_000).fake::<i32>()),
            email: format!("{}.{}@customers.test", first, last).to_lowercase(),
            name: format!("{} {}", first, last),
            age: (16..99).fake::<i32>(),
            gender: Some(gender),
        }
    }

    /// Sets the customer ID
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = CustomerId::new(id);
        self
    }

    /// Sets the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the age
    pub fn with_age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    /// Sets the gender
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Clears the gender
    pub fn without_gender(mut self) -> Self {
        self.gender = None;
        self
    }

    /// Builds a persisted customer
    pub fn build(self) -> Customer {
        Customer {
            id: self.id,
            name: self.name,
            email: self.email,
            age: self.age,
            gender: self.gender,
        }
    }

    /// Builds an unsaved customer, dropping the id
    pub fn build_new(self) -> NewCustomer {
        NewCustomer {
            name: self.name,
            email: self.email,
            age: self.age,
            gender: self.gender,
        }
    }

    /// Builds a registration request, dropping the id
    pub fn build_registration(self) -> CustomerRegistrationRequest {
        CustomerRegistrationRequest {
            name: self.name,
            email: self.email,
            age: self.age,
            gender: self.gender,
        }
    }
}
