//! Service request types and partial-update reconciliation
//!
//! Update requests carry every field as an `Option`: `Some` means the caller
//! sent a value, `None` means the field was not sent and must be left alone.
//! None of the customer fields are nullable, so there is no way to express
//! "clear this field" and no ambiguity between a missing and a null value.

use serde::{Deserialize, Serialize};

use crate::customer::{Customer, Gender, NewCustomer};

/// Request for registering a new customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRegistrationRequest {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub gender: Option<Gender>,
}

impl CustomerRegistrationRequest {
    /// Creates a registration request without a gender
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
            gender: None,
        }
    }

    /// Sets the gender
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }
}

impl From<CustomerRegistrationRequest> for NewCustomer {
    fn from(request: CustomerRegistrationRequest) -> Self {
        NewCustomer {
            name: request.name,
            email: request.email,
            age: request.age,
            gender: request.gender,
        }
    }
}

/// Request for a partial update of a customer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerUpdateRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
}

impl CustomerUpdateRequest {
    /// Sets a new name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a new email
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets a new age
    pub fn age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    /// Sets a new gender
    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Returns true if no field was provided
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none() && self.gender.is_none()
    }

    /// Diffs the request against the current customer
    ///
    /// Each field is staged independently: only a provided value that differs
    /// from the current one counts as a change. The returned customer is always
    /// complete, with untouched fields carried over verbatim.
    pub fn reconcile(&self, current: &Customer) -> ReconciledUpdate {
        let mut customer = current.clone();
        let mut changed = Vec::new();

        if stage(self.name.as_ref(), &mut customer.name) {
            changed.push(CustomerField::Name);
        }
        if stage(self.email.as_ref(), &mut customer.email) {
            changed.push(CustomerField::Email);
        }
        if stage(self.age.as_ref(), &mut customer.age) {
            changed.push(CustomerField::Age);
        }
        if let Some(gender) = self.gender {
            if customer.gender != Some(gender) {
                customer.gender = Some(gender);
                changed.push(CustomerField::Gender);
            }
        }

        ReconciledUpdate { customer, changed }
    }
}

fn stage<T: PartialEq + Clone>(requested: Option<&T>, current: &mut T) -> bool {
    match requested {
        Some(value) if value != current => {
            *current = value.clone();
            true
        }
        _ => false,
    }
}

/// A mutable customer field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerField {
    Name,
    Email,
    Age,
    Gender,
}

/// Outcome of diffing an update request against the stored customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledUpdate {
    /// The full record to write back
    pub customer: Customer,
    /// Fields whose value differs from the stored record
    pub changed: Vec<CustomerField>,
}

impl ReconciledUpdate {
    /// Returns true if at least one field changed
    pub fn has_changes(&self) -> bool {
        !self.changed.is_empty()
    }

    /// Returns the new email if the email is one of the changed fields
    pub fn new_email(&self) -> Option<&str> {
        self.changed
            .contains(&CustomerField::Email)
            .then_some(self.customer.email.as_str())
    }
}
