//! Customer entity model
//!
//! A `Customer` is one registered person. Persisted customers always carry a
//! store-assigned [`CustomerId`]; a customer that has not reached the store yet
//! is a [`NewCustomer`], which has no identifier at all.

use std::fmt;

use serde::{Deserialize, Serialize};

use core_kernel::CustomerId;

/// Gender of a customer, stored as its upper-case code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// All known genders, in declaration order
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Returns the code persisted in the `gender` column
    pub fn as_code(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// A persisted customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Store-assigned identifier, immutable after creation
    pub id: CustomerId,
    /// Display name
    pub name: String,
    /// Email address, unique across all customers
    pub email: String,
    /// Age in years
    pub age: i32,
    /// Optional gender
    pub gender: Option<Gender>,
}

impl Customer {
    /// Attaches a store-assigned identifier to new customer data
    pub fn from_new(id: CustomerId, new: NewCustomer) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            age: new.age,
            gender: new.gender,
        }
    }
}

/// Customer data that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub gender: Option<Gender>,
}

impl NewCustomer {
    /// Creates new customer data without a gender
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
