//! Strongly-typed identifiers for domain entities
//!
//! Customer identifiers are assigned by the store (a `SERIAL` column), so the
//! newtype wraps the raw integer key. Wrapping it prevents passing an age or
//! a count where an identifier is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Identifier of a persisted customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i32);

impl CustomerId {
    /// Wraps a raw store key
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw store key
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CustomerId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|e| CoreError::validation(format!("invalid customer id '{}': {}", s, e)))
    }
}

impl From<i32> for CustomerId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<CustomerId> for i32 {
    fn from(id: CustomerId) -> i32 {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_id_display() {
        let id = CustomerId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_id_parsing() {
        let parsed: CustomerId = " 7 ".parse().unwrap();
        assert_eq!(parsed, CustomerId::new(7));
    }

    #[test]
    fn test_i32_conversion() {
        let id = CustomerId::from(13);
        let back: i32 = id.into();
        assert_eq!(back, 13);
    }
}
