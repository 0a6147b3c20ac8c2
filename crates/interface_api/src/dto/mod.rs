//! Request and response bodies

pub mod customer;
pub mod ping;
