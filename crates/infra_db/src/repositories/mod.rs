//! Repository implementations
//!
//! Repositories encapsulate hand-written SQL and hand every result row to
//! the record mapper. They speak `DatabaseError`; the adapters translate
//! that into `PortError`.

pub mod customer;

pub use customer::CustomerRepository;
