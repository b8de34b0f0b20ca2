//! Service layer for customer records.
//! - Separates request handling from data access.
//! - Reuses entity definitions and null checks from the `models` crate.
//! - Repositories are trait objects so callers choose the backing store.

pub mod errors;
pub mod customer;
