//! Employee domain types and validation rules shared by the form and the service.
//!
//! This crate contains only pure types with no framework dependencies. Both tiers
//! call the same `validation` functions; the service is the final authority.

pub mod employee;
pub mod validation;
