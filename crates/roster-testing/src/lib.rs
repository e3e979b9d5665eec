//! Test utilities for Roster crates.
//!
//! Provides the contract fixture loader and canned employee payloads.
//! Import from `[dev-dependencies]` only, never in production code.

pub mod employee;
pub mod fixture;
