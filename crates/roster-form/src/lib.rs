//! Client-side employee form.
//!
//! `state` is the synchronous form model a UI renders, `controller` drives it
//! against an [`client::EmployeesApi`], and `client` talks to the employees
//! service over HTTP.

pub mod client;
pub mod controller;
pub mod country;
pub mod state;
