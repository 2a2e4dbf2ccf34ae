//! Request and response DTOs for the public API.

pub mod admin;
pub mod customer;
