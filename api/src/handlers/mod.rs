//! Request-boundary handlers shared by the routes.

pub mod error;
