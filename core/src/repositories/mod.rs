//! Repository interfaces and in-memory implementations for testing.
//!
//! The MySQL implementations live in the `kyc_infra` crate; the traits here
//! are the storage contract the domain services are written against.

pub mod customer;
pub mod kyc;
pub mod tenant;

pub use customer::{CustomerRepository, InMemoryCustomerRepository};
pub use kyc::{InMemoryKycSubmissionRepository, KycSubmissionRepository};
pub use tenant::{InMemoryTenantRepository, TenantRepository};
