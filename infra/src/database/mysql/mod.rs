//! MySQL repository implementations.

mod customer_repository_impl;
mod kyc_repository_impl;
mod tenant_repository_impl;

pub use customer_repository_impl::MySqlCustomerRepository;
pub use kyc_repository_impl::MySqlKycSubmissionRepository;
pub use tenant_repository_impl::MySqlTenantRepository;
