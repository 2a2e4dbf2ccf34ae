#[path = "trait.rs"]
mod trait_;

pub mod mock;

pub use mock::InMemoryCustomerRepository;
pub use trait_::CustomerRepository;
