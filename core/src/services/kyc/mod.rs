//! KYC submission service.

mod service;

pub use service::KycService;
