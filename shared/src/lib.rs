//! # KycOnboard Shared
//!
//! Cross-cutting types shared by every layer of the KycOnboard backend:
//! environment-backed configuration, API response envelopes, and common
//! validation utilities.

pub mod config;
pub mod types;
pub mod utils;
