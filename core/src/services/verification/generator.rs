//! One-time code generation.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Length of a generated one-time code
pub const OTP_CODE_LENGTH: usize = 6;

/// Generates OTP codes and their expiry timestamps.
///
/// Codes are uniform over 100000–999999, so a leading zero is never
/// produced and every code is exactly six digits.
#[derive(Debug, Clone)]
pub struct OtpGenerator {
    ttl_minutes: i64,
}

impl OtpGenerator {
    /// Creates a generator issuing codes valid for `ttl_minutes`
    pub fn new(ttl_minutes: i64) -> Self {
        Self { ttl_minutes }
    }

    /// Generates a random six-digit code
    pub fn generate_code(&self) -> String {
        let code: u32 = rand::thread_rng().gen_range(100_000..=999_999);
        code.to_string()
    }

    /// Computes the expiry for a code issued at `now`
    pub fn expiry_from(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + Duration::minutes(self.ttl_minutes)
    }
}
