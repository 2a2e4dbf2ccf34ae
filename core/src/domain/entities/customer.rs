//! Customer identity record tracking registration and verification state.

use chrono::{DateTime, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One onboarding subject, scoped to a tenant.
///
/// At most one record exists per (tenant, email); re-registering an
/// unverified identity re-arms the same record rather than inserting a new
/// row. While unverified, the record carries the pending OTP pair and its
/// shared expiry; once verified those fields are cleared and stay cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier for the customer
    pub id: Uuid,

    /// Owning tenant
    pub tenant_id: Uuid,

    /// Contact email, normalized to lowercase
    pub email: String,

    /// Contact phone number
    pub phone: String,

    /// Whether both contact points have been proven
    pub is_verified: bool,

    /// Pending email OTP, present only while unverified
    pub email_otp: Option<String>,

    /// Pending phone OTP, present only while unverified
    pub phone_otp: Option<String>,

    /// Shared expiry for both pending codes
    pub otp_expires_at: Option<DateTime<Utc>>,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the record was last updated
    pub updated_at: DateTime<Utc>,
}

/// The field set written by a registration or resend upsert.
///
/// The repository applies this atomically: insert when no (tenant, email)
/// row exists, otherwise overwrite phone, both codes, and expiry while
/// resetting the verified flag.
#[derive(Debug, Clone)]
pub struct PendingRegistration {
    pub tenant_id: Uuid,
    pub email: String,
    pub phone: String,
    pub email_otp: String,
    pub phone_otp: String,
    pub otp_expires_at: DateTime<Utc>,
}

impl Customer {
    /// Creates a new pending customer record from a registration upsert
    pub fn new_pending(pending: &PendingRegistration) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            tenant_id: pending.tenant_id,
            email: pending.email.clone(),
            phone: pending.phone.clone(),
            is_verified: false,
            email_otp: Some(pending.email_otp.clone()),
            phone_otp: Some(pending.phone_otp.clone()),
            otp_expires_at: Some(pending.otp_expires_at),
            created_at: now,
            updated_at: now,
        }
    }

    /// Re-arms the OTP challenge in place, superseding any earlier codes.
    ///
    /// The previous pair becomes permanently invalid even if its expiry has
    /// not elapsed (last-write-wins).
    pub fn rearm(&mut self, pending: &PendingRegistration) {
        self.phone = pending.phone.clone();
        self.email_otp = Some(pending.email_otp.clone());
        self.phone_otp = Some(pending.phone_otp.clone());
        self.otp_expires_at = Some(pending.otp_expires_at);
        self.is_verified = false;
        self.updated_at = Utc::now();
    }

    /// Marks the customer verified and clears the pending OTP state
    pub fn mark_verified(&mut self) {
        self.is_verified = true;
        self.email_otp = None;
        self.phone_otp = None;
        self.otp_expires_at = None;
        self.updated_at = Utc::now();
    }

    /// Whether the pending OTP pair has expired at `now`.
    ///
    /// A record without an expiry (no codes outstanding) counts as expired:
    /// there is nothing left to verify against.
    pub fn otp_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.otp_expires_at {
            Some(expires_at) => now >= expires_at,
            None => true,
        }
    }

    /// Compares a submitted code pair against the stored pair.
    ///
    /// Both comparisons always run, in constant time, so a single wrong code
    /// does not short-circuit. Missing stored codes never match.
    pub fn otp_matches(&self, email_code: &str, phone_code: &str) -> bool {
        let email_ok = match &self.email_otp {
            Some(stored) => constant_time_eq(stored.as_bytes(), email_code.as_bytes()),
            None => false,
        };
        let phone_ok = match &self.phone_otp {
            Some(stored) => constant_time_eq(stored.as_bytes(), phone_code.as_bytes()),
            None => false,
        };
        email_ok & phone_ok
    }
}
