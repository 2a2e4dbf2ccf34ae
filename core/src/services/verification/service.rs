//! Verification orchestrator.
//!
//! Drives the identity lifecycle `unregistered -> pending -> verified`:
//! registration issues an OTP pair and upserts the pending record, resend
//! re-arms it, and verification checks expiry and codes before flipping the
//! record and minting a session token.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use kyc_shared::config::VerificationConfig;
use kyc_shared::utils::validation::{is_valid_email, is_valid_phone, normalize_email};

use crate::domain::entities::customer::PendingRegistration;
use crate::domain::value_objects::{CustomerProfile, VerifiedSession};
use crate::errors::{DomainError, DomainResult, VerificationError};
use crate::repositories::{CustomerRepository, TenantRepository};
use crate::services::token::TokenService;

use super::generator::OtpGenerator;
use super::traits::OtpTransport;
use super::types::RegistrationReceipt;

/// Orchestrates registration, OTP validation, and session issuance
pub struct VerificationService<C, T, X>
where
    C: CustomerRepository,
    T: TenantRepository,
    X: OtpTransport,
{
    /// Customer identity store
    customers: Arc<C>,
    /// Tenant directory
    tenants: Arc<T>,
    /// Out-of-band code delivery
    transport: Arc<X>,
    /// Session token issuer
    tokens: Arc<TokenService>,
    /// OTP code and expiry generation
    generator: OtpGenerator,
}

impl<C, T, X> VerificationService<C, T, X>
where
    C: CustomerRepository,
    T: TenantRepository,
    X: OtpTransport,
{
    /// Create a new verification service
    pub fn new(
        customers: Arc<C>,
        tenants: Arc<T>,
        transport: Arc<X>,
        tokens: Arc<TokenService>,
        config: VerificationConfig,
    ) -> Self {
        Self {
            customers,
            tenants,
            transport,
            tokens,
            generator: OtpGenerator::new(config.otp_ttl_minutes),
        }
    }

    /// Register a customer under a tenant and issue an OTP challenge.
    ///
    /// Resolves the tenant by slug; registration never provisions tenants.
    /// A second registration for the same (tenant, email) before the first
    /// pair is consumed silently supersedes it (last-write-wins); a
    /// registration for an already verified identity is rejected.
    pub async fn register(
        &self,
        tenant_slug: &str,
        email: &str,
        phone: &str,
    ) -> DomainResult<RegistrationReceipt> {
        let email = normalize_email(email);

        if !is_valid_email(&email) {
            return Err(DomainError::Validation {
                message: "Invalid email address".to_string(),
            });
        }
        if !is_valid_phone(phone) {
            return Err(DomainError::Validation {
                message: "Invalid phone number".to_string(),
            });
        }

        let tenant = self
            .tenants
            .find_by_slug(tenant_slug)
            .await?
            .ok_or_else(|| VerificationError::TenantNotConfigured {
                slug: tenant_slug.to_string(),
            })?;

        if let Some(existing) = self
            .customers
            .find_by_tenant_and_email(tenant.id, &email)
            .await?
        {
            if existing.is_verified {
                warn!(
                    customer_id = %existing.id,
                    tenant = %tenant.slug,
                    "registration rejected for verified identity"
                );
                return Err(VerificationError::AlreadyVerified.into());
            }
        }

        let receipt = self
            .issue_challenge(tenant.id, &email, phone)
            .await?;

        info!(
            customer_id = %receipt.customer_id,
            tenant = %tenant.slug,
            "customer registered, OTP challenge issued"
        );

        Ok(receipt)
    }

    /// Verify a submitted OTP pair and mint a session token.
    ///
    /// Only unverified identities are considered; a repeat attempt after a
    /// successful verification reports not-found. Expiry is checked before
    /// the codes so an expired pair never leaks whether it matched.
    pub async fn verify(
        &self,
        email: &str,
        email_code: &str,
        phone_code: &str,
    ) -> DomainResult<VerifiedSession> {
        let email = normalize_email(email);

        let customer = self
            .customers
            .find_unverified_by_email(&email)
            .await?
            .ok_or(VerificationError::CustomerNotFound)?;

        if customer.otp_expired_at(Utc::now()) {
            return Err(VerificationError::OtpExpired.into());
        }

        if !customer.otp_matches(email_code, phone_code) {
            warn!(customer_id = %customer.id, "OTP mismatch");
            return Err(VerificationError::InvalidOtp.into());
        }

        // Conditional update: a concurrent verify that won the race leaves
        // zero rows for this one, which reports as already verified.
        let transitioned = self.customers.mark_verified(customer.id).await?;
        if !transitioned {
            return Err(VerificationError::CustomerNotFound.into());
        }

        let token = self
            .tokens
            .mint(customer.id, &customer.email, customer.tenant_id)?;

        info!(customer_id = %customer.id, "customer verified, session issued");

        Ok(VerifiedSession {
            token,
            customer: CustomerProfile::from(&customer),
        })
    }

    /// Re-issue the OTP challenge for a pending identity.
    ///
    /// Regenerates both codes and the expiry against the stored phone
    /// number. Fails with not-found when no pending identity exists.
    pub async fn resend(&self, email: &str) -> DomainResult<RegistrationReceipt> {
        let email = normalize_email(email);

        let customer = self
            .customers
            .find_unverified_by_email(&email)
            .await?
            .ok_or(VerificationError::CustomerNotFound)?;

        let receipt = self
            .issue_challenge(customer.tenant_id, &email, &customer.phone)
            .await?;

        info!(customer_id = %receipt.customer_id, "OTP challenge re-issued");

        Ok(receipt)
    }

    /// Generate a fresh code pair, upsert the pending record, and deliver.
    ///
    /// A duplicate-identity race from a concurrent insert is retried once as
    /// an update against the now-existing row.
    async fn issue_challenge(
        &self,
        tenant_id: uuid::Uuid,
        email: &str,
        phone: &str,
    ) -> DomainResult<RegistrationReceipt> {
        let now = Utc::now();
        let pending = PendingRegistration {
            tenant_id,
            email: email.to_string(),
            phone: phone.to_string(),
            email_otp: self.generator.generate_code(),
            phone_otp: self.generator.generate_code(),
            otp_expires_at: self.generator.expiry_from(now),
        };

        let customer = match self.customers.upsert_pending(&pending).await {
            Ok(customer) => customer,
            Err(DomainError::Verification(VerificationError::DuplicateIdentity)) => {
                self.customers.upsert_pending(&pending).await?
            }
            Err(e) => return Err(e),
        };

        self.transport
            .deliver_email_code(email, &pending.email_otp)
            .await?;
        self.transport
            .deliver_phone_code(phone, &pending.phone_otp)
            .await?;

        Ok(RegistrationReceipt {
            customer_id: customer.id,
        })
    }
}
