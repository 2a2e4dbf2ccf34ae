//! Customer-facing request and response bodies.
//!
//! The wire format is camelCase, matching the onboarding SDK. Contact
//! fields on the registration and verification requests are optional at the
//! deserialization layer so the handlers can answer a missing field with the
//! documented message instead of a generic parse error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use kyc_core::domain::value_objects::CustomerProfile;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub customer_id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    pub email: Option<String>,
    pub email_otp: Option<String>,
    pub phone_otp: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpResponse {
    pub message: String,
    pub token: String,
    pub customer: CustomerProfile,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendOtpRequest {
    pub email: Option<String>,
}

/// KYC form payload submitted after verification
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitKycRequest {
    #[validate(length(min = 1, max = 200))]
    pub full_name: String,

    pub date_of_birth: NaiveDate,

    #[validate(length(min = 2, max = 56))]
    pub nationality: String,

    #[validate(length(min = 1, max = 200))]
    pub address_line1: String,

    #[validate(length(max = 200))]
    pub address_line2: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub city: String,

    #[validate(length(min = 1, max = 20))]
    pub postal_code: String,

    #[validate(length(min = 2, max = 56))]
    pub country: String,

    #[validate(length(min = 1, max = 40))]
    pub id_document_type: String,

    #[validate(length(min = 1, max = 60))]
    pub id_document_number: String,
}
