//! Session record binding an issued OTP to a client session.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};

/// Smallest code the issuer hands out
pub const OTP_MIN: u32 = 100_000;

/// Largest code the issuer hands out
pub const OTP_MAX: u32 = 999_999;

/// Default validity window for an issued code
pub const DEFAULT_OTP_EXPIRATION_MINUTES: i64 = 10;

/// Server-side state stored under the session id.
///
/// A new issue for the same session replaces the record wholesale. The record
/// is never mutated in place, and its removal is left to the store's TTL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "sessionID")]
    pub session_id: String,

    /// Six decimal digits
    #[serde(rename = "generatedOTP")]
    pub generated_otp: String,

    /// Absolute expiry, persisted as milliseconds since the epoch
    #[serde(rename = "otpExpirationTime", with = "chrono::serde::ts_milliseconds")]
    pub otp_expiration_time: DateTime<Utc>,

    /// Address the code was sent to
    #[serde(rename = "adminEmail")]
    pub admin_email: String,
}

impl SessionRecord {
    /// Builds the record for a code issued at `issued_at`
    pub fn issue(
        session_id: impl Into<String>,
        code: impl Into<String>,
        email: impl Into<String>,
        issued_at: DateTime<Utc>,
        validity: Duration,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            generated_otp: code.into(),
            otp_expiration_time: issued_at + validity,
            admin_email: email.into(),
        }
    }

    /// A code is usable only strictly before its expiry instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.otp_expiration_time
    }

    /// Normalized-integer equality between the stored code and `candidate`.
    ///
    /// Both sides are parsed as unsigned integers after trimming, so `"0123"`
    /// and `"123"` are equal. A side that does not parse never matches.
    pub fn matches_code(&self, candidate: &str) -> bool {
        match (parse_code(&self.generated_otp), parse_code(candidate)) {
            (Some(stored), Some(given)) => {
                constant_time_eq(&stored.to_be_bytes(), &given.to_be_bytes())
            }
            _ => false,
        }
    }

    /// Full verification rule: matching code and not yet expired
    pub fn accepts(&self, candidate: &str, now: DateTime<Utc>) -> bool {
        // Evaluate both so timing does not reveal which check failed
        let code_ok = self.matches_code(candidate);
        let fresh = !self.is_expired_at(now);
        code_ok & fresh
    }

    /// Case-insensitive comparison with the address the code was sent to
    pub fn is_bound_to(&self, email: &str) -> bool {
        self.admin_email.trim().eq_ignore_ascii_case(email.trim())
    }
}

fn parse_code(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<u64>().ok()
}
