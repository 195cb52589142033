//! Unit tests for session records

use chrono::{Duration, TimeZone, Utc};

use crate::domain::entities::session::SessionRecord;

fn record() -> SessionRecord {
    let issued = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    SessionRecord::issue("S", "123456", "a@x.com", issued, Duration::minutes(10))
}

#[test]
fn test_expiry_is_issue_time_plus_validity() {
    let record = record();
    assert_eq!(
        record.otp_expiration_time,
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 10, 0).unwrap()
    );
}

#[test]
fn test_expiry_boundary_is_exclusive() {
    let record = record();
    let expiry = record.otp_expiration_time;

    assert!(!record.is_expired_at(expiry - Duration::milliseconds(1)));
    assert!(record.is_expired_at(expiry));
    assert!(record.is_expired_at(expiry + Duration::minutes(1)));
}

#[test]
fn test_numeric_comparison() {
    let record = record();
    assert!(record.matches_code("123456"));
    assert!(record.matches_code(" 123456 "));
    assert!(record.matches_code("0123456"));
    assert!(!record.matches_code("123457"));
    assert!(!record.matches_code("12345a"));
    assert!(!record.matches_code(""));
    assert!(!record.matches_code("-123456"));
}

#[test]
fn test_accepts_requires_both_conditions() {
    let record = record();
    let issued = record.otp_expiration_time - Duration::minutes(10);

    assert!(record.accepts("123456", issued + Duration::minutes(1)));
    assert!(!record.accepts("123456", issued + Duration::minutes(11)));
    assert!(!record.accepts("654321", issued + Duration::minutes(1)));
}

#[test]
fn test_bound_email_is_case_insensitive() {
    let record = record();
    assert!(record.is_bound_to("A@X.com"));
    assert!(!record.is_bound_to("b@x.com"));
}

#[test]
fn test_serialized_shape() {
    let record = record();
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["sessionID"], "S");
    assert_eq!(json["generatedOTP"], "123456");
    assert_eq!(json["adminEmail"], "a@x.com");
    assert_eq!(
        json["otpExpirationTime"],
        record.otp_expiration_time.timestamp_millis()
    );

    let back: SessionRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, record);
}
