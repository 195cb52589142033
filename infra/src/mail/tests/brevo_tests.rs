use reqwest::StatusCode;
use serde_json::json;

use morph_shared::config::{MailConfig, MailProvider};

use crate::mail::brevo::{is_retriable_status, SendSmtpEmailResponse};
use crate::mail::{verification_email, BrevoMailService, MailService};

fn config() -> MailConfig {
    MailConfig {
        provider: MailProvider::Brevo,
        api_key: Some("xkeysib-test".to_string()),
        sender_email: "no-reply@ai-morph.app".to_string(),
        sender_name: "AI Morph".to_string(),
        ..MailConfig::default()
    }
}

#[test]
fn test_payload_shape() {
    let service = BrevoMailService::new(config()).unwrap();
    let message = verification_email("a@x.com", "123456", 10);

    let body = serde_json::to_value(service.payload(&message)).unwrap();
    assert_eq!(body["sender"], json!({ "name": "AI Morph", "email": "no-reply@ai-morph.app" }));
    assert_eq!(body["to"], json!([{ "email": "a@x.com" }]));
    assert_eq!(body["subject"], json!(message.subject));
    assert!(body["htmlContent"].as_str().unwrap().contains("123456"));
    assert_eq!(service.provider_name(), "Brevo");
}

#[test]
fn test_response_message_id() {
    let body: SendSmtpEmailResponse =
        serde_json::from_str(r#"{"messageId":"<202401011200.123@smtp-relay.mailin.fr>"}"#).unwrap();
    assert_eq!(
        body.message_id.as_deref(),
        Some("<202401011200.123@smtp-relay.mailin.fr>")
    );
}

#[test]
fn test_retriable_statuses() {
    assert!(is_retriable_status(StatusCode::TOO_MANY_REQUESTS));
    assert!(is_retriable_status(StatusCode::BAD_GATEWAY));
    assert!(!is_retriable_status(StatusCode::BAD_REQUEST));
    assert!(!is_retriable_status(StatusCode::UNAUTHORIZED));
}

#[tokio::test]
#[ignore] // Sends a real email; needs BREVO_API_KEY and MAIL_TEST_RECIPIENT
async fn test_live_send() {
    let mut config = config();
    config.api_key = std::env::var("BREVO_API_KEY").ok();
    let to = std::env::var("MAIL_TEST_RECIPIENT").unwrap();

    let service = BrevoMailService::new(config).unwrap();
    let id = service.send(&verification_email(&to, "123456", 10)).await.unwrap();
    assert!(!id.is_empty());
}
