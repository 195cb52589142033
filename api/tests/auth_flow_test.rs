//! Integration tests for OTP issue, registration and login

mod common;

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use serde_json::{json, Value};

    use morph_infra::mail::MockMailService;

    use crate::common::{seeded_user, test_context, test_context_with_mail, TEST_OTP, TEST_PASSWORD};
    use crate::init_app;

    fn registration(email: &str, otp: &str) -> Value {
        json!({
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": email,
            "password": "cobol1959",
            "otp": otp,
        })
    }

    #[actix_web::test]
    async fn test_send_otp_returns_session_and_mails_code() {
        let ctx = test_context();
        let app = init_app!(ctx);

        let req = test::TestRequest::get()
            .uri("/api/v1/send-otp?email=grace@example.com")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let header = resp
            .headers()
            .get("x-session-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .expect("session header");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "OTP sent successfully");
        assert_eq!(body["sessionID"], header.as_str());

        let outbox = ctx.mail.outbox();
        assert_eq!(outbox.len(), 1);
        assert_eq!(outbox[0].to, "grace@example.com");
        assert!(outbox[0].subject.contains(TEST_OTP));
    }

    #[actix_web::test]
    async fn test_send_otp_keeps_client_session() {
        let ctx = test_context();
        let app = init_app!(ctx);

        let req = test::TestRequest::get()
            .uri("/api/v1/send-otp?email=grace@example.com")
            .insert_header(("X-Session-Id", "browser-session-1"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["sessionID"], "browser-session-1");
    }

    #[actix_web::test]
    async fn test_send_otp_rejects_bad_email() {
        let ctx = test_context();
        let app = init_app!(ctx);

        for uri in ["/api/v1/send-otp?email=not-an-email", "/api/v1/send-otp"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "VALIDATION_ERROR");
        }
        assert_eq!(ctx.mail.get_message_count(), 0);
    }

    #[actix_web::test]
    async fn test_send_otp_conflict_for_existing_user() {
        let ctx = test_context();
        seeded_user(&ctx, "taken@example.com").await;
        let app = init_app!(ctx);

        let req = test::TestRequest::get()
            .uri("/api/v1/send-otp?email=Taken@Example.com")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "User already exists");
    }

    #[actix_web::test]
    async fn test_send_otp_mail_failure_is_500() {
        let ctx = test_context_with_mail(MockMailService::failing());
        let app = init_app!(ctx);

        let req = test::TestRequest::get()
            .uri("/api/v1/send-otp?email=grace@example.com")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "MAIL_ERROR");
    }

    #[actix_web::test]
    async fn test_create_user_sets_cookie_and_returns_token() {
        let ctx = test_context();
        let app = init_app!(ctx);

        let req = test::TestRequest::get()
            .uri("/api/v1/send-otp?email=grace@example.com")
            .to_request();
        let sent: Value = test::call_and_read_body_json(&app, req).await;
        let session_id = sent["sessionID"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri("/api/v1/create-user")
            .insert_header(("X-Session-Id", session_id))
            .set_json(registration("grace@example.com", TEST_OTP))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == "token")
            .map(|c| c.into_owned())
            .expect("token cookie");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(actix_web::cookie::SameSite::Lax));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "User created successfully");
        assert_eq!(body["token"], cookie.value());
        assert_eq!(body["user"]["firstName"], "Grace");
        assert_eq!(body["user"]["email"], "grace@example.com");
        assert!(body["user"].get("password").is_none());
        assert_eq!(ctx.users.count().await, 1);
    }

    #[actix_web::test]
    async fn test_create_user_accepts_session_in_body() {
        let ctx = test_context();
        let app = init_app!(ctx);
        let issued = ctx
            .state
            .otp_service
            .issue_code("grace@example.com", None)
            .await
            .unwrap();

        let mut body = registration("grace@example.com", TEST_OTP);
        body["sessionId"] = json!(issued.session_id);
        let req = test::TestRequest::post()
            .uri("/api/v1/create-user")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_create_user_wrong_otp() {
        let ctx = test_context();
        let app = init_app!(ctx);
        let issued = ctx
            .state
            .otp_service
            .issue_code("grace@example.com", None)
            .await
            .unwrap();

        let req = test::TestRequest::post()
            .uri("/api/v1/create-user")
            .insert_header(("X-Session-Id", issued.session_id))
            .set_json(registration("grace@example.com", "654321"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid or expired OTP");
        assert_eq!(ctx.users.count().await, 0);
    }

    #[actix_web::test]
    async fn test_create_user_missing_fields() {
        let ctx = test_context();
        let app = init_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/api/v1/create-user")
            .insert_header(("X-Session-Id", "abc"))
            .set_json(json!({ "email": "grace@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "All fields are required.");
    }

    #[actix_web::test]
    async fn test_create_user_malformed_json_is_json_error() {
        let ctx = test_context();
        let app = init_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/api/v1/create-user")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "BAD_REQUEST");
    }

    #[actix_web::test]
    async fn test_login_success_and_failure() {
        let ctx = test_context();
        let (user, _) = seeded_user(&ctx, "ada@example.com").await;
        let app = init_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/api/v1/login-user")
            .set_json(json!({ "email": "ADA@example.com", "password": TEST_PASSWORD }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.response().cookies().any(|c| c.name() == "token"));
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "User logged in successfully");
        assert_eq!(body["user"]["id"], user.id.to_string());
        assert_eq!(body["user"]["email"], "ada@example.com");

        for (email, password) in [("ada@example.com", "wrong-pass"), ("nobody@example.com", TEST_PASSWORD)] {
            let req = test::TestRequest::post()
                .uri("/api/v1/login-user")
                .set_json(json!({ "email": email, "password": password }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], "Invalid email or password");
        }
    }
}
