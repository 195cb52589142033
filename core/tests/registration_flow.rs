//! End-to-end registration flow through the public core API

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use morph_core::domain::entities::SessionRecord;
    use morph_core::repositories::MockUserRepository;
    use morph_core::services::{
        AccountService, AccountServiceConfig, LoginCommand, MailServiceTrait, OtpService,
        OtpServiceConfig, PasswordHasher, RegisterCommand, SessionStore, TokenService,
        TokenServiceConfig,
    };
    use morph_core::{AuthError, DomainError};

    #[derive(Default)]
    struct InMemoryStore {
        records: RwLock<HashMap<String, SessionRecord>>,
    }

    #[async_trait]
    impl SessionStore for InMemoryStore {
        async fn load(&self, session_id: &str) -> Result<Option<SessionRecord>, String> {
            Ok(self.records.read().await.get(session_id).cloned())
        }

        async fn save(&self, record: &SessionRecord) -> Result<(), String> {
            self.records
                .write()
                .await
                .insert(record.session_id.clone(), record.clone());
            Ok(())
        }

        async fn remove(&self, session_id: &str) -> Result<(), String> {
            self.records.write().await.remove(session_id);
            Ok(())
        }
    }

    /// Captures the last code so the test can play the user's part
    #[derive(Default)]
    struct Inbox {
        last: RwLock<Option<(String, String)>>,
    }

    #[async_trait]
    impl MailServiceTrait for Inbox {
        async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
            *self.last.write().await = Some((email.to_string(), code.to_string()));
            Ok("<msg@test>".to_string())
        }
    }

    #[tokio::test]
    async fn test_issue_register_then_login() {
        let users = Arc::new(MockUserRepository::new());
        let inbox = Arc::new(Inbox::default());
        let otp = Arc::new(OtpService::new(
            users.clone(),
            Arc::new(InMemoryStore::default()),
            inbox.clone(),
            OtpServiceConfig::default(),
        ));
        let accounts = AccountService::new(
            users.clone(),
            otp.clone(),
            Arc::new(TokenService::new(TokenServiceConfig::default())),
            PasswordHasher::new(4),
            AccountServiceConfig::default(),
        );

        let issued = otp.issue_code("Grace@Example.com", None).await.unwrap();
        let (to, code) = inbox.last.read().await.clone().unwrap();
        assert_eq!(to, "grace@example.com");
        assert_eq!(code.len(), 6);

        let register = |code: String| RegisterCommand {
            first_name: Some("Grace".to_string()),
            last_name: Some("Hopper".to_string()),
            email: Some("grace@example.com".to_string()),
            password: Some("cobol-rules".to_string()),
            otp: Some(code),
            session_id: Some(issued.session_id.clone()),
        };

        let session = accounts.register(register(code.clone())).await.unwrap();
        assert_eq!(session.user.first_name, "Grace");

        // A second attempt with the same, still-valid code hits the existing account
        let again = accounts.register(register(code)).await;
        assert!(matches!(again, Err(DomainError::Auth(AuthError::UserAlreadyExists))));

        // Further codes are refused for a registered address
        let reissue = otp.issue_code("grace@example.com", None).await;
        assert!(matches!(reissue, Err(DomainError::Auth(AuthError::UserAlreadyExists))));

        let login = accounts
            .login(LoginCommand {
                email: Some("grace@example.com".to_string()),
                password: Some("cobol-rules".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(login.user.id, session.user.id);
    }
}
