//! Builds the production adapters from configuration

use std::sync::Arc;

use morph_core::services::SessionStore;
use morph_infra::cache::{MemorySessionStore, RedisSessionStore};
use morph_infra::database::{DatabasePool, MySqlPostRepository, MySqlUserRepository};
use morph_infra::inference::HuggingFaceClient;
use morph_infra::mail::{create_mail_service, MailServiceAdapter};
use morph_infra::InfrastructureError;
use morph_shared::config::{AppConfig, SessionBackend};

use crate::app::Dependencies;

/// Adapters plus the handles `main` keeps for shutdown
pub struct Infrastructure {
    pub dependencies: Dependencies,
    pub database: DatabasePool,
}

/// Connect to MySQL and the session backend and build the outbound clients
pub async fn build_infrastructure(config: &AppConfig) -> Result<Infrastructure, InfrastructureError> {
    let pool = DatabasePool::new(&config.database).await?;
    if config.database.run_migrations {
        pool.run_migrations().await?;
    }

    let session_store: Arc<dyn SessionStore> = match config.session.backend {
        SessionBackend::Redis => {
            Arc::new(RedisSessionStore::connect(config.cache.clone(), &config.session).await?)
        }
        SessionBackend::Memory => {
            tracing::warn!("Using in-memory session store, sessions are lost on restart");
            Arc::new(MemorySessionStore::from_config(&config.session))
        }
    };

    let mail_service = MailServiceAdapter::new(
        create_mail_service(&config.mail)?,
        config.session.otp_expiration_minutes,
    );

    let dependencies = Dependencies {
        user_repository: Arc::new(MySqlUserRepository::new(pool.get_pool().clone())),
        post_repository: Arc::new(MySqlPostRepository::new(pool.get_pool().clone())),
        session_store,
        mail_service: Arc::new(mail_service),
        image_generator: Arc::new(HuggingFaceClient::new(config.inference.clone())?),
        code_generator: None,
    };

    Ok(Infrastructure {
        dependencies,
        database: pool,
    })
}
