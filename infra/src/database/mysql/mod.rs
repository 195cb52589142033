//! MySQL repository implementations

pub mod post_repository_impl;
pub mod user_repository_impl;

pub use post_repository_impl::MySqlPostRepository;
pub use user_repository_impl::MySqlUserRepository;

use morph_core::errors::DomainError;

/// Wrap a driver error for the domain layer
pub(crate) fn db_error(context: &str, error: sqlx::Error) -> DomainError {
    tracing::error!(error = %error, context, "Database operation failed");
    DomainError::Internal {
        message: format!("{}: {}", context, error),
    }
}

/// True when the error is a duplicate-key violation
pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db) if db.is_unique_violation())
}
