//! MySQL implementation of the PostRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use morph_core::domain::entities::post::Post;
use morph_core::errors::DomainError;
use morph_core::repositories::PostRepository;

use super::db_error;

const POST_COLUMNS: &str = "id, name, prompt, photo, admin_id, created_at, updated_at";

/// MySQL implementation of PostRepository
pub struct MySqlPostRepository {
    pool: MySqlPool,
}

impl MySqlPostRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_post(row: &sqlx::mysql::MySqlRow) -> Result<Post, DomainError> {
        let column = |name: &str, e: sqlx::Error| DomainError::Internal {
            message: format!("Failed to get {}: {}", name, e),
        };
        let uuid = |name: &str, raw: String| {
            Uuid::parse_str(&raw).map_err(|e| DomainError::Internal {
                message: format!("Invalid {} UUID: {}", name, e),
            })
        };

        Ok(Post {
            id: uuid("post", row.try_get("id").map_err(|e| column("id", e))?)?,
            name: row.try_get("name").map_err(|e| column("name", e))?,
            prompt: row.try_get("prompt").map_err(|e| column("prompt", e))?,
            photo: row.try_get("photo").map_err(|e| column("photo", e))?,
            admin: uuid("admin", row.try_get("admin_id").map_err(|e| column("admin_id", e))?)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column("updated_at", e))?,
        })
    }
}

#[async_trait]
impl PostRepository for MySqlPostRepository {
    async fn create(&self, post: Post) -> Result<Post, DomainError> {
        let query = r#"
            INSERT INTO posts (id, name, prompt, photo, admin_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(post.id.to_string())
            .bind(&post.name)
            .bind(&post.prompt)
            .bind(&post.photo)
            .bind(post.admin.to_string())
            .bind(post.created_at)
            .bind(post.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to create post", e))?;

        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        let query = format!("SELECT {} FROM posts WHERE id = ? LIMIT 1", POST_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find post", e))?;

        row.as_ref().map(Self::row_to_post).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Post>, DomainError> {
        let query = format!("SELECT {} FROM posts ORDER BY created_at ASC", POST_COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list posts", e))?;

        rows.iter().map(Self::row_to_post).collect()
    }

    async fn find_by_admin(&self, admin: Uuid) -> Result<Vec<Post>, DomainError> {
        let query = format!(
            "SELECT {} FROM posts WHERE admin_id = ? ORDER BY created_at ASC",
            POST_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(admin.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list posts by admin", e))?;

        rows.iter().map(Self::row_to_post).collect()
    }
}
