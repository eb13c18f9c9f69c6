//! Persistence calls for the story module.

use sqlx::PgPool;

use super::models::{Story, StoryDraft};

/// Handle over the shared pool; cloned into the module's router state.
#[derive(Clone)]
pub struct StoryStore {
    pool: PgPool,
}

impl StoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new story. `id` and `updated_at` are filled by the database.
    pub async fn insert(&self, draft: &StoryDraft, slug: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO story (slug, title, image, category, synopsis, author, content) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(slug)
        .bind(&draft.title)
        .bind(&draft.image)
        .bind(&draft.category)
        .bind(&draft.synopsis)
        .bind(&draft.author)
        .bind(&draft.content)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All stories, newest update first, optionally restricted to an exact
    /// author match.
    pub async fn list(&self, author: Option<&str>) -> Result<Vec<Story>, sqlx::Error> {
        match author {
            Some(author) => {
                sqlx::query_as::<_, Story>(
                    "SELECT id, slug, title, image, category, synopsis, author, content, updated_at \
                     FROM story WHERE author = $1 ORDER BY updated_at DESC",
                )
                .bind(author)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Story>(
                    "SELECT id, slug, title, image, category, synopsis, author, content, updated_at \
                     FROM story ORDER BY updated_at DESC",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
    }

    /// Point lookup on the unique slug, case-sensitive.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Story>, sqlx::Error> {
        sqlx::query_as::<_, Story>(
            "SELECT id, slug, title, image, category, synopsis, author, content, updated_at \
             FROM story WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
    }

    /// Delete by slug. Zero affected rows is not a fault; the caller does not
    /// distinguish a no-match delete from a successful one.
    pub async fn delete_by_slug(&self, slug: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM story WHERE slug = $1")
            .bind(slug)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
