use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::teacher::Teacher;

#[async_trait]
pub trait TeacherStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<Teacher>>;
}

#[derive(Clone)]
pub struct PgTeacherStore {
    pool: PgPool,
}

impl PgTeacherStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert the teacher, or refresh the display name of an existing one.
    pub async fn upsert(&self, teacher: &Teacher) -> anyhow::Result<Teacher> {
        let row = sqlx::query_as::<_, Teacher>(
            "INSERT INTO teachers (username, display_name)
             VALUES ($1, $2)
             ON CONFLICT (username) DO UPDATE SET display_name = EXCLUDED.display_name
             RETURNING username, display_name",
        )
        .bind(&teacher.username)
        .bind(&teacher.display_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}

#[async_trait]
impl TeacherStore for PgTeacherStore {
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<Teacher>> {
        let row = sqlx::query_as::<_, Teacher>(
            "SELECT username, display_name FROM teachers WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
