use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::announcement::{Announcement, NewAnnouncement, UpdateAnnouncementRequest};

/// Persistence for announcement records. Each method is a single atomic
/// statement against the backing store.
#[async_trait]
pub trait AnnouncementStore: Send + Sync {
    /// All announcements (or only active ones), newest first.
    async fn list(&self, active_only: bool) -> anyhow::Result<Vec<Announcement>>;

    async fn insert(&self, new: NewAnnouncement) -> anyhow::Result<Announcement>;

    /// Applies the supplied fields only. Returns `None` when no row has `id`.
    async fn update(
        &self,
        id: Uuid,
        changes: &UpdateAnnouncementRequest,
    ) -> anyhow::Result<Option<Announcement>>;

    /// Returns `false` when no row has `id`.
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;

    async fn ping(&self) -> anyhow::Result<()>;
}

#[derive(Clone)]
pub struct PgAnnouncementStore {
    pool: PgPool,
}

impl PgAnnouncementStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnnouncementStore for PgAnnouncementStore {
    async fn list(&self, active_only: bool) -> anyhow::Result<Vec<Announcement>> {
        let rows = sqlx::query_as::<_, Announcement>(
            "SELECT id, title, message, created_by, created_at, is_active
             FROM announcements
             WHERE ($1 = FALSE OR is_active = TRUE)
             ORDER BY created_at DESC",
        )
        .bind(active_only)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert(&self, new: NewAnnouncement) -> anyhow::Result<Announcement> {
        let row = sqlx::query_as::<_, Announcement>(
            "INSERT INTO announcements (title, message, created_by, created_at, is_active)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, title, message, created_by, created_at, is_active",
        )
        .bind(&new.title)
        .bind(&new.message)
        .bind(&new.created_by)
        .bind(new.created_at)
        .bind(new.is_active)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &UpdateAnnouncementRequest,
    ) -> anyhow::Result<Option<Announcement>> {
        let row = sqlx::query_as::<_, Announcement>(
            "UPDATE announcements
             SET is_active = COALESCE($1, is_active),
                 title = COALESCE($2, title),
                 message = COALESCE($3, message)
             WHERE id = $4
             RETURNING id, title, message, created_by, created_at, is_active",
        )
        .bind(changes.is_active)
        .bind(&changes.title)
        .bind(&changes.message)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
