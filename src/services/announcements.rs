use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::{
    db::{announcements::AnnouncementStore, teachers::TeacherStore},
    error::{AnnouncementError, AnnouncementResult},
    models::{
        announcement::{
            Announcement, CreateAnnouncementRequest, NewAnnouncement, UpdateAnnouncementRequest,
        },
        teacher::Teacher,
    },
    services::metrics,
};

/// Announcement CRUD gated by a teacher lookup. Stateless apart from the
/// injected store handles.
#[derive(Clone)]
pub struct AnnouncementService {
    announcements: Arc<dyn AnnouncementStore>,
    teachers: Arc<dyn TeacherStore>,
}

impl AnnouncementService {
    pub fn new(announcements: Arc<dyn AnnouncementStore>, teachers: Arc<dyn TeacherStore>) -> Self {
        Self {
            announcements,
            teachers,
        }
    }

    pub async fn list(&self, active_only: bool) -> AnnouncementResult<Vec<Announcement>> {
        let result = self
            .announcements
            .list(active_only)
            .await
            .map_err(AnnouncementError::from);
        observe("list", &result);
        result
    }

    pub async fn create(
        &self,
        teacher_username: Option<&str>,
        req: CreateAnnouncementRequest,
    ) -> AnnouncementResult<Announcement> {
        let result = self.create_inner(teacher_username, req).await;
        observe("create", &result);
        result
    }

    async fn create_inner(
        &self,
        teacher_username: Option<&str>,
        req: CreateAnnouncementRequest,
    ) -> AnnouncementResult<Announcement> {
        let teacher = self
            .authorize(teacher_username, "Authentication required to post announcements")
            .await?;
        validate_title(&req.title)?;

        let announcement = self
            .announcements
            .insert(NewAnnouncement {
                title: req.title,
                message: req.message,
                created_by: teacher.display_name,
                created_at: Utc::now(),
                is_active: req.is_active,
            })
            .await?;

        info!(
            "Announcement {} created by {}",
            announcement.id, teacher.username
        );
        Ok(announcement)
    }

    pub async fn update(
        &self,
        id: &str,
        teacher_username: Option<&str>,
        changes: UpdateAnnouncementRequest,
    ) -> AnnouncementResult<Announcement> {
        let result = self.update_inner(id, teacher_username, changes).await;
        observe("update", &result);
        result
    }

    async fn update_inner(
        &self,
        id: &str,
        teacher_username: Option<&str>,
        changes: UpdateAnnouncementRequest,
    ) -> AnnouncementResult<Announcement> {
        let teacher = self.authorize(teacher_username, "Authentication required").await?;

        if changes.is_empty() {
            return Err(AnnouncementError::BadRequest("No fields to update"));
        }
        if let Some(title) = &changes.title {
            validate_title(title)?;
        }

        let id = parse_id(id)?;
        let announcement = self
            .announcements
            .update(id, &changes)
            .await?
            .ok_or(AnnouncementError::NotFound)?;

        info!("Announcement {} updated by {}", id, teacher.username);
        Ok(announcement)
    }

    pub async fn delete(&self, id: &str, teacher_username: Option<&str>) -> AnnouncementResult<()> {
        let result = self.delete_inner(id, teacher_username).await;
        observe("delete", &result);
        result
    }

    async fn delete_inner(&self, id: &str, teacher_username: Option<&str>) -> AnnouncementResult<()> {
        let teacher = self.authorize(teacher_username, "Authentication required").await?;

        let id = parse_id(id)?;
        if !self.announcements.delete(id).await? {
            return Err(AnnouncementError::NotFound);
        }

        info!("Announcement {} deleted by {}", id, teacher.username);
        Ok(())
    }

    /// Store reachability, for health checks.
    pub async fn ping(&self) -> anyhow::Result<()> {
        self.announcements.ping().await
    }

    /// Resolve the caller to a registered teacher or fail with 401.
    async fn authorize(
        &self,
        teacher_username: Option<&str>,
        missing: &'static str,
    ) -> AnnouncementResult<Teacher> {
        let username = teacher_username
            .filter(|u| !u.is_empty())
            .ok_or(AnnouncementError::Unauthorized(missing))?;

        self.teachers
            .find_by_username(username)
            .await?
            .ok_or(AnnouncementError::Unauthorized("Invalid teacher credentials"))
    }
}

fn validate_title(title: &str) -> AnnouncementResult<()> {
    if title.trim().is_empty() {
        return Err(AnnouncementError::BadRequest("Title must not be empty"));
    }
    Ok(())
}

// A string that is not a UUID can never name a stored announcement.
fn parse_id(id: &str) -> AnnouncementResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| AnnouncementError::NotFound)
}

fn observe<T>(operation: &str, result: &AnnouncementResult<T>) {
    let status = match result {
        Ok(_) => "ok",
        Err(AnnouncementError::Unauthorized(_)) => "unauthorized",
        Err(AnnouncementError::BadRequest(_)) => "bad_request",
        Err(AnnouncementError::NotFound) => "not_found",
        Err(AnnouncementError::Store(_)) => "error",
    };
    metrics::record(operation, status);
}
