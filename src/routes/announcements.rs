use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use crate::{
    error::AnnouncementError,
    models::{
        announcement::{
            Announcement, CreateAnnouncementRequest, ListAnnouncementsQuery,
            UpdateAnnouncementRequest,
        },
        auth::TeacherCredential,
    },
    AppState,
};

/// GET /announcements?active_only=true — public, newest first.
pub async fn list_announcements(
    State(state): State<AppState>,
    Query(params): Query<ListAnnouncementsQuery>,
) -> Result<Json<Vec<Announcement>>, AnnouncementError> {
    state.announcements.list(params.active_only).await.map(Json)
}

/// POST /announcements — teachers only.
pub async fn create_announcement(
    State(state): State<AppState>,
    TeacherCredential(teacher): TeacherCredential,
    Json(body): Json<CreateAnnouncementRequest>,
) -> Result<Json<Announcement>, AnnouncementError> {
    state
        .announcements
        .create(teacher.as_deref(), body)
        .await
        .map(Json)
}

/// PATCH /announcements/{id} — teachers only; a missing body counts as an empty update.
pub async fn update_announcement(
    State(state): State<AppState>,
    Path(id): Path<String>,
    TeacherCredential(teacher): TeacherCredential,
    body: Option<Json<UpdateAnnouncementRequest>>,
) -> Result<Json<Announcement>, AnnouncementError> {
    let changes = body.map(|Json(b)| b).unwrap_or_default();
    state
        .announcements
        .update(&id, teacher.as_deref(), changes)
        .await
        .map(Json)
}

/// DELETE /announcements/{id} — teachers only.
pub async fn delete_announcement(
    State(state): State<AppState>,
    Path(id): Path<String>,
    TeacherCredential(teacher): TeacherCredential,
) -> Result<Json<Value>, AnnouncementError> {
    state.announcements.delete(&id, teacher.as_deref()).await?;
    Ok(Json(json!({ "message": "Announcement deleted successfully" })))
}
