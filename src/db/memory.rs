//! In-memory stores used as test doubles for the service and the router.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{announcements::AnnouncementStore, teachers::TeacherStore};
use crate::models::{
    announcement::{Announcement, NewAnnouncement, UpdateAnnouncementRequest},
    teacher::Teacher,
};

#[derive(Default)]
pub struct MemoryAnnouncementStore {
    // insertion order, oldest first
    rows: RwLock<Vec<Announcement>>,
}

impl MemoryAnnouncementStore {
    pub async fn snapshot(&self) -> Vec<Announcement> {
        self.rows.read().await.clone()
    }
}

#[async_trait]
impl AnnouncementStore for MemoryAnnouncementStore {
    async fn list(&self, active_only: bool) -> anyhow::Result<Vec<Announcement>> {
        let rows = self.rows.read().await;
        let mut out: Vec<Announcement> = rows
            .iter()
            .rev()
            .filter(|a| !active_only || a.is_active)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }

    async fn insert(&self, new: NewAnnouncement) -> anyhow::Result<Announcement> {
        let row = Announcement {
            id: Uuid::new_v4(),
            title: new.title,
            message: new.message,
            created_by: new.created_by,
            created_at: new.created_at,
            is_active: new.is_active,
        };
        self.rows.write().await.push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &UpdateAnnouncementRequest,
    ) -> anyhow::Result<Option<Announcement>> {
        let mut rows = self.rows.write().await;
        let Some(row) = rows.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        if let Some(is_active) = changes.is_active {
            row.is_active = is_active;
        }
        if let Some(title) = &changes.title {
            row.title = title.clone();
        }
        if let Some(message) = &changes.message {
            row.message = message.clone();
        }
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|a| a.id != id);
        Ok(rows.len() < before)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryTeacherStore {
    teachers: HashMap<String, Teacher>,
}

impl MemoryTeacherStore {
    pub fn with_teachers<'a>(teachers: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let teachers = teachers
            .into_iter()
            .map(|(username, display_name)| {
                (
                    username.to_string(),
                    Teacher {
                        username: username.to_string(),
                        display_name: display_name.to_string(),
                    },
                )
            })
            .collect();
        Self { teachers }
    }
}

#[async_trait]
impl TeacherStore for MemoryTeacherStore {
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<Teacher>> {
        Ok(self.teachers.get(username).cloned())
    }
}

/// Announcement store whose every call fails, for exercising fault propagation.
pub struct BrokenAnnouncementStore;

#[async_trait]
impl AnnouncementStore for BrokenAnnouncementStore {
    async fn list(&self, _active_only: bool) -> anyhow::Result<Vec<Announcement>> {
        Err(anyhow::anyhow!("connection refused"))
    }

    async fn insert(&self, _new: NewAnnouncement) -> anyhow::Result<Announcement> {
        Err(anyhow::anyhow!("connection refused"))
    }

    async fn update(
        &self,
        _id: Uuid,
        _changes: &UpdateAnnouncementRequest,
    ) -> anyhow::Result<Option<Announcement>> {
        Err(anyhow::anyhow!("connection refused"))
    }

    async fn delete(&self, _id: Uuid) -> anyhow::Result<bool> {
        Err(anyhow::anyhow!("connection refused"))
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("connection refused"))
    }
}
