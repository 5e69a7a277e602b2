use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Announcement {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    /// Display name of the authoring teacher, captured at creation.
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Row to insert; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewAnnouncement {
    pub title: String,
    pub message: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub message: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Partial update. An omitted field and an explicit `null` both mean "leave as is".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAnnouncementRequest {
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl UpdateAnnouncementRequest {
    pub fn is_empty(&self) -> bool {
        self.is_active.is_none() && self.title.is_none() && self.message.is_none()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListAnnouncementsQuery {
    #[serde(default, deserialize_with = "query_bool")]
    pub active_only: bool,
}

/// Query-string boolean: `true/false`, `1/0`, `yes/no`, `on/off`, any case.
fn query_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(serde::de::Error::custom(format!("invalid boolean: {raw}"))),
    }
}
