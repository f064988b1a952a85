use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;
use validator::Validate;

use crate::entities::{list_field::ListField, patch_field::PatchField};

const MAX_TITLE_LENGTH: u64 = 255;
const MAX_DESCRIPTION_LENGTH: u64 = 1000;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, sqlx::FromRow)]
pub struct SegmentRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub photo: Option<String>,
    pub founded: String,
    pub activities: Json<ListField>,
    pub vision: String,
    pub mission: String,
    pub achievements: Json<ListField>,
    pub contact: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Segment {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub photo: Option<String>,
    pub founded: String,
    pub activities: Vec<String>,
    pub vision: String,
    pub mission: String,
    pub achievements: Vec<String>,
    pub contact: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SegmentRow> for Segment {
    fn from(row: SegmentRow) -> Self {
        Segment {
            id: row.id,
            title: row.title,
            description: row.description,
            icon: row.icon,
            photo: row.photo,
            founded: row.founded,
            activities: row.activities.items(),
            vision: row.vision,
            mission: row.mission,
            achievements: row.achievements.items(),
            contact: row.contact,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Segment detail with its member roster.
#[derive(Debug, Serialize)]
pub struct SegmentDetail {
    #[serde(flatten)]
    pub segment: Segment,
    pub members: Vec<crate::entities::member::Member>,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewSegmentRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH))]
    pub description: String,

    #[serde(default)]
    pub icon: String,

    #[serde(default)]
    pub photo: Option<String>,

    #[serde(default)]
    pub founded: String,

    #[serde(default)]
    pub activities: Vec<String>,

    #[serde(default)]
    pub vision: String,

    #[serde(default)]
    pub mission: String,

    #[serde(default)]
    pub achievements: Vec<String>,

    #[serde(default)]
    pub contact: String,
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateSegmentRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    pub icon: Option<String>,
    pub photo: PatchField<String>,
    pub founded: Option<String>,
    pub activities: Option<Vec<String>>,
    pub vision: Option<String>,
    pub mission: Option<String>,
    pub achievements: Option<Vec<String>>,
    pub contact: Option<String>,
}
