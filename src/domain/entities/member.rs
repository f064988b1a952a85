use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;
use validator::Validate;

use crate::entities::{list_field::ListField, patch_field::PatchField};

const MAX_NAME_LENGTH: u64 = 255;
const MAX_ROLE_LENGTH: u64 = 255;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, sqlx::FromRow)]
pub struct MemberRow {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub position: String,
    pub email: String,
    pub bio: String,
    pub photo: Option<String>,
    pub skills: Json<ListField>,
    pub join_date: Option<NaiveDate>,
    pub segment_id: Option<Uuid>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub position: String,
    pub email: String,
    pub bio: String,
    pub photo: Option<String>,
    pub skills: Vec<String>,
    pub join_date: Option<NaiveDate>,
    pub segment_id: Option<Uuid>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MemberRow> for Member {
    fn from(row: MemberRow) -> Self {
        Member {
            id: row.id,
            name: row.name,
            role: row.role,
            position: row.position,
            email: row.email,
            bio: row.bio,
            photo: row.photo,
            skills: row.skills.items(),
            join_date: row.join_date,
            segment_id: row.segment_id,
            display_order: row.display_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewMemberRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    #[validate(length(min = 1, max = MAX_ROLE_LENGTH))]
    pub role: String,

    #[serde(default)]
    pub position: String,

    #[validate(email)]
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub bio: String,

    #[serde(default)]
    pub photo: Option<String>,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub join_date: Option<NaiveDate>,

    #[serde(default)]
    pub segment_id: Option<Uuid>,

    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateMemberRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = MAX_ROLE_LENGTH))]
    pub role: Option<String>,

    pub position: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    pub bio: Option<String>,
    pub photo: PatchField<String>,
    pub skills: Option<Vec<String>>,
    pub join_date: PatchField<NaiveDate>,
    pub segment_id: PatchField<Uuid>,
    pub display_order: Option<i32>,
}

/// Ordering for member listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberOrder {
    /// `display_order` ascending, then name.
    Display,
    /// Most recently added first.
    Newest,
}
