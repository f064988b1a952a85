use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::patch_field::PatchField;

const MAX_TITLE_LENGTH: u64 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum AchievementCategory {
    Academic,
    Competition,
    Project,
    Recognition,
    Event,
    Other,
}

impl AchievementCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementCategory::Academic => "academic",
            AchievementCategory::Competition => "competition",
            AchievementCategory::Project => "project",
            AchievementCategory::Recognition => "recognition",
            AchievementCategory::Event => "event",
            AchievementCategory::Other => "other",
        }
    }

    pub fn choices() -> &'static [(&'static str, &'static str)] {
        &[
            ("academic", "Academic"),
            ("competition", "Competition"),
            ("project", "Project"),
            ("recognition", "Recognition"),
            ("event", "Event"),
            ("other", "Other"),
        ]
    }
}

impl FromStr for AchievementCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "academic" => Ok(AchievementCategory::Academic),
            "competition" => Ok(AchievementCategory::Competition),
            "project" => Ok(AchievementCategory::Project),
            "recognition" => Ok(AchievementCategory::Recognition),
            "event" => Ok(AchievementCategory::Event),
            "other" => Ok(AchievementCategory::Other),
            _ => Err(format!("unknown achievement category: {}", s)),
        }
    }
}

// ───── Database & API Model ─────────────────────────────────────────

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Achievement {
    pub id: Uuid,
    pub title: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub image: Option<String>,
    pub category: AchievementCategory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewAchievementRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: String,

    pub date: DateTime<Utc>,

    #[validate(length(min = 1))]
    pub description: String,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default = "default_category")]
    pub category: AchievementCategory,
}

fn default_category() -> AchievementCategory {
    AchievementCategory::Other
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateAchievementRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: Option<String>,

    pub date: Option<DateTime<Utc>>,

    #[validate(length(min = 1))]
    pub description: Option<String>,

    pub image: PatchField<String>,
    pub category: Option<AchievementCategory>,
}

/// Ordering for achievement listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementOrder {
    /// Achievement date, most recent first.
    DateDesc,
    /// Most recently recorded first.
    Newest,
}
