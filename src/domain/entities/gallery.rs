use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

const MAX_CAPTION_LENGTH: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum GalleryCategory {
    Event,
    Meeting,
    Project,
    Workshop,
    Competition,
    General,
}

impl GalleryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryCategory::Event => "event",
            GalleryCategory::Meeting => "meeting",
            GalleryCategory::Project => "project",
            GalleryCategory::Workshop => "workshop",
            GalleryCategory::Competition => "competition",
            GalleryCategory::General => "general",
        }
    }

    pub fn choices() -> &'static [(&'static str, &'static str)] {
        &[
            ("event", "Event"),
            ("meeting", "Meeting"),
            ("project", "Project"),
            ("workshop", "Workshop"),
            ("competition", "Competition"),
            ("general", "General"),
        ]
    }
}

impl FromStr for GalleryCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "event" => Ok(GalleryCategory::Event),
            "meeting" => Ok(GalleryCategory::Meeting),
            "project" => Ok(GalleryCategory::Project),
            "workshop" => Ok(GalleryCategory::Workshop),
            "competition" => Ok(GalleryCategory::Competition),
            "general" => Ok(GalleryCategory::General),
            _ => Err(format!("unknown gallery category: {}", s)),
        }
    }
}

// ───── Database & API Model ─────────────────────────────────────────

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct GalleryPhoto {
    pub id: Uuid,
    pub image: String,
    pub caption: String,
    pub category: GalleryCategory,
    pub uploaded_at: DateTime<Utc>,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewGalleryPhotoRequest {
    #[validate(length(min = 1))]
    pub image: String,

    #[validate(length(max = MAX_CAPTION_LENGTH))]
    #[serde(default)]
    pub caption: String,

    #[serde(default = "default_category")]
    pub category: GalleryCategory,
}

fn default_category() -> GalleryCategory {
    GalleryCategory::General
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateGalleryPhotoRequest {
    #[validate(length(min = 1))]
    pub image: Option<String>,

    #[validate(length(max = MAX_CAPTION_LENGTH))]
    pub caption: Option<String>,

    pub category: Option<GalleryCategory>,
}
