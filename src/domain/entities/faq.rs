use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

const MAX_QUESTION_LENGTH: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum FaqCategory {
    General,
    Membership,
    Events,
    Technical,
    Segments,
}

impl FaqCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FaqCategory::General => "general",
            FaqCategory::Membership => "membership",
            FaqCategory::Events => "events",
            FaqCategory::Technical => "technical",
            FaqCategory::Segments => "segments",
        }
    }

    pub fn choices() -> &'static [(&'static str, &'static str)] {
        &[
            ("general", "General"),
            ("membership", "Membership"),
            ("events", "Events"),
            ("technical", "Technical"),
            ("segments", "Segments"),
        ]
    }
}

impl FromStr for FaqCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(FaqCategory::General),
            "membership" => Ok(FaqCategory::Membership),
            "events" => Ok(FaqCategory::Events),
            "technical" => Ok(FaqCategory::Technical),
            "segments" => Ok(FaqCategory::Segments),
            _ => Err(format!("unknown faq category: {}", s)),
        }
    }
}

// ───── Database & API Model ─────────────────────────────────────────

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Faq {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub category: FaqCategory,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public FAQ listing with the categories currently in use.
#[derive(Debug, Serialize)]
pub struct FaqListResponse {
    pub faqs: crate::entities::pagination::Paginated<Faq>,
    pub categories: Vec<String>,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewFaqRequest {
    #[validate(length(min = 1, max = MAX_QUESTION_LENGTH))]
    pub question: String,

    #[validate(length(min = 1))]
    pub answer: String,

    #[serde(default = "default_category")]
    pub category: FaqCategory,

    #[serde(default)]
    pub display_order: i32,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_category() -> FaqCategory {
    FaqCategory::General
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateFaqRequest {
    #[validate(length(min = 1, max = MAX_QUESTION_LENGTH))]
    pub question: Option<String>,

    #[validate(length(min = 1))]
    pub answer: Option<String>,

    pub category: Option<FaqCategory>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}
