use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::patch_field::PatchField;

const MAX_TITLE_LENGTH: u64 = 255;
const MAX_LOCATION_LENGTH: u64 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        }
    }

    pub fn choices() -> &'static [(&'static str, &'static str)] {
        &[
            ("upcoming", "Upcoming"),
            ("ongoing", "Ongoing"),
            ("completed", "Completed"),
            ("cancelled", "Cancelled"),
        ]
    }
}

impl FromStr for EventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(EventStatus::Upcoming),
            "ongoing" => Ok(EventStatus::Ongoing),
            "completed" => Ok(EventStatus::Completed),
            "cancelled" => Ok(EventStatus::Cancelled),
            _ => Err(format!("unknown event status: {}", s)),
        }
    }
}

// ───── Database & API Model ─────────────────────────────────────────

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub status: EventStatus,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewEventRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = 1))]
    pub description: String,

    pub date: DateTime<Utc>,

    #[validate(length(max = MAX_LOCATION_LENGTH))]
    #[serde(default)]
    pub location: String,

    #[serde(default = "default_status")]
    pub status: EventStatus,

    #[serde(default)]
    pub image: Option<String>,
}

fn default_status() -> EventStatus {
    EventStatus::Upcoming
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(length(min = 1))]
    pub description: Option<String>,

    pub date: Option<DateTime<Utc>>,

    #[validate(length(max = MAX_LOCATION_LENGTH))]
    pub location: Option<String>,

    pub status: Option<EventStatus>,
    pub image: PatchField<String>,
}

/// Ordering for event listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOrder {
    /// Event date, most recent first.
    DateDesc,
    /// Event date, soonest first. Used for upcoming views.
    DateAsc,
}
