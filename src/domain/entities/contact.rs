use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

const MAX_NAME_LENGTH: u64 = 255;
const MAX_MESSAGE_LENGTH: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum ContactSubject {
    General,
    Membership,
    Collaboration,
    Technical,
    Feedback,
    Other,
}

impl ContactSubject {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactSubject::General => "general",
            ContactSubject::Membership => "membership",
            ContactSubject::Collaboration => "collaboration",
            ContactSubject::Technical => "technical",
            ContactSubject::Feedback => "feedback",
            ContactSubject::Other => "other",
        }
    }

    pub fn choices() -> &'static [(&'static str, &'static str)] {
        &[
            ("general", "General Inquiry"),
            ("membership", "Membership"),
            ("collaboration", "Collaboration"),
            ("technical", "Technical Support"),
            ("feedback", "Feedback"),
            ("other", "Other"),
        ]
    }
}

impl FromStr for ContactSubject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(ContactSubject::General),
            "membership" => Ok(ContactSubject::Membership),
            "collaboration" => Ok(ContactSubject::Collaboration),
            "technical" => Ok(ContactSubject::Technical),
            "feedback" => Ok(ContactSubject::Feedback),
            "other" => Ok(ContactSubject::Other),
            _ => Err(format!("unknown contact subject: {}", s)),
        }
    }
}

// ───── Database & API Model ─────────────────────────────────────────

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: ContactSubject,
    pub message: String,
    pub is_read: bool,
    pub admin_notes: String,
    pub created_at: DateTime<Utc>,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewContactRequest {
    #[validate(length(min = 2, max = MAX_NAME_LENGTH))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[serde(default = "default_subject")]
    pub subject: ContactSubject,

    #[validate(length(min = 5, max = MAX_MESSAGE_LENGTH))]
    pub message: String,
}

fn default_subject() -> ContactSubject {
    ContactSubject::General
}

/// Admin note update for a submission.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactNotesRequest {
    #[validate(length(max = MAX_MESSAGE_LENGTH))]
    pub admin_notes: String,
}

/// Read flag toggle, both directions allowed.
#[derive(Debug, Deserialize)]
pub struct ContactReadRequest {
    pub is_read: bool,
}

#[derive(Debug, Serialize)]
pub struct ContactReceived {
    pub id: Uuid,
    pub message: String,
}
