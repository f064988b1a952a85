use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

const MAX_NAME_LENGTH: u64 = 255;
const MAX_PHONE_LENGTH: u64 = 20;
const MAX_STUDENT_ID_LENGTH: u64 = 50;
const MAX_DEPARTMENT_LENGTH: u64 = 100;
const MAX_YEAR_LENGTH: u64 = 20;
const MAX_LANGUAGES_LENGTH: u64 = 500;
const MAX_EXPERIENCE_LENGTH: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
    Interview,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Interview => "interview",
        }
    }

    pub fn choices() -> &'static [(&'static str, &'static str)] {
        &[
            ("pending", "Pending Review"),
            ("approved", "Approved"),
            ("rejected", "Rejected"),
            ("interview", "Interview Scheduled"),
        ]
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "approved" => Ok(ApplicationStatus::Approved),
            "rejected" => Ok(ApplicationStatus::Rejected),
            "interview" => Ok(ApplicationStatus::Interview),
            _ => Err(format!("unknown application status: {}", s)),
        }
    }
}

// ───── Database & API Model ─────────────────────────────────────────

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct MembershipApplication {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub student_id: String,
    pub department: String,
    pub year_of_study: String,
    pub interested_segment_id: Option<Uuid>,
    pub programming_languages: String,
    pub experience_level: String,
    pub motivation: String,
    pub expectations: String,
    pub status: ApplicationStatus,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_by: Option<Uuid>,
    pub review_notes: String,
    pub reviewed_at: Option<DateTime<Utc>>,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewApplicationRequest {
    #[validate(length(min = 2, max = MAX_NAME_LENGTH))]
    pub full_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(max = MAX_PHONE_LENGTH))]
    #[serde(default)]
    pub phone: String,

    #[validate(length(max = MAX_STUDENT_ID_LENGTH))]
    #[serde(default)]
    pub student_id: String,

    #[validate(length(min = 1, max = MAX_DEPARTMENT_LENGTH))]
    pub department: String,

    #[validate(length(min = 1, max = MAX_YEAR_LENGTH))]
    pub year_of_study: String,

    #[serde(default)]
    pub interested_segment_id: Option<Uuid>,

    #[validate(length(max = MAX_LANGUAGES_LENGTH))]
    #[serde(default)]
    pub programming_languages: String,

    #[validate(length(max = MAX_EXPERIENCE_LENGTH))]
    #[serde(default)]
    pub experience_level: String,

    #[validate(length(min = 1))]
    pub motivation: String,

    #[validate(length(min = 1))]
    pub expectations: String,
}

#[derive(Debug, Serialize)]
pub struct ApplicationReceived {
    pub id: Uuid,
    pub message: String,
}

/// Admin review action. The reviewer stamp is derived server side.
#[derive(Debug, Deserialize, Validate)]
pub struct ReviewApplicationRequest {
    pub status: ApplicationStatus,

    #[serde(default)]
    pub review_notes: Option<String>,
}
