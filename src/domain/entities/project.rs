use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::{list_field::split_csv, member::Member, patch_field::PatchField};

const MAX_TITLE_LENGTH: u64 = 255;
const MAX_TECHNOLOGIES_LENGTH: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planning,
    Development,
    Completed,
    OnHold,
    Cancelled,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::Development => "development",
            ProjectStatus::Completed => "completed",
            ProjectStatus::OnHold => "on_hold",
            ProjectStatus::Cancelled => "cancelled",
        }
    }

    pub fn choices() -> &'static [(&'static str, &'static str)] {
        &[
            ("planning", "Planning"),
            ("development", "In Development"),
            ("completed", "Completed"),
            ("on_hold", "On Hold"),
            ("cancelled", "Cancelled"),
        ]
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planning" => Ok(ProjectStatus::Planning),
            "development" => Ok(ProjectStatus::Development),
            "completed" => Ok(ProjectStatus::Completed),
            "on_hold" => Ok(ProjectStatus::OnHold),
            "cancelled" => Ok(ProjectStatus::Cancelled),
            _ => Err(format!("unknown project status: {}", s)),
        }
    }
}

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, sqlx::FromRow)]
pub struct ProjectRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub github_url: Option<String>,
    pub live_demo_url: Option<String>,
    pub image: Option<String>,
    pub status: ProjectStatus,
    pub segment_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub completion_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_demo_url: Option<String>,
    pub image: Option<String>,
    pub status: ProjectStatus,
    pub segment_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub completion_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            title: row.title,
            description: row.description,
            technologies: split_csv(&row.technologies),
            github_url: row.github_url,
            live_demo_url: row.live_demo_url,
            image: row.image,
            status: row.status,
            segment_id: row.segment_id,
            start_date: row.start_date,
            completion_date: row.completion_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Project detail with its team resolved and a few other projects from
/// the same segment.
#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub team_members: Vec<Member>,
    pub related_projects: Vec<Project>,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewProjectRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = 1))]
    pub description: String,

    #[validate(length(max = MAX_TECHNOLOGIES_LENGTH))]
    #[serde(default)]
    pub technologies: String,

    #[validate(url)]
    #[serde(default)]
    pub github_url: Option<String>,

    #[validate(url)]
    #[serde(default)]
    pub live_demo_url: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default = "default_status")]
    pub status: ProjectStatus,

    #[serde(default)]
    pub segment_id: Option<Uuid>,

    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    #[serde(default)]
    pub completion_date: Option<NaiveDate>,

    /// Member ids to attach to the project team.
    #[serde(default)]
    pub team_member_ids: Vec<Uuid>,
}

fn default_status() -> ProjectStatus {
    ProjectStatus::Planning
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(length(min = 1))]
    pub description: Option<String>,

    #[validate(length(max = MAX_TECHNOLOGIES_LENGTH))]
    pub technologies: Option<String>,

    pub github_url: PatchField<String>,
    pub live_demo_url: PatchField<String>,
    pub image: PatchField<String>,
    pub status: Option<ProjectStatus>,
    pub segment_id: PatchField<Uuid>,
    pub start_date: PatchField<NaiveDate>,
    pub completion_date: PatchField<NaiveDate>,

    /// Replaces the whole team when present.
    pub team_member_ids: Option<Vec<Uuid>>,
}
