use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::{list_field::split_csv, patch_field::PatchField};

const MAX_TITLE_LENGTH: u64 = 255;
const MAX_TAGS_LENGTH: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum ResourceCategory {
    Tutorial,
    Documentation,
    Template,
    Tool,
    Guide,
    Presentation,
    Other,
}

impl ResourceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCategory::Tutorial => "tutorial",
            ResourceCategory::Documentation => "documentation",
            ResourceCategory::Template => "template",
            ResourceCategory::Tool => "tool",
            ResourceCategory::Guide => "guide",
            ResourceCategory::Presentation => "presentation",
            ResourceCategory::Other => "other",
        }
    }

    pub fn choices() -> &'static [(&'static str, &'static str)] {
        &[
            ("tutorial", "Tutorial"),
            ("documentation", "Documentation"),
            ("template", "Template"),
            ("tool", "Tool"),
            ("guide", "Guide"),
            ("presentation", "Presentation"),
            ("other", "Other"),
        ]
    }
}

impl FromStr for ResourceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tutorial" => Ok(ResourceCategory::Tutorial),
            "documentation" => Ok(ResourceCategory::Documentation),
            "template" => Ok(ResourceCategory::Template),
            "tool" => Ok(ResourceCategory::Tool),
            "guide" => Ok(ResourceCategory::Guide),
            "presentation" => Ok(ResourceCategory::Presentation),
            "other" => Ok(ResourceCategory::Other),
            _ => Err(format!("unknown resource category: {}", s)),
        }
    }
}

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, sqlx::FromRow)]
pub struct ResourceRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: ResourceCategory,
    pub file: Option<String>,
    pub external_url: Option<String>,
    pub tags: String,
    pub downloads: i32,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Where a counted download should be sent. `file` wins when both
/// targets are set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadTarget {
    File(String),
    ExternalUrl(String),
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Resource {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: ResourceCategory,
    pub file: Option<String>,
    pub external_url: Option<String>,
    pub tags: Vec<String>,
    pub downloads: i32,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ResourceRow> for Resource {
    fn from(row: ResourceRow) -> Self {
        Resource {
            id: row.id,
            title: row.title,
            description: row.description,
            category: row.category,
            file: row.file,
            external_url: row.external_url,
            tags: split_csv(&row.tags),
            downloads: row.downloads,
            is_featured: row.is_featured,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Resource listing plus the featured picks shown alongside it.
#[derive(Debug, Serialize)]
pub struct ResourceListResponse {
    pub resources: crate::entities::pagination::Paginated<Resource>,
    pub featured: Vec<Resource>,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewResourceRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = 1))]
    pub description: String,

    #[serde(default = "default_category")]
    pub category: ResourceCategory,

    #[serde(default)]
    pub file: Option<String>,

    #[validate(url)]
    #[serde(default)]
    pub external_url: Option<String>,

    #[validate(length(max = MAX_TAGS_LENGTH))]
    #[serde(default)]
    pub tags: String,

    #[serde(default)]
    pub is_featured: bool,
}

fn default_category() -> ResourceCategory {
    ResourceCategory::Other
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateResourceRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(length(min = 1))]
    pub description: Option<String>,

    pub category: Option<ResourceCategory>,
    pub file: PatchField<String>,
    pub external_url: PatchField<String>,

    #[validate(length(max = MAX_TAGS_LENGTH))]
    pub tags: Option<String>,

    pub is_featured: Option<bool>,
}
