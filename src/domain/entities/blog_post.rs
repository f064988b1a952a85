use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::{list_field::split_csv, patch_field::PatchField};

const MIN_TITLE_LENGTH: u64 = 3;
const MAX_TITLE_LENGTH: u64 = 255;
const MAX_SLUG_LENGTH: u64 = 255;
const MAX_EXCERPT_LENGTH: u64 = 500;
const MAX_TAGS_LENGTH: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum BlogStatus {
    Draft,
    Published,
    Archived,
}

impl BlogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlogStatus::Draft => "draft",
            BlogStatus::Published => "published",
            BlogStatus::Archived => "archived",
        }
    }

    pub fn choices() -> &'static [(&'static str, &'static str)] {
        &[
            ("draft", "Draft"),
            ("published", "Published"),
            ("archived", "Archived"),
        ]
    }
}

impl FromStr for BlogStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(BlogStatus::Draft),
            "published" => Ok(BlogStatus::Published),
            "archived" => Ok(BlogStatus::Archived),
            _ => Err(format!("unknown blog status: {}", s)),
        }
    }
}

// ───── Database Models ───────────────────────────────────────────────

/// Row shape shared by every blog query. `author_username` comes from a
/// join against `users`.
#[derive(Debug, sqlx::FromRow)]
pub struct BlogPostRow {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub author_id: Uuid,
    pub author_username: Option<String>,
    pub status: BlogStatus,
    pub tags: String,
    pub featured_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Validate)]
pub struct BlogPostInsert {
    #[validate(length(min = MIN_TITLE_LENGTH, max = MAX_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_SLUG_LENGTH))]
    pub slug: String,

    #[validate(length(min = 1))]
    pub content: String,

    #[validate(length(max = MAX_EXCERPT_LENGTH))]
    pub excerpt: String,

    pub author_id: Uuid,
    pub status: BlogStatus,

    #[validate(length(max = MAX_TAGS_LENGTH))]
    pub tags: String,

    pub featured_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub author_id: Uuid,
    pub author_username: Option<String>,
    pub status: BlogStatus,
    pub tags: Vec<String>,
    pub featured_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BlogPostRow> for BlogPost {
    fn from(row: BlogPostRow) -> Self {
        BlogPost {
            id: row.id,
            title: row.title,
            slug: row.slug,
            content: row.content,
            excerpt: row.excerpt,
            author_id: row.author_id,
            author_username: row.author_username,
            status: row.status,
            tags: split_csv(&row.tags),
            featured_image: row.featured_image,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Published post detail with a handful of other recent posts.
#[derive(Debug, Serialize)]
pub struct BlogPostDetail {
    #[serde(flatten)]
    pub post: BlogPost,
    pub related_posts: Vec<BlogPost>,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewBlogPostRequest {
    #[validate(length(min = MIN_TITLE_LENGTH, max = MAX_TITLE_LENGTH))]
    pub title: String,

    /// Generated from the title when absent.
    #[validate(length(min = 1, max = MAX_SLUG_LENGTH))]
    #[serde(default)]
    pub slug: Option<String>,

    #[validate(length(min = 1))]
    pub content: String,

    #[validate(length(max = MAX_EXCERPT_LENGTH))]
    #[serde(default)]
    pub excerpt: String,

    #[serde(default = "default_status")]
    pub status: BlogStatus,

    #[validate(length(max = MAX_TAGS_LENGTH))]
    #[serde(default)]
    pub tags: String,

    #[serde(default)]
    pub featured_image: Option<String>,

    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

fn default_status() -> BlogStatus {
    BlogStatus::Draft
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateBlogPostRequest {
    #[validate(length(min = MIN_TITLE_LENGTH, max = MAX_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = MAX_SLUG_LENGTH))]
    pub slug: Option<String>,

    #[validate(length(min = 1))]
    pub content: Option<String>,

    #[validate(length(max = MAX_EXCERPT_LENGTH))]
    pub excerpt: Option<String>,

    pub status: Option<BlogStatus>,

    #[validate(length(max = MAX_TAGS_LENGTH))]
    pub tags: Option<String>,

    pub featured_image: PatchField<String>,
    pub published_at: PatchField<DateTime<Utc>>,
}

/// Ordering for blog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogOrder {
    /// Publication recency, unpublished rows last.
    PublishedDesc,
    /// Creation recency. Used for the admin listing.
    CreatedDesc,
}
