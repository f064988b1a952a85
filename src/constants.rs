use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

// Public listing page sizes.
pub const SEGMENTS_PER_PAGE: u32 = 12;
pub const MEMBERS_PER_PAGE: u32 = 20;
pub const ACHIEVEMENTS_PER_PAGE: u32 = 12;
pub const GALLERY_PER_PAGE: u32 = 20;
pub const EVENTS_PER_PAGE: u32 = 12;
pub const BLOG_POSTS_PER_PAGE: u32 = 10;
pub const PROJECTS_PER_PAGE: u32 = 12;
pub const RESOURCES_PER_PAGE: u32 = 20;
pub const FAQS_PER_PAGE: u32 = 20;

// Admin listing page size for submissions and subscribers.
pub const ADMIN_PER_PAGE: u32 = 20;

// Per-category cap on search hits.
pub const SEARCH_RESULT_CAP: u32 = 10;

// Home page aggregate sizes.
pub const HOME_SEGMENTS: u32 = 6;
pub const HOME_RECENT_POSTS: u32 = 3;
pub const HOME_UPCOMING_EVENTS: u32 = 3;
pub const HOME_FEATURED_PROJECTS: u32 = 3;

// Related item counts on detail pages.
pub const RELATED_ITEMS: u32 = 3;

// Featured resources shown alongside the resource listing.
pub const FEATURED_RESOURCES: u32 = 5;

// Recent rows shown on the admin dashboard.
pub const DASHBOARD_RECENT: u32 = 5;
