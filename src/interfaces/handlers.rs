pub mod achievements;
pub mod admin;
pub mod auth;
pub mod blog_posts;
pub mod events;
pub mod faqs;
pub mod gallery;
pub mod home;
pub mod json_error;
pub mod members;
pub mod projects;
pub mod resources;
pub mod search;
pub mod segments;
pub mod seo;
pub mod submissions;
pub mod system;
