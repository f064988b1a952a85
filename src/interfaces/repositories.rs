pub mod achievement;
pub mod application;
pub mod blog_post;
pub mod contact;
pub mod dashboard;
pub mod event;
pub mod faq;
pub mod gallery;
pub mod member;
pub mod newsletter;
pub mod project;
pub mod resource;
pub mod search;
pub mod segment;
pub mod sitemap;
pub mod sqlx_repo;
pub mod user;
