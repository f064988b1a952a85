pub mod achievement;
pub mod application;
pub mod blog_post;
pub mod contact;
pub mod event;
pub mod faq;
pub mod gallery;
pub mod list_field;
pub mod member;
pub mod newsletter;
pub mod pagination;
pub mod patch_field;
pub mod project;
pub mod resource;
pub mod search;
pub mod segment;
pub mod token;
pub mod user;
