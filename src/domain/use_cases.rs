pub mod auth;
pub mod blog;
pub mod downloads;
pub mod extractors;
pub mod review;
pub mod search;
pub mod submissions;
