use std::path::PathBuf;

mod domain;
mod infrastructure;
mod interfaces;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;
pub mod shared_repos;

pub use domain::{entities, schema, use_cases};
pub use infrastructure::{auth, db, utils};
pub use interfaces::{handlers, middlewares, repositories, routes};

use auth::jwt::JwtService;
use repositories::sqlx_repo::{
    SqlxApplicationRepo, SqlxBlogPostRepo, SqlxContactRepo, SqlxNewsletterRepo, SqlxResourceRepo,
    SqlxSearchRepo, SqlxUserRepo,
};
use shared_repos::SharedRepositories;
use use_cases::auth::AuthHandler;
use use_cases::blog::BlogPostHandler;
use use_cases::downloads::DownloadsHandler;
use use_cases::review::ReviewHandler;
use use_cases::search::SearchHandler;
use use_cases::submissions::SubmissionsHandler;

pub type AppAuthHandler = AuthHandler<SqlxUserRepo>;
pub type AppBlogHandler = BlogPostHandler<SqlxBlogPostRepo>;
pub type AppSubmissionsHandler =
    SubmissionsHandler<SqlxContactRepo, SqlxNewsletterRepo, SqlxApplicationRepo>;
pub type AppReviewHandler = ReviewHandler<SqlxApplicationRepo>;
pub type AppDownloadsHandler = DownloadsHandler<SqlxResourceRepo>;
pub type AppSearchHandler = SearchHandler<SqlxSearchRepo>;

pub struct AppState {
    pub repos: SharedRepositories,
    pub auth_handler: AppAuthHandler,
    pub blog_handler: AppBlogHandler,
    pub submissions_handler: AppSubmissionsHandler,
    pub review_handler: AppReviewHandler,
    pub downloads_handler: AppDownloadsHandler,
    pub search_handler: AppSearchHandler,
    pub jwt_service: JwtService,
    pub media_root: PathBuf,
    pub base_url: String,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let jwt_service = JwtService::new(config);

        let auth_handler = AuthHandler::new(
            SqlxUserRepo::new(pool.clone()),
            jwt_service.clone(),
        );
        let blog_handler = BlogPostHandler::new(SqlxBlogPostRepo::new(pool.clone()));
        let submissions_handler = SubmissionsHandler::new(
            SqlxContactRepo::new(pool.clone()),
            SqlxNewsletterRepo::new(pool.clone()),
            SqlxApplicationRepo::new(pool.clone()),
        );
        let review_handler = ReviewHandler::new(SqlxApplicationRepo::new(pool.clone()));
        let downloads_handler = DownloadsHandler::new(SqlxResourceRepo::new(pool.clone()));
        let search_handler = SearchHandler::new(SqlxSearchRepo::new(pool.clone()));

        AppState {
            repos: SharedRepositories::new(pool),
            auth_handler,
            blog_handler,
            submissions_handler,
            review_handler,
            downloads_handler,
            search_handler,
            jwt_service,
            media_root: PathBuf::from(&config.media_root),
            base_url: config.base_url(),
        }
    }
}
