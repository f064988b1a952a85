use crate::repositories::sqlx_repo::{
    SqlxAchievementRepo, SqlxApplicationRepo, SqlxContactRepo, SqlxDashboardRepo, SqlxEventRepo,
    SqlxFaqRepo, SqlxGalleryRepo, SqlxMemberRepo, SqlxNewsletterRepo, SqlxProjectRepo,
    SqlxResourceRepo, SqlxSegmentRepo, SqlxSitemapRepo,
};

/// One instance of every repository the handlers reach directly. The
/// use-case handlers own their own copies.
#[derive(Clone)]
pub struct SharedRepositories {
    pub segments: SqlxSegmentRepo,
    pub members: SqlxMemberRepo,
    pub achievements: SqlxAchievementRepo,
    pub gallery: SqlxGalleryRepo,
    pub events: SqlxEventRepo,
    pub faqs: SqlxFaqRepo,
    pub projects: SqlxProjectRepo,
    pub resources: SqlxResourceRepo,
    pub contacts: SqlxContactRepo,
    pub applications: SqlxApplicationRepo,
    pub newsletter: SqlxNewsletterRepo,
    pub dashboard: SqlxDashboardRepo,
    pub sitemap: SqlxSitemapRepo,
}

impl SharedRepositories {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SharedRepositories {
            segments: SqlxSegmentRepo::new(pool.clone()),
            members: SqlxMemberRepo::new(pool.clone()),
            achievements: SqlxAchievementRepo::new(pool.clone()),
            gallery: SqlxGalleryRepo::new(pool.clone()),
            events: SqlxEventRepo::new(pool.clone()),
            faqs: SqlxFaqRepo::new(pool.clone()),
            projects: SqlxProjectRepo::new(pool.clone()),
            resources: SqlxResourceRepo::new(pool.clone()),
            contacts: SqlxContactRepo::new(pool.clone()),
            applications: SqlxApplicationRepo::new(pool.clone()),
            newsletter: SqlxNewsletterRepo::new(pool.clone()),
            dashboard: SqlxDashboardRepo::new(pool.clone()),
            sitemap: SqlxSitemapRepo::new(pool),
        }
    }
}
