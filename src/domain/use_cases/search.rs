use tracing::instrument;

use crate::constants::SEARCH_RESULT_CAP;
use crate::entities::search::{SearchCategory, SearchResults};
use crate::errors::AppError;
use crate::repositories::search::SearchRepository;

/// Keyword search across the public content types. `All` fans out to
/// one capped query per category; a single category runs just its own.
pub struct SearchHandler<R>
where
    R: SearchRepository,
{
    pub search_repo: R,
}

impl<R> SearchHandler<R>
where
    R: SearchRepository,
{
    pub fn new(search_repo: R) -> Self {
        SearchHandler { search_repo }
    }

    /// A blank query short-circuits to an empty result set without
    /// touching the database.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        query: &str,
        category: SearchCategory,
    ) -> Result<SearchResults, AppError> {
        let q = query.trim();
        if q.is_empty() {
            return Ok(SearchResults::empty(String::new(), category));
        }

        let mut results = SearchResults::empty(q.to_string(), category);
        let cap = SEARCH_RESULT_CAP;

        if matches!(category, SearchCategory::All | SearchCategory::Members) {
            results.members = Some(self.search_repo.search_members(q, cap).await?);
        }
        if matches!(category, SearchCategory::All | SearchCategory::Events) {
            results.events = Some(self.search_repo.search_events(q, cap).await?);
        }
        if matches!(category, SearchCategory::All | SearchCategory::Achievements) {
            results.achievements = Some(self.search_repo.search_achievements(q, cap).await?);
        }
        if matches!(category, SearchCategory::All | SearchCategory::Blog) {
            results.blog_posts = Some(self.search_repo.search_blog_posts(q, cap).await?);
        }
        if matches!(category, SearchCategory::All | SearchCategory::Projects) {
            results.projects = Some(self.search_repo.search_projects(q, cap).await?);
        }
        if matches!(category, SearchCategory::All | SearchCategory::Resources) {
            results.resources = Some(self.search_repo.search_resources(q, cap).await?);
        }

        Ok(results.finalize())
    }
}
