use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::entities::application::{
    ApplicationStatus, MembershipApplication, ReviewApplicationRequest,
};
use crate::errors::AppError;
use crate::repositories::application::ApplicationRepository;

/// Review workflow for membership applications. The reviewer identity
/// and timestamp are stamped on the first move away from pending and
/// kept through every later transition.
pub struct ReviewHandler<A>
where
    A: ApplicationRepository,
{
    pub application_repo: A,
}

impl<A> ReviewHandler<A>
where
    A: ApplicationRepository,
{
    pub fn new(application_repo: A) -> Self {
        ReviewHandler { application_repo }
    }

    #[instrument(skip(self, request), fields(status = ?request.status))]
    pub async fn review_application(
        &self,
        id: &Uuid,
        reviewer: Uuid,
        request: ReviewApplicationRequest,
    ) -> Result<MembershipApplication, AppError> {
        request.validate()?;

        let current = self.application_repo.get_application_by_id(id).await?;

        let stamp = current.reviewed_at.is_none() && request.status != ApplicationStatus::Pending;
        let (reviewed_by, reviewed_at) = if stamp {
            (Some(reviewer), Some(Utc::now()))
        } else {
            (None, None)
        };

        let updated = self
            .application_repo
            .update_review(id, request.status, request.review_notes, reviewed_by, reviewed_at)
            .await?;

        tracing::info!(
            id = %updated.id,
            status = updated.status.as_str(),
            "Application reviewed"
        );
        Ok(updated)
    }
}
