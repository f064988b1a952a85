use tracing::instrument;
use uuid::Uuid;

use crate::entities::resource::DownloadTarget;
use crate::errors::AppError;
use crate::repositories::resource::ResourceRepository;

/// Download accounting for resources. The counter increments exactly
/// when a target is handed out.
pub struct DownloadsHandler<R>
where
    R: ResourceRepository,
{
    pub resource_repo: R,
}

impl<R> DownloadsHandler<R>
where
    R: ResourceRepository,
{
    pub fn new(resource_repo: R) -> Self {
        DownloadsHandler { resource_repo }
    }

    /// Counts the download and returns where to send the client. A
    /// resource with neither a file nor an external link comes back as
    /// not found and the counter is left untouched.
    #[instrument(skip(self))]
    pub async fn record_download(&self, id: &Uuid) -> Result<DownloadTarget, AppError> {
        match self.resource_repo.record_download(id).await? {
            Some(target) => {
                tracing::info!(resource = %id, "Download counted");
                Ok(target)
            }
            None => Err(AppError::NotFound("Resource not found".to_string())),
        }
    }
}
