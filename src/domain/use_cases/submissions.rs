use tracing::instrument;
use validator::Validate;

use crate::entities::application::{ApplicationReceived, NewApplicationRequest};
use crate::entities::contact::{ContactReceived, NewContactRequest};
use crate::entities::newsletter::{NewsletterSignup, SubscribeAck};
use crate::errors::AppError;
use crate::repositories::application::ApplicationRepository;
use crate::repositories::contact::ContactRepository;
use crate::repositories::newsletter::NewsletterRepository;

/// Public intake for the three unauthenticated submission forms.
pub struct SubmissionsHandler<C, N, A>
where
    C: ContactRepository,
    N: NewsletterRepository,
    A: ApplicationRepository,
{
    pub contact_repo: C,
    pub newsletter_repo: N,
    pub application_repo: A,
}

impl<C, N, A> SubmissionsHandler<C, N, A>
where
    C: ContactRepository,
    N: NewsletterRepository,
    A: ApplicationRepository,
{
    pub fn new(contact_repo: C, newsletter_repo: N, application_repo: A) -> Self {
        SubmissionsHandler {
            contact_repo,
            newsletter_repo,
            application_repo,
        }
    }

    #[instrument(skip(self, request), fields(subject = ?request.subject))]
    pub async fn submit_contact(
        &self,
        request: NewContactRequest,
    ) -> Result<ContactReceived, AppError> {
        request.validate()?;
        let submission = self.contact_repo.create_submission(&request).await?;
        tracing::info!(id = %submission.id, "Contact submission stored");
        Ok(ContactReceived {
            id: submission.id,
            message: "Your message has been sent successfully! We will get back to you soon."
                .to_string(),
        })
    }

    #[instrument(skip(self, request))]
    pub async fn subscribe(&self, request: NewsletterSignup) -> Result<SubscribeAck, AppError> {
        request.validate()?;
        let outcome = self.newsletter_repo.subscribe(&request.email).await?;
        Ok(SubscribeAck::from(outcome))
    }

    #[instrument(skip(self, request))]
    pub async fn apply(
        &self,
        request: NewApplicationRequest,
    ) -> Result<ApplicationReceived, AppError> {
        request.validate()?;
        let application = self.application_repo.create_application(&request).await?;
        tracing::info!(id = %application.id, "Membership application stored");
        Ok(ApplicationReceived {
            id: application.id,
            message:
                "Your application has been submitted successfully! We will review it and get back to you."
                    .to_string(),
        })
    }
}
