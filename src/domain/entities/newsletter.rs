use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// ───── Database & API Model ─────────────────────────────────────────

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Subscriber {
    pub id: Uuid,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Result of a signup attempt. A repeated email is an outcome, not an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Subscribed,
    AlreadySubscribed,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewsletterSignup {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct SubscribeAck {
    pub subscribed: bool,
    pub message: String,
}

impl From<SubscribeOutcome> for SubscribeAck {
    fn from(outcome: SubscribeOutcome) -> Self {
        match outcome {
            SubscribeOutcome::Subscribed => SubscribeAck {
                subscribed: true,
                message: "Successfully subscribed!".to_string(),
            },
            SubscribeOutcome::AlreadySubscribed => SubscribeAck {
                subscribed: false,
                message: "Email already subscribed.".to_string(),
            },
        }
    }
}

/// Admin toggle for a subscriber.
#[derive(Debug, Deserialize)]
pub struct SubscriberActiveRequest {
    pub is_active: bool,
}
