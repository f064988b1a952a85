use chrono::{DateTime, Utc};
use mockall::predicate::eq;
use uuid::Uuid;

use club_backend::{
    entities::{
        application::{ApplicationStatus, MembershipApplication, ReviewApplicationRequest},
        blog_post::{BlogPost, BlogStatus, NewBlogPostRequest, UpdateBlogPostRequest},
        contact::{ContactSubject, ContactSubmission, NewContactRequest},
        member::Member,
        newsletter::{NewsletterSignup, SubscribeOutcome},
        patch_field::PatchField,
        resource::DownloadTarget,
        search::SearchCategory,
    },
    errors::AppError,
    repositories::{
        application::MockApplicationRepository, blog_post::MockBlogPostRepository,
        contact::MockContactRepository, newsletter::MockNewsletterRepository,
        resource::MockResourceRepository, search::MockSearchRepository,
    },
    use_cases::{
        blog::BlogPostHandler, downloads::DownloadsHandler, review::ReviewHandler,
        search::SearchHandler, submissions::SubmissionsHandler,
    },
};

// ───── Fixtures ─────────────────────────────────────────────────────

fn sample_post(status: BlogStatus, published_at: Option<DateTime<Utc>>) -> BlogPost {
    BlogPost {
        id: Uuid::new_v4(),
        title: "Rust for Club Projects".to_string(),
        slug: "rust-for-club-projects".to_string(),
        content: "Long form body".to_string(),
        excerpt: String::new(),
        author_id: Uuid::new_v4(),
        author_username: Some("chiamaka".to_string()),
        status,
        tags: vec!["rust".to_string()],
        featured_image: None,
        published_at,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn sample_application(reviewed_at: Option<DateTime<Utc>>) -> MembershipApplication {
    MembershipApplication {
        id: Uuid::new_v4(),
        full_name: "Ada Obi".to_string(),
        email: "ada@example.com".to_string(),
        phone: String::new(),
        student_id: "CS/2023/041".to_string(),
        department: "Computer Science".to_string(),
        year_of_study: "200".to_string(),
        interested_segment_id: None,
        programming_languages: "Python, Rust".to_string(),
        experience_level: "beginner".to_string(),
        motivation: "Build real things".to_string(),
        expectations: "Mentorship".to_string(),
        status: ApplicationStatus::Pending,
        submitted_at: Utc::now(),
        reviewed_by: reviewed_at.map(|_| Uuid::new_v4()),
        review_notes: String::new(),
        reviewed_at,
    }
}

fn sample_member() -> Member {
    Member {
        id: Uuid::new_v4(),
        name: "Ngozi Eze".to_string(),
        role: "member".to_string(),
        position: "Backend Lead".to_string(),
        email: "ngozi@example.com".to_string(),
        bio: String::new(),
        photo: None,
        skills: vec!["rust".to_string()],
        join_date: None,
        segment_id: None,
        display_order: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn new_post_request(slug: Option<&str>, status: BlogStatus) -> NewBlogPostRequest {
    NewBlogPostRequest {
        title: "Getting Started with Rust".to_string(),
        slug: slug.map(str::to_string),
        content: "Install the toolchain first.".to_string(),
        excerpt: String::new(),
        status,
        tags: String::new(),
        featured_image: None,
        published_at: None,
    }
}

// ───── Blog ─────────────────────────────────────────────────────────

#[tokio::test]
async fn create_derives_the_slug_from_the_title() {
    let mut repo = MockBlogPostRepository::new();
    repo.expect_create_blog_post()
        .withf(|insert| insert.slug == "getting-started-with-rust")
        .returning(|_| Ok(sample_post(BlogStatus::Draft, None)));

    let handler = BlogPostHandler::new(repo);
    let result = handler
        .create_blog_post(Uuid::new_v4(), new_post_request(None, BlogStatus::Draft))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn create_normalizes_a_caller_supplied_slug() {
    let mut repo = MockBlogPostRepository::new();
    repo.expect_create_blog_post()
        .withf(|insert| insert.slug == "my-custom-slug")
        .returning(|_| Ok(sample_post(BlogStatus::Draft, None)));

    let handler = BlogPostHandler::new(repo);
    let result = handler
        .create_blog_post(
            Uuid::new_v4(),
            new_post_request(Some("My Custom Slug"), BlogStatus::Draft),
        )
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn creating_a_published_post_stamps_published_at() {
    let mut repo = MockBlogPostRepository::new();
    repo.expect_create_blog_post()
        .withf(|insert| insert.published_at.is_some())
        .returning(|_| Ok(sample_post(BlogStatus::Published, Some(Utc::now()))));

    let handler = BlogPostHandler::new(repo);
    let result = handler
        .create_blog_post(Uuid::new_v4(), new_post_request(None, BlogStatus::Published))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn creating_a_draft_leaves_published_at_empty() {
    let mut repo = MockBlogPostRepository::new();
    repo.expect_create_blog_post()
        .withf(|insert| insert.published_at.is_none())
        .returning(|_| Ok(sample_post(BlogStatus::Draft, None)));

    let handler = BlogPostHandler::new(repo);
    let result = handler
        .create_blog_post(Uuid::new_v4(), new_post_request(None, BlogStatus::Draft))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn publishing_an_update_stamps_published_at() {
    let id = Uuid::new_v4();

    let mut repo = MockBlogPostRepository::new();
    repo.expect_get_blog_post_by_id()
        .with(eq(id))
        .returning(|_| Ok(sample_post(BlogStatus::Draft, None)));
    repo.expect_update_blog_post()
        .withf(|_, patch| matches!(patch.published_at, PatchField::SetToValue(_)))
        .returning(|_, _| Ok(sample_post(BlogStatus::Published, Some(Utc::now()))));

    let handler = BlogPostHandler::new(repo);
    let request = UpdateBlogPostRequest {
        status: Some(BlogStatus::Published),
        ..Default::default()
    };

    assert!(handler.update_blog_post(&id, request).await.is_ok());
}

#[tokio::test]
async fn an_existing_publication_stamp_is_left_alone() {
    let id = Uuid::new_v4();
    let first_published = Utc::now();

    let mut repo = MockBlogPostRepository::new();
    repo.expect_get_blog_post_by_id()
        .with(eq(id))
        .returning(move |_| Ok(sample_post(BlogStatus::Published, Some(first_published))));
    repo.expect_update_blog_post()
        .withf(|_, patch| matches!(patch.published_at, PatchField::Unchanged))
        .returning(|_, _| Ok(sample_post(BlogStatus::Published, Some(Utc::now()))));

    let handler = BlogPostHandler::new(repo);
    let request = UpdateBlogPostRequest {
        title: Some("Rust for Club Projects, revisited".to_string()),
        ..Default::default()
    };

    assert!(handler.update_blog_post(&id, request).await.is_ok());
}

#[tokio::test]
async fn an_invalid_post_is_rejected_before_storage() {
    let repo = MockBlogPostRepository::new();
    let handler = BlogPostHandler::new(repo);

    let mut request = new_post_request(None, BlogStatus::Draft);
    request.title = "ab".to_string();

    let result = handler.create_blog_post(Uuid::new_v4(), request).await;
    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

// ───── Application review ───────────────────────────────────────────

#[tokio::test]
async fn the_first_review_stamps_reviewer_and_time() {
    let id = Uuid::new_v4();
    let reviewer = Uuid::new_v4();

    let mut repo = MockApplicationRepository::new();
    repo.expect_get_application_by_id()
        .with(eq(id))
        .returning(|_| Ok(sample_application(None)));
    repo.expect_update_review()
        .withf(move |_, status, _, reviewed_by, reviewed_at| {
            *status == ApplicationStatus::Approved
                && *reviewed_by == Some(reviewer)
                && reviewed_at.is_some()
        })
        .returning(|_, status, _, _, reviewed_at| {
            let mut app = sample_application(reviewed_at);
            app.status = status;
            Ok(app)
        });

    let handler = ReviewHandler::new(repo);
    let request = ReviewApplicationRequest {
        status: ApplicationStatus::Approved,
        review_notes: Some("Strong application".to_string()),
    };

    let updated = handler.review_application(&id, reviewer, request).await.unwrap();
    assert_eq!(updated.status, ApplicationStatus::Approved);
}

#[tokio::test]
async fn later_reviews_keep_the_original_stamp() {
    let id = Uuid::new_v4();

    let mut repo = MockApplicationRepository::new();
    repo.expect_get_application_by_id()
        .with(eq(id))
        .returning(|_| Ok(sample_application(Some(Utc::now()))));
    repo.expect_update_review()
        .withf(|_, _, _, reviewed_by, reviewed_at| {
            reviewed_by.is_none() && reviewed_at.is_none()
        })
        .returning(|_, status, _, _, _| {
            let mut app = sample_application(Some(Utc::now()));
            app.status = status;
            Ok(app)
        });

    let handler = ReviewHandler::new(repo);
    let request = ReviewApplicationRequest {
        status: ApplicationStatus::Rejected,
        review_notes: None,
    };

    assert!(handler.review_application(&id, Uuid::new_v4(), request).await.is_ok());
}

#[tokio::test]
async fn moving_back_to_pending_never_stamps() {
    let id = Uuid::new_v4();

    let mut repo = MockApplicationRepository::new();
    repo.expect_get_application_by_id()
        .with(eq(id))
        .returning(|_| Ok(sample_application(None)));
    repo.expect_update_review()
        .withf(|_, status, _, reviewed_by, reviewed_at| {
            *status == ApplicationStatus::Pending
                && reviewed_by.is_none()
                && reviewed_at.is_none()
        })
        .returning(|_, _, _, _, _| Ok(sample_application(None)));

    let handler = ReviewHandler::new(repo);
    let request = ReviewApplicationRequest {
        status: ApplicationStatus::Pending,
        review_notes: None,
    };

    assert!(handler.review_application(&id, Uuid::new_v4(), request).await.is_ok());
}

// ───── Downloads ────────────────────────────────────────────────────

#[tokio::test]
async fn a_counted_download_hands_out_the_stored_file() {
    let id = Uuid::new_v4();

    let mut repo = MockResourceRepository::new();
    repo.expect_record_download()
        .with(eq(id))
        .returning(|_| Ok(Some(DownloadTarget::File("guides/rust-setup.pdf".to_string()))));

    let handler = DownloadsHandler::new(repo);
    let target = handler.record_download(&id).await.unwrap();

    assert_eq!(target, DownloadTarget::File("guides/rust-setup.pdf".to_string()));
}

#[tokio::test]
async fn an_external_resource_redirects() {
    let id = Uuid::new_v4();

    let mut repo = MockResourceRepository::new();
    repo.expect_record_download()
        .with(eq(id))
        .returning(|_| Ok(Some(DownloadTarget::ExternalUrl("https://doc.rust-lang.org/book/".to_string()))));

    let handler = DownloadsHandler::new(repo);
    let target = handler.record_download(&id).await.unwrap();

    assert!(matches!(target, DownloadTarget::ExternalUrl(_)));
}

#[tokio::test]
async fn a_missing_resource_is_not_found() {
    let mut repo = MockResourceRepository::new();
    repo.expect_record_download().returning(|_| Ok(None));

    let handler = DownloadsHandler::new(repo);
    let result = handler.record_download(&Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

// ───── Search ───────────────────────────────────────────────────────

#[tokio::test]
async fn a_blank_query_never_reaches_the_repository() {
    // No expectations set, so any repository call would panic.
    let repo = MockSearchRepository::new();
    let handler = SearchHandler::new(repo);

    let results = handler.search("   ", SearchCategory::All).await.unwrap();

    assert_eq!(results.total_results, 0);
    assert!(results.members.is_none());
    assert!(results.blog_posts.is_none());
}

#[tokio::test]
async fn a_single_category_runs_only_its_own_query() {
    let mut repo = MockSearchRepository::new();
    repo.expect_search_members()
        .withf(|q, limit| q == "rust" && *limit == 10)
        .returning(|_, _| Ok(vec![sample_member()]));

    let handler = SearchHandler::new(repo);
    let results = handler.search(" rust ", SearchCategory::Members).await.unwrap();

    assert_eq!(results.query, "rust");
    assert_eq!(results.total_results, 1);
    assert!(results.events.is_none());
    assert!(results.resources.is_none());
}

// ───── Public submissions ───────────────────────────────────────────

#[tokio::test]
async fn a_contact_submission_returns_the_ack_message() {
    let submission_id = Uuid::new_v4();

    let mut contacts = MockContactRepository::new();
    contacts
        .expect_create_submission()
        .returning(move |req| {
            Ok(ContactSubmission {
                id: submission_id,
                name: req.name.clone(),
                email: req.email.clone(),
                subject: req.subject,
                message: req.message.clone(),
                is_read: false,
                admin_notes: String::new(),
                created_at: Utc::now(),
            })
        });

    let handler = SubmissionsHandler::new(
        contacts,
        MockNewsletterRepository::new(),
        MockApplicationRepository::new(),
    );

    let ack = handler
        .submit_contact(NewContactRequest {
            name: "Ada Obi".to_string(),
            email: "ada@example.com".to_string(),
            subject: ContactSubject::Membership,
            message: "How do I join the club?".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(ack.id, submission_id);
    assert_eq!(
        ack.message,
        "Your message has been sent successfully! We will get back to you soon."
    );
}

#[tokio::test]
async fn a_repeat_signup_reads_as_already_subscribed() {
    let mut newsletter = MockNewsletterRepository::new();
    newsletter
        .expect_subscribe()
        .with(eq("ada@example.com"))
        .returning(|_| Ok(SubscribeOutcome::AlreadySubscribed));

    let handler = SubmissionsHandler::new(
        MockContactRepository::new(),
        newsletter,
        MockApplicationRepository::new(),
    );

    let ack = handler
        .subscribe(NewsletterSignup {
            email: "ada@example.com".to_string(),
        })
        .await
        .unwrap();

    assert!(!ack.subscribed);
    assert_eq!(ack.message, "Email already subscribed.");
}

#[tokio::test]
async fn a_fresh_signup_is_acknowledged() {
    let mut newsletter = MockNewsletterRepository::new();
    newsletter
        .expect_subscribe()
        .returning(|_| Ok(SubscribeOutcome::Subscribed));

    let handler = SubmissionsHandler::new(
        MockContactRepository::new(),
        newsletter,
        MockApplicationRepository::new(),
    );

    let ack = handler
        .subscribe(NewsletterSignup {
            email: "obi@example.com".to_string(),
        })
        .await
        .unwrap();

    assert!(ack.subscribed);
    assert_eq!(ack.message, "Successfully subscribed!");
}

#[tokio::test]
async fn an_invalid_application_is_rejected_before_storage() {
    // No expectations set, so a repository write would panic.
    let handler = SubmissionsHandler::new(
        MockContactRepository::new(),
        MockNewsletterRepository::new(),
        MockApplicationRepository::new(),
    );

    let result = handler
        .apply(club_backend::entities::application::NewApplicationRequest {
            full_name: "A".to_string(),
            email: "not-an-email".to_string(),
            phone: String::new(),
            student_id: String::new(),
            department: "Computer Science".to_string(),
            year_of_study: "200".to_string(),
            interested_segment_id: None,
            programming_languages: String::new(),
            experience_level: String::new(),
            motivation: "Build real things".to_string(),
            expectations: "Mentorship".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}
