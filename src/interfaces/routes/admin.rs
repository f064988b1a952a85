use actix_web::web;

use crate::handlers::{
    achievements, admin, blog_posts, events, faqs, gallery, members, projects, resources,
    segments, system::health_check,
};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(health_check)
            .route("/dashboard", web::get().to(admin::dashboard))
            .route("/schema", web::get().to(admin::schema))
            .service(
                web::scope("/segments")
                    .service(web::resource("").route(web::post().to(segments::create_segment)))
                    .service(
                        web::resource("/{segment_id}")
                            .route(web::patch().to(segments::update_segment))
                            .route(web::delete().to(segments::delete_segment)),
                    ),
            )
            .service(
                web::scope("/members")
                    .service(web::resource("").route(web::post().to(members::create_member)))
                    .service(
                        web::resource("/{member_id}")
                            .route(web::patch().to(members::update_member))
                            .route(web::delete().to(members::delete_member)),
                    ),
            )
            .service(
                web::scope("/achievements")
                    .service(
                        web::resource("").route(web::post().to(achievements::create_achievement)),
                    )
                    .service(
                        web::resource("/{achievement_id}")
                            .route(web::patch().to(achievements::update_achievement))
                            .route(web::delete().to(achievements::delete_achievement)),
                    ),
            )
            .service(
                web::scope("/gallery")
                    .service(web::resource("").route(web::post().to(gallery::create_photo)))
                    .service(
                        web::resource("/{photo_id}")
                            .route(web::patch().to(gallery::update_photo))
                            .route(web::delete().to(gallery::delete_photo)),
                    ),
            )
            .service(
                web::scope("/events")
                    .service(web::resource("").route(web::post().to(events::create_event)))
                    .service(
                        web::resource("/{event_id}")
                            .route(web::patch().to(events::update_event))
                            .route(web::delete().to(events::delete_event)),
                    ),
            )
            .service(
                web::scope("/faqs")
                    .service(
                        web::resource("")
                            .route(web::get().to(faqs::admin_get_all_faqs))
                            .route(web::post().to(faqs::create_faq)),
                    )
                    .service(
                        web::resource("/{faq_id}")
                            .route(web::patch().to(faqs::update_faq))
                            .route(web::delete().to(faqs::delete_faq)),
                    ),
            )
            .service(
                web::scope("/projects")
                    .service(web::resource("").route(web::post().to(projects::create_project)))
                    .service(
                        web::resource("/{project_id}")
                            .route(web::patch().to(projects::update_project))
                            .route(web::delete().to(projects::delete_project)),
                    ),
            )
            .service(
                web::scope("/resources")
                    .service(web::resource("").route(web::post().to(resources::create_resource)))
                    .service(
                        web::resource("/{resource_id}")
                            .route(web::patch().to(resources::update_resource))
                            .route(web::delete().to(resources::delete_resource)),
                    ),
            )
            .service(
                web::scope("/blog/posts")
                    .service(
                        web::resource("")
                            .route(web::get().to(blog_posts::admin_get_all_blog_posts))
                            .route(web::post().to(blog_posts::create_blog_post)),
                    )
                    .service(
                        web::resource("/{post_id}")
                            .route(web::get().to(blog_posts::admin_get_blog_post_by_id))
                            .route(web::patch().to(blog_posts::update_blog_post))
                            .route(web::delete().to(blog_posts::delete_blog_post)),
                    ),
            )
            .service(
                web::scope("/contacts")
                    .service(web::resource("").route(web::get().to(admin::get_all_contacts)))
                    .service(
                        web::resource("/{submission_id}")
                            .route(web::get().to(admin::get_contact_by_id)),
                    )
                    .service(
                        web::resource("/{submission_id}/read")
                            .route(web::patch().to(admin::set_contact_read)),
                    )
                    .service(
                        web::resource("/{submission_id}/notes")
                            .route(web::patch().to(admin::set_contact_notes)),
                    ),
            )
            .service(
                web::scope("/applications")
                    .service(web::resource("").route(web::get().to(admin::get_all_applications)))
                    .service(
                        web::resource("/{application_id}")
                            .route(web::get().to(admin::get_application_by_id)),
                    )
                    .service(
                        web::resource("/{application_id}/review")
                            .route(web::patch().to(admin::review_application)),
                    ),
            )
            .service(
                web::scope("/newsletter")
                    .service(
                        web::resource("/subscribers")
                            .route(web::get().to(admin::get_all_subscribers)),
                    )
                    .service(
                        web::resource("/subscribers/{subscriber_id}/active")
                            .route(web::patch().to(admin::set_subscriber_active)),
                    ),
            ),
    );
}
