use actix_web::web;

use crate::handlers::{
    achievements, events, faqs, gallery, home, members, projects, resources, segments,
};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/home", web::get().to(home::home_page));

    cfg.service(
        web::scope("/segments")
            .service(web::resource("").route(web::get().to(segments::get_all_segments)))
            .service(web::resource("/{segment_id}").route(web::get().to(segments::get_segment_by_id))),
    );

    cfg.service(
        web::scope("/members")
            .service(web::resource("").route(web::get().to(members::get_all_members)))
            .service(web::resource("/{member_id}").route(web::get().to(members::get_member_by_id))),
    );

    cfg.service(
        web::scope("/achievements")
            .service(web::resource("").route(web::get().to(achievements::get_all_achievements)))
            .service(
                web::resource("/{achievement_id}")
                    .route(web::get().to(achievements::get_achievement_by_id)),
            ),
    );

    cfg.service(
        web::scope("/gallery")
            .service(web::resource("").route(web::get().to(gallery::get_all_photos)))
            .service(web::resource("/{photo_id}").route(web::get().to(gallery::get_photo_by_id))),
    );

    cfg.service(
        web::scope("/events")
            .service(web::resource("").route(web::get().to(events::get_all_events)))
            .service(web::resource("/{event_id}").route(web::get().to(events::get_event_by_id))),
    );

    cfg.service(
        web::scope("/faqs").service(web::resource("").route(web::get().to(faqs::get_active_faqs))),
    );

    cfg.service(
        web::scope("/projects")
            .service(web::resource("").route(web::get().to(projects::get_all_projects)))
            .service(
                web::resource("/{project_id}").route(web::get().to(projects::get_project_by_id)),
            ),
    );

    cfg.service(
        web::scope("/resources")
            .service(web::resource("").route(web::get().to(resources::get_all_resources)))
            .service(
                web::resource("/{resource_id}")
                    .route(web::get().to(resources::get_resource_by_id)),
            )
            .service(
                web::resource("/{resource_id}/download")
                    .route(web::get().to(resources::download_resource)),
            ),
    );
}
