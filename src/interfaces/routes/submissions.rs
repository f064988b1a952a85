use actix_web::web;

use crate::handlers::submissions;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/contact", web::post().to(submissions::submit_contact));
    cfg.route(
        "/newsletter/subscribe",
        web::post().to(submissions::subscribe_newsletter),
    );
    cfg.route(
        "/applications",
        web::post().to(submissions::submit_application),
    );
}
