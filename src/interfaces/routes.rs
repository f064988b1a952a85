use actix_web::web;

use crate::handlers::{home, seo};

mod admin;
mod auth;
mod blog;
mod content;
mod json_error;
mod search;
mod submissions;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home::welcome);
    cfg.service(seo::robots_txt);
    cfg.service(seo::sitemap_xml);

    cfg.service(
        web::scope("/api/v1")
            .configure(auth::config_routes)
            .configure(content::config_routes)
            .configure(blog::config_routes)
            .configure(submissions::config_routes)
            .configure(search::config_routes)
            .configure(admin::config_routes),
    );

    cfg.configure(json_error::config_routes);
}
