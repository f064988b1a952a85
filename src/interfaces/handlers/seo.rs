use actix_web::{get, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};

use crate::errors::AppError;
use crate::repositories::sitemap::SitemapRepository;
use crate::AppState;

/// Public site pages that always appear in the sitemap.
const STATIC_ROUTES: &[&str] = &[
    "/",
    "/about",
    "/segments",
    "/members",
    "/achievements",
    "/gallery",
    "/events",
    "/blog",
    "/projects",
    "/resources",
    "/faq",
    "/contact",
    "/apply",
];

#[get("/robots.txt")]
pub async fn robots_txt(state: web::Data<AppState>) -> impl Responder {
    let sitemap_line = format!("Sitemap: {}/sitemap.xml", state.base_url);
    let lines = [
        "User-agent: *",
        "Allow: /",
        "Disallow: /admin/",
        "Disallow: /media/",
        "",
        &sitemap_line,
    ];
    HttpResponse::Ok()
        .content_type("text/plain")
        .body(lines.join("\n"))
}

#[get("/sitemap.xml")]
pub async fn sitemap_xml(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let base = &state.base_url;

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for route in STATIC_ROUTES {
        push_url(&mut xml, &format!("{}{}", base, route), None, "monthly", "0.5");
    }
    for entry in state.repos.sitemap.segment_entries().await? {
        let loc = format!("{}/segments/{}", base, entry.slug);
        push_url(&mut xml, &loc, Some(&entry.updated_at), "weekly", "0.8");
    }
    for entry in state.repos.sitemap.event_entries().await? {
        let loc = format!("{}/events/{}", base, entry.slug);
        push_url(&mut xml, &loc, Some(&entry.updated_at), "weekly", "0.7");
    }
    for entry in state.repos.sitemap.published_post_entries().await? {
        let loc = format!("{}/blog/{}", base, entry.slug);
        push_url(&mut xml, &loc, Some(&entry.updated_at), "weekly", "0.9");
    }
    for entry in state.repos.sitemap.project_entries().await? {
        let loc = format!("{}/projects/{}", base, entry.slug);
        push_url(&mut xml, &loc, Some(&entry.updated_at), "monthly", "0.6");
    }
    for entry in state.repos.sitemap.achievement_entries().await? {
        let loc = format!("{}/achievements/{}", base, entry.slug);
        push_url(&mut xml, &loc, Some(&entry.updated_at), "monthly", "0.6");
    }

    xml.push_str("</urlset>\n");

    Ok(HttpResponse::Ok()
        .content_type("application/xml")
        .body(xml))
}

fn push_url(
    xml: &mut String,
    loc: &str,
    lastmod: Option<&DateTime<Utc>>,
    changefreq: &str,
    priority: &str,
) {
    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", loc));
    if let Some(ts) = lastmod {
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", ts.format("%Y-%m-%d")));
    }
    xml.push_str(&format!("    <changefreq>{}</changefreq>\n", changefreq));
    xml.push_str(&format!("    <priority>{}</priority>\n", priority));
    xml.push_str("  </url>\n");
}
