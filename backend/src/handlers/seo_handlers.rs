use std::fmt::Write;
use std::sync::Arc;

use axum::{extract::State, http::header, response::IntoResponse};
use chrono::{NaiveDate, Utc};

use crate::AppState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChangeFreq {
    Weekly,
    Monthly,
}

impl ChangeFreq {
    fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SitemapEntry {
    pub path: &'static str,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

pub const SITEMAP_ENTRIES: &[SitemapEntry] = &[
    SitemapEntry { path: "/", changefreq: ChangeFreq::Monthly, priority: 1.0 },
    SitemapEntry { path: "/blog", changefreq: ChangeFreq::Weekly, priority: 0.8 },
];

pub fn render_sitemap(site_url: &str, entries: &[SitemapEntry], lastmod: NaiveDate) -> String {
    let base = site_url.trim_end_matches('/');
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        let loc = match entry.path {
            "/" => format!("{}/", base),
            path => format!("{}{}", base, path),
        };
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            loc,
            lastmod.format("%Y-%m-%d"),
            entry.changefreq.as_str(),
            entry.priority,
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn render_robots(site_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        site_url.trim_end_matches('/')
    )
}

pub async fn sitemap(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let body = render_sitemap(&state.settings.site_url, SITEMAP_ENTRIES, Utc::now().date_naive());
    ([(header::CONTENT_TYPE, "application/xml")], body)
}

pub async fn robots(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], render_robots(&state.settings.site_url))
}
