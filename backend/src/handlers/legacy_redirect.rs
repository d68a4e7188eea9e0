use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::AppState;

/// Host name without port or leading `www.`, lowercased.
fn normalize_host(host: &str) -> String {
    let host = host.split(':').next().unwrap_or_default().to_ascii_lowercase();
    match host.strip_prefix("www.") {
        Some(bare) => bare.to_string(),
        None => host,
    }
}

/// Where a request for `host` + `path_and_query` should go, if `host` is
/// one of the retired domains.
pub fn redirect_target(
    host: &str,
    path_and_query: &str,
    legacy_hosts: &[String],
    site_url: &str,
) -> Option<String> {
    let host = normalize_host(host);
    if !legacy_hosts.iter().any(|legacy| normalize_host(legacy) == host) {
        return None;
    }
    let path = if path_and_query.starts_with('/') { path_and_query } else { "/" };
    Some(format!("{}{}", site_url.trim_end_matches('/'), path))
}

pub async fn redirect_legacy_hosts(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let path_and_query = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    let settings = &state.settings;
    if let Some(location) = redirect_target(host, path_and_query, &settings.legacy_hosts, &settings.site_url) {
        debug!("Redirecting legacy host {} to {}", host, location);
        return Redirect::permanent(&location).into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy() -> Vec<String> {
        vec!["responsibleaiok.com".to_string(), "aistulsa.com".to_string()]
    }

    #[test]
    fn legacy_hosts_keep_path_and_query() {
        assert_eq!(
            redirect_target("aistulsa.com", "/blog?ref=x", &legacy(), "https://responsibleaiok.org"),
            Some("https://responsibleaiok.org/blog?ref=x".to_string())
        );
        assert_eq!(
            redirect_target("WWW.ResponsibleAIOK.com:443", "/", &legacy(), "https://responsibleaiok.org/"),
            Some("https://responsibleaiok.org/".to_string())
        );
    }

    #[test]
    fn primary_host_passes_through() {
        assert_eq!(
            redirect_target("responsibleaiok.org", "/", &legacy(), "https://responsibleaiok.org"),
            None
        );
        assert_eq!(redirect_target("", "/", &legacy(), "https://responsibleaiok.org"), None);
    }
}
