use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
    middleware,
};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod handlers {
    pub mod lead_handlers;
    pub mod legacy_redirect;
    pub mod seo_handlers;
}
mod config {
    pub mod settings;
}
mod utils {
    pub mod security_headers;
}

use config::settings::Settings;
use handlers::lead_handlers;
use handlers::legacy_redirect;
use handlers::seo_handlers;
use utils::security_headers::with_security_headers;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    settings: Settings,
}

/// Full router: API, SEO files, the compiled site with `index.html` as the
/// fallback for client-side routes, and the response layers.
pub fn app(state: Arc<AppState>) -> Router {
    let dist = &state.settings.dist_dir;
    let site = ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html")));

    let router = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/leads", post(lead_handlers::create_lead))
        .route("/sitemap.xml", get(seo_handlers::sitemap))
        .route("/robots.txt", get(seo_handlers::robots))
        .fallback_service(site)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            legacy_redirect::redirect_legacy_hosts,
        ))
        .layer(CompressionLayer::new());

    with_security_headers(router)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let settings = Settings::from_env()?;

    let _guard = settings.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let bind_addr = settings.bind_addr;
    info!("Serving {} on {}", settings.dist_dir.display(), bind_addr);
    let state = Arc::new(AppState { settings });

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app(state).into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let settings = Settings::from_lookup(|key| match key {
            "RAIOK_DIST_DIR" => Some("./no-such-dist".to_string()),
            _ => None,
        })
        .unwrap();
        app(Arc::new(AppState { settings }))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn post_lead(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/leads")
            .header(header::HOST, "responsibleaiok.org")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_carries_security_headers() {
        let response = test_app()
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        for name in [
            "content-security-policy",
            "strict-transport-security",
            "x-frame-options",
            "x-content-type-options",
            "referrer-policy",
            "permissions-policy",
        ] {
            assert!(headers.contains_key(name), "missing {}", name);
        }
        assert_eq!(headers["x-frame-options"], "SAMEORIGIN");
        assert_eq!(body_string(response).await, "OK");
    }

    #[tokio::test]
    async fn legacy_host_redirects_permanently() {
        let request = Request::builder()
            .uri("/blog?ref=old")
            .header(header::HOST, "aistulsa.com")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "https://responsibleaiok.org/blog?ref=old");
        assert!(response.headers().contains_key("strict-transport-security"));
    }

    #[tokio::test]
    async fn invalid_lead_is_unprocessable() {
        let response = test_app()
            .oneshot(post_lead(r#"{"firstName":"","email":"not-an-email"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["fields"]["firstName"], "First name is required");
        assert_eq!(body["fields"]["email"], "Please enter a valid email address");
    }

    #[tokio::test]
    async fn valid_lead_is_accepted() {
        let response = test_app()
            .oneshot(post_lead(
                r#"{"firstName":"Ada","email":"ada@example.org","organization":"","interest":"volunteer"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(body["id"].as_str().is_some_and(|id| id.len() == 36));
    }

    #[tokio::test]
    async fn sitemap_and_robots_are_served() {
        let response = test_app()
            .oneshot(Request::builder().uri("/sitemap.xml").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/xml");
        assert!(body_string(response).await.contains("<loc>https://responsibleaiok.org/blog</loc>"));

        let response = test_app()
            .oneshot(Request::builder().uri("/robots.txt").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(body_string(response).await.contains("Sitemap: https://responsibleaiok.org/sitemap.xml"));
    }
}
