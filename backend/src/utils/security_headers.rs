use axum::http::header::{
    CONTENT_SECURITY_POLICY, REFERRER_POLICY, STRICT_TRANSPORT_SECURITY, X_CONTENT_TYPE_OPTIONS,
    X_FRAME_OPTIONS,
};
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

/// Allows the HubSpot form and tracking scripts, Google Tag Manager and
/// Analytics, Google Fonts and the Substack newsletter embed.
pub const CONTENT_SECURITY_POLICY_VALUE: &str = concat!(
    "default-src 'self'; ",
    "script-src 'self' 'unsafe-eval' 'unsafe-inline' https://js.hsforms.net https://js-na2.hsforms.net ",
    "https://js.hs-scripts.com https://js-na2.hs-scripts.com https://js-na1.hs-scripts.com ",
    "https://js.hs-analytics.net https://www.googletagmanager.com https://static.hsappstatic.net; ",
    "style-src 'self' 'unsafe-inline' https://fonts.googleapis.com https://static.hsappstatic.net; ",
    "font-src 'self' https://fonts.gstatic.com; ",
    "img-src 'self' data: https: blob:; ",
    "connect-src 'self' https://forms.hsforms.com https://api.hsforms.com https://www.google-analytics.com; ",
    "frame-src https://forms.hsforms.com https://js-na2.hsforms.net http://js-na2.hsforms.net https://responsibleaiok.substack.com https://substack.com",
);

pub fn security_headers() -> [(HeaderName, HeaderValue); 6] {
    [
        (CONTENT_SECURITY_POLICY, HeaderValue::from_static(CONTENT_SECURITY_POLICY_VALUE)),
        (
            STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        ),
        (X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN")),
        (X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
        (REFERRER_POLICY, HeaderValue::from_static("strict-origin-when-cross-origin")),
        (
            HeaderName::from_static("permissions-policy"),
            HeaderValue::from_static("camera=(), microphone=(), geolocation=()"),
        ),
    ]
}

/// Adds every security header to all responses of `router`, replacing any
/// value a handler set.
pub fn with_security_headers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    security_headers()
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::overriding(name, value))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_allows_third_party_origins() {
        for origin in [
            "https://js.hsforms.net",
            "https://www.googletagmanager.com",
            "https://fonts.gstatic.com",
            "https://responsibleaiok.substack.com",
        ] {
            assert!(CONTENT_SECURITY_POLICY_VALUE.contains(origin), "{} missing", origin);
        }
        assert!(CONTENT_SECURITY_POLICY_VALUE.starts_with("default-src 'self'; "));
        assert!(!CONTENT_SECURITY_POLICY_VALUE.ends_with(';'));
    }

    #[test]
    fn form_frames_allowed_on_both_schemes() {
        let frame_src = CONTENT_SECURITY_POLICY_VALUE
            .split("; ")
            .find(|directive| directive.starts_with("frame-src "))
            .unwrap();
        for origin in ["https://js-na2.hsforms.net", "http://js-na2.hsforms.net", "https://forms.hsforms.com"] {
            assert!(frame_src.split(' ').any(|source| source == origin), "{} missing", origin);
        }
    }
}
