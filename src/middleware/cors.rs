use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// CORS for the school front-ends: the app base URL, its subdomains, and
/// any local development origin.
pub fn cors_layer(app_base_url: &str) -> CorsLayer {
    let base = app_base_url.to_string();
    let origin = AllowOrigin::predicate(move |origin: &HeaderValue, _| {
        origin
            .to_str()
            .map(|o| origin_allowed(o, &base))
            .unwrap_or(false)
    });

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE, Method::OPTIONS])
        .allow_headers(AllowHeaders::list([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]))
        .allow_origin(origin)
}

pub fn origin_allowed(origin: &str, base: &str) -> bool {
    // Local development, whatever the port
    if origin.starts_with("http://localhost") || origin.starts_with("http://127.0.0.1") {
        return true;
    }
    if origin == base {
        return true;
    }
    // Subdomains of the base host, e.g. lincoln.school.example for https://school.example
    let Some(idx) = base.find("://") else {
        return false;
    };
    let after_scheme = &base[idx + 3..];
    let host = after_scheme.split('/').next().unwrap_or(after_scheme);
    let domain = host.split(':').next().unwrap_or(host);
    // suffix match, so school.example.evil.test does not pass
    !domain.is_empty() && origin.ends_with(&format!(".{domain}"))
}
