pub mod announcements;
pub mod health;
pub mod metrics;

use axum::{
    routing::{get, patch},
    Extension, Router,
};

use crate::{middleware::auth::JwtSecret, AppState};

/// All API routes with the JWT secret attached. CORS and tracing layers are
/// added by the server binary.
pub fn router(state: AppState) -> Router {
    let jwt_secret = JwtSecret(state.config.jwt_secret.clone());

    Router::new()
        .route("/health", get(health::health_check))
        .route("/metrics", get(metrics::metrics_handler))
        .route(
            "/announcements",
            get(announcements::list_announcements).post(announcements::create_announcement),
        )
        .route("/announcements/", get(announcements::list_announcements))
        .route(
            "/announcements/{id}",
            patch(announcements::update_announcement).delete(announcements::delete_announcement),
        )
        .layer(Extension(jwt_secret))
        .with_state(state)
}
