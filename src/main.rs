use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use announcements_api::{
    config::Config,
    db::{self, announcements::PgAnnouncementStore, teachers::PgTeacherStore},
    middleware::cors,
    routes,
    services::announcements::AnnouncementService,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(Config::from_env()?);

    let pool = db::create_pool(&config.database_url).await?;
    db::run_migrations(&pool).await?;
    info!("Database connected and migrations applied");

    let announcements = AnnouncementService::new(
        Arc::new(PgAnnouncementStore::new(pool.clone())),
        Arc::new(PgTeacherStore::new(pool)),
    );

    let state = AppState {
        announcements,
        config: config.clone(),
    };

    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors::cors_layer(&config.app_base_url));

    let addr = format!("{}:{}", config.host, config.port);
    info!("announcements API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
