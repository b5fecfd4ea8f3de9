//! Country API server: loads settings, ensures the database and table exist,
//! and serves the router.

use country_api::{
    app, ensure_country_table, ensure_database_exists, AppState, PayloadValidator, PgCountryStore,
    Settings,
};
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.default_log_filter())),
        )
        .init();

    ensure_database_exists(&settings.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;
    ensure_country_table(&pool).await?;

    let state = AppState::new(
        PgCountryStore::new(pool),
        PayloadValidator::new(settings.require_all_fields),
    );
    let router = app(state)
        .layer(RequestBodyLimitLayer::new(settings.body_limit_bytes))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!(debug = settings.debug, "listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
