//! News monitor service — binary entrypoint.
//! Boots the Axum HTTP server with the news routes, static dashboard tables and `/metrics`.

use shuttle_axum::ShuttleAxum;

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    news_monitor::telemetry::init_tracing();

    let router = news_monitor::app()
        .await
        .map_err(shuttle_runtime::Error::Custom)?;

    Ok(router.into())
}
