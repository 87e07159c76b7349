use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use sales_kpi_tracker::modules::weekly_metrics::use_cases::record_week::handler::RecordWeekHandler;
use sales_kpi_tracker::shared::infrastructure::session::Session;
use sales_kpi_tracker::shell::config::AppConfig;
use sales_kpi_tracker::shell::graphql::{GRAPHQL_PATH, build_schema, routes};
use sales_kpi_tracker::shell::http::router;
use sales_kpi_tracker::shell::state::AppState;
use sales_kpi_tracker::shell::workers::spawn_dashboard_projector;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let client = config.store_client();
    if !client.is_configured() {
        tracing::error!("Store config is not available. Serving an empty dashboard.");
    }

    let session = Arc::new(Session::new());
    if let Err(e) = session
        .sign_in(&client, config.initial_auth_token.as_deref())
        .await
    {
        tracing::debug!(error = %e, "serving without an identity");
    }

    let (dashboard, projector) =
        spawn_dashboard_projector(&config.app_id, client.clone(), session.clone());

    let state = AppState {
        record_week_handler: Arc::new(RecordWeekHandler::new(
            config.app_id.clone(),
            client,
            session,
        )),
        dashboard,
    };

    let app = router(state.clone())
        .merge(routes(build_schema(state)))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("GraphQL endpoint: http://{}{}", config.bind_addr, GRAPHQL_PATH);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    projector.abort();
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
