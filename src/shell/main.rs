use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use timesheets::shell::config::AppConfig;
use timesheets::shell::http::router;
use timesheets::shell::seed::SeedData;
use timesheets::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .init();

    let seed = match &config.seed_path {
        Some(path) => SeedData::load(path)?,
        None => SeedData::default(),
    };
    tracing::info!(
        job_locations = seed.job_locations.len(),
        employee_types = seed.employee_types.len(),
        templates = seed.schedule_templates.len(),
        schedules = seed.scheduled_job_locations.len(),
        "seed data loaded"
    );

    let state = AppState::in_memory(&config.outbox_topic, seed);
    let app = router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("listening on http://{addr}, GraphQL at http://{addr}/gql");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
