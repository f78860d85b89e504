use predict_service::config::PredictConfig;
use predict_service::startup::Application;
use service_core::middleware::metrics::init_metrics;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = PredictConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing("predict-service", "info", config.otlp_endpoint.as_deref());
    init_metrics();

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start predict-service: {}", e);
        anyhow::anyhow!("Startup error: {}", e)
    })?;

    app.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
