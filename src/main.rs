//! Wiring & DI. Entry point: load config, bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use task_timer::adapters::ai::OpenAiAdapter;
use task_timer::adapters::ui::tui::TuiInputPort;
use task_timer::ports::{AiPort, InputPort};
use task_timer::shared::config::AppConfig;
use task_timer::usecases::EstimatorService;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load()?;
    // Missing key is fatal before any prompt is shown.
    let api_key = cfg.ai_api_key()?;
    let timeout = cfg.ai_timeout_or_default();

    info!(
        model = %cfg.ai_model_or_default(),
        url = %cfg.ai_api_url_or_default(),
        timeout_secs = timeout.as_secs(),
        "AI estimation enabled with OpenAI adapter"
    );
    let ai: Arc<dyn AiPort> = Arc::new(OpenAiAdapter::new(
        cfg.ai_api_url_or_default(),
        api_key,
        cfg.ai_model_or_default(),
        timeout,
    )?);

    let estimator = Arc::new(EstimatorService::new(ai, timeout));

    task_timer::adapters::ui::init_ui(&cfg.ai_model_or_default());

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(estimator));
    input_port.run().await?;

    Ok(())
}
