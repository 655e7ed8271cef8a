mod advisor;
mod analysis;
mod config;
mod errors;
mod fixtures;
mod learning;
mod llm_client;
mod matching;
mod resume;
mod routes;
mod skills;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advisor::canned::CannedAdvisor;
use crate::advisor::gemini::GeminiAdvisor;
use crate::advisor::Advisor;
use crate::config::Config;
use crate::fixtures::store::FixtureStore;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; malformed values abort startup
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillMatrix API v{}", env!("CARGO_PKG_VERSION"));

    // Load fixtures (built-in seed unless FIXTURES_PATH is set)
    let fixtures = FixtureStore::load(config.fixtures_path.as_deref())
        .context("Failed to load fixtures")?;
    info!(
        "Fixtures loaded: {} employees, {} jobs, {} department profiles",
        fixtures.employees().len(),
        fixtures.jobs().len(),
        fixtures.department_profiles().count()
    );

    let advisor = build_advisor(&config)?;
    info!("Advisor backend: {}", advisor.backend());
    if !config.enable_weighted_scoring {
        info!("Weighted scoring disabled; match output carries the ratio score only");
    }

    // Build app state
    let state = AppState {
        fixtures: Arc::new(fixtures),
        advisor,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS origins once the dashboard host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Gemini when an API key is configured, canned answers otherwise.
fn build_advisor(config: &Config) -> Result<Arc<dyn Advisor>> {
    match &config.gemini_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone()).context("Failed to build LLM client")?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Ok(Arc::new(GeminiAdvisor::new(llm)))
        }
        None => {
            warn!("GEMINI_API_KEY not set; serving canned recommendations");
            Ok(Arc::new(CannedAdvisor::builtin()?))
        }
    }
}
