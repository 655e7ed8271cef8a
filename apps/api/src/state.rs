use std::sync::Arc;

use crate::advisor::Advisor;
use crate::config::Config;
use crate::fixtures::store::FixtureStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub fixtures: Arc<FixtureStore>,
    /// Pluggable advisor. Gemini when an API key is configured, canned answers otherwise.
    pub advisor: Arc<dyn Advisor>,
    pub config: Config,
}

#[cfg(test)]
pub fn test_state() -> AppState {
    use crate::advisor::canned::CannedAdvisor;

    AppState {
        fixtures: Arc::new(FixtureStore::builtin().unwrap()),
        advisor: Arc::new(CannedAdvisor::builtin().unwrap()),
        config: Config::default(),
    }
}
