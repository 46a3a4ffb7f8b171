use std::sync::Arc;

use reqwest::Client;

use crate::config::Config;
use crate::fortune::narrative::{GeminiGenerator, NarrativeGenerator};
use crate::fortune::sources::{DexScreenerSource, MetricsSource};
use crate::fortune::{FortuneEngine, ReferenceTables};
use crate::Result;

/// Shared application state for the HTTP server
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pub config: Config,
    pub engine: FortuneEngine,
}

impl AppState {
    /// Build state with the real collaborators.
    pub fn new(config: Config) -> Result<Self> {
        let http = Client::new();

        let metrics: Arc<dyn MetricsSource> = Arc::new(DexScreenerSource::new(
            http.clone(),
            config.metrics.base_url.clone(),
        ));
        let narrative: Arc<dyn NarrativeGenerator> =
            Arc::new(GeminiGenerator::new(http, &config.gemini)?);

        Ok(Self::with_collaborators(config, metrics, narrative))
    }

    /// Build state with substituted collaborators (used by tests).
    pub fn with_collaborators(
        config: Config,
        metrics: Arc<dyn MetricsSource>,
        narrative: Arc<dyn NarrativeGenerator>,
    ) -> Self {
        let engine = FortuneEngine::new(
            metrics,
            narrative,
            Arc::new(ReferenceTables::builtin()),
            config.weights.clone(),
        );

        Self {
            inner: Arc::new(AppStateInner { config, engine }),
        }
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn engine(&self) -> &FortuneEngine {
        &self.inner.engine
    }
}
