//! Fortune module - deterministic draw and scoring pipeline.
//!
//! This module turns a token contract address into a reproducible symbolic
//! draw plus a metrics-backed composite score, then delegates to the
//! narrative collaborator for prose. External services sit behind capability
//! traits so the pipeline itself stays deterministic and testable.

pub mod draw;
pub mod narrative;
pub mod scoring;
pub mod seed;
pub mod sources;
pub mod tables;

// Re-export the main public types
pub use draw::{draw_fortune, Draw, FALLBACK_TEXT, REVERSED_MARKER};
pub use narrative::{NarrativeGenerator, NarrativePayload};
pub use scoring::{score_metrics, ScoreWeights};
pub use seed::{str_to_seed, Xorshift32};
pub use sources::{MetricsSource, TokenMetrics};
pub use tables::ReferenceTables;

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument};

use crate::error::{Error, Result};
use crate::types::Prediction;

/// Minimum accepted address length, matching the request schema.
pub const MIN_CA_LEN: usize = 4;

/// Orchestrates one prediction: validate, fetch metrics, score, draw,
/// narrate.
pub struct FortuneEngine {
    metrics: Arc<dyn MetricsSource>,
    narrative: Arc<dyn NarrativeGenerator>,
    tables: Arc<ReferenceTables>,
    weights: ScoreWeights,
}

impl FortuneEngine {
    pub fn new(
        metrics: Arc<dyn MetricsSource>,
        narrative: Arc<dyn NarrativeGenerator>,
        tables: Arc<ReferenceTables>,
        weights: ScoreWeights,
    ) -> Self {
        Self {
            metrics,
            narrative,
            tables,
            weights,
        }
    }

    /// Run the full pipeline for one address.
    ///
    /// The generator and its state live entirely within this call; nothing
    /// is shared across requests except the read-only tables.
    #[instrument(skip(self), fields(ca = %ca))]
    pub async fn predict(&self, ca: &str, coin: Option<&str>) -> Result<Prediction> {
        if ca.chars().count() < MIN_CA_LEN {
            return Err(Error::InvalidRequest("Invalid CA".to_string()));
        }

        let started = Instant::now();

        let metrics = self.metrics.fetch(ca).await?;
        let breakdown = score_metrics(&metrics, &self.weights);

        let seed = str_to_seed(&ca.to_lowercase());
        let mut rng = Xorshift32::new(seed);
        let draw = draw_fortune(&mut rng, &self.tables);
        debug!(seed, hexagram = %draw.hexagram.name, "completed symbolic draw");

        let payload = NarrativePayload {
            coin: coin.unwrap_or("Unknown Meme").to_string(),
            ca: ca.to_string(),
            final_score: breakdown.final_score,
            breakdown: breakdown.clone(),
            iching: draw.hexagram.clone(),
            tarot: draw.tarot.clone(),
            mantra: draw.mantra.clone(),
        };
        let interpretation = self.narrative.generate(&payload).await?;

        info!(
            seed,
            score = breakdown.final_score,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "prediction complete"
        );

        Ok(Prediction {
            seed,
            ai_score: breakdown.final_score,
            breakdown,
            iching: draw.hexagram,
            tarot: draw.tarot,
            mantra: draw.mantra,
            gpt_interpretation: interpretation,
        })
    }
}
