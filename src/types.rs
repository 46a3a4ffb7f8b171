//! Core request and response types for the prediction service.

use serde::{Deserialize, Serialize};

/// Inbound prediction request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    /// The token contract address to read a fortune for
    pub ca: String,
    /// Optional coin label shown in the narrative
    #[serde(default)]
    pub coin: Option<String>,
}

/// Four named sub-scores plus the derived final score.
///
/// Serialized camelCase to preserve the public wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub technical_score: f64,
    pub capital_score: f64,
    pub social_score: f64,
    pub narrative_score: f64,
    pub final_score: f64,
}

/// One I-Ching reference entry: name, brief meaning, interpretive text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hexagram {
    pub name: String,
    pub brief: String,
    pub ai: String,
}

impl Hexagram {
    pub fn new(name: &str, brief: &str, ai: &str) -> Self {
        Self {
            name: name.to_string(),
            brief: brief.to_string(),
            ai: ai.to_string(),
        }
    }
}

/// Position label of a tarot pick within the three-card spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Past,
    Present,
    Future,
}

impl Position {
    /// Returns the string representation of the position.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Past => "Past",
            Position::Present => "Present",
            Position::Future => "Future",
        }
    }

    /// Returns the three positions in spread order.
    pub fn all() -> [Position; 3] {
        [Position::Past, Position::Present, Position::Future]
    }
}

/// A single tarot pick: card identity, orientation, interpretive text,
/// position label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TarotPick {
    pub card: String,
    pub upright: bool,
    pub ai: String,
    pub pos: Position,
}

/// The full prediction payload assembled for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Seed derived from the lower-cased address, exposed for reproducibility
    pub seed: u32,
    pub ai_score: f64,
    pub breakdown: ScoreBreakdown,
    pub iching: Hexagram,
    pub tarot: Vec<TarotPick>,
    pub mantra: String,
    pub gpt_interpretation: String,
}

/// Success envelope returned by the predict endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub ok: bool,
    #[serde(flatten)]
    pub prediction: Prediction,
}
