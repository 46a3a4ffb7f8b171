//! Narrative collaborator: turns a finished draw and score into prose by
//! delegating to an external language model.
//!
//! Failure here fails the whole prediction request; no fallback text is
//! synthesized locally.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument};

use crate::config::GeminiConfig;
use crate::error::{Error, Result};
use crate::types::{Hexagram, ScoreBreakdown, TarotPick};

/// Everything the language model needs to write the reading.
#[derive(Debug, Clone)]
pub struct NarrativePayload {
    pub coin: String,
    pub ca: String,
    pub final_score: f64,
    pub breakdown: ScoreBreakdown,
    pub iching: Hexagram,
    pub tarot: Vec<TarotPick>,
    pub mantra: String,
}

/// Capability interface for the external text-generation service.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn generate(&self, payload: &NarrativePayload) -> Result<String>;
}

/// Gemini-backed narrative generator.
#[derive(Debug)]
pub struct GeminiGenerator {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiGenerator {
    pub fn new(http: Client, config: &GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| Error::Config("GEMINI_API_KEY is not set".to_string()))?;

        Ok(Self {
            http,
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl NarrativeGenerator for GeminiGenerator {
    #[instrument(skip(self, payload), fields(ca = %payload.ca, model = %self.model))]
    async fn generate(&self, payload: &NarrativePayload) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let prompt = build_prompt(payload);
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Narrative(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::Narrative(format!(
                "generation API returned {}",
                response.status()
            )));
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::Narrative(format!("invalid generation response: {e}")))?;

        let text = extract_text(completion)?;
        debug!(chars = text.len(), "generated interpretation");
        Ok(text)
    }
}

/// Assemble the single structured prompt sent to the model.
fn build_prompt(payload: &NarrativePayload) -> String {
    let mut lines = Vec::new();
    lines.push(
        "You are a playful crypto fortune teller blending I-Ching and tarot. \
         Write a short, vivid reading (3-5 paragraphs) for the meme token below. \
         Entertainment only; remind the reader this is not financial advice."
            .to_string(),
    );
    lines.push(format!("Token: {} (CA: {})", payload.coin, payload.ca));
    lines.push(format!(
        "Composite score {} (technical {}, capital {}, social {}, narrative {})",
        payload.final_score,
        payload.breakdown.technical_score,
        payload.breakdown.capital_score,
        payload.breakdown.social_score,
        payload.breakdown.narrative_score,
    ));
    lines.push(format!(
        "Hexagram: {} ({}) {}",
        payload.iching.name, payload.iching.brief, payload.iching.ai
    ));
    for pick in &payload.tarot {
        lines.push(format!(
            "Tarot {}: {}{} {}",
            pick.pos.as_str(),
            pick.card,
            if pick.upright { "" } else { " (reversed)" },
            pick.ai
        ));
    }
    lines.push(format!("Mantra: {}", payload.mantra));
    lines.join("\n")
}

/// Pull the first candidate's text out of the completion.
fn extract_text(completion: GenerateContentResponse) -> Result<String> {
    completion
        .candidates
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .and_then(|p| p.text)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| Error::Narrative("empty completion from generation API".to_string()))
}

// Wire types for the generateContent endpoint.

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}
