//! Score aggregation: turns externally fetched token metrics into four
//! category sub-scores and a weighted composite.
//!
//! None of this has predictive validity; the scores are a presentation of
//! the metrics, normalized to a 0-100 scale.

use serde::{Deserialize, Serialize};

use crate::fortune::sources::TokenMetrics;
use crate::types::ScoreBreakdown;

/// Category weights for the composite score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub technical: f64,
    pub capital: f64,
    pub social: f64,
    pub narrative: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            technical: 0.30,
            capital: 0.30,
            social: 0.20,
            narrative: 0.20,
        }
    }
}

/// Map a non-negative magnitude onto 0-100 with log compression, saturating
/// at `cap`.
fn log_scale(value: f64, cap: f64) -> f64 {
    if value <= 0.0 {
        return 0.0;
    }
    (value.ln_1p() / cap.ln_1p() * 100.0).clamp(0.0, 100.0)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Combine metrics into the breakdown. Sub-scores and the final score are
/// all on a 0-100 scale, rounded to one decimal place.
pub fn score_metrics(metrics: &TokenMetrics, weights: &ScoreWeights) -> ScoreBreakdown {
    // Technical: 24h momentum centered at 50, blended with trade activity.
    let momentum = (50.0 + metrics.price_change_h24 / 2.0).clamp(0.0, 100.0);
    let activity = log_scale(f64::from(metrics.txns_h24), 5_000.0);
    let technical = 0.6 * momentum + 0.4 * activity;

    // Capital: depth of liquidity and turnover.
    let capital = 0.5 * log_scale(metrics.liquidity_usd, 10_000_000.0)
        + 0.5 * log_scale(metrics.volume_h24_usd, 50_000_000.0);

    // Social: published links plus crowd activity.
    let links = (f64::from(metrics.social_links) * 20.0).clamp(0.0, 100.0);
    let social = 0.5 * links + 0.5 * log_scale(f64::from(metrics.txns_h24), 2_000.0);

    // Narrative: how big the story already is, plus how hot it runs.
    let fame = log_scale(metrics.market_cap_usd, 1_000_000_000.0);
    let heat = metrics.price_change_h24.abs().clamp(0.0, 100.0);
    let narrative = 0.6 * fame + 0.4 * heat;

    let total_weight = weights.technical + weights.capital + weights.social + weights.narrative;
    let final_score = if total_weight > 0.0 {
        (weights.technical * technical
            + weights.capital * capital
            + weights.social * social
            + weights.narrative * narrative)
            / total_weight
    } else {
        50.0
    };

    ScoreBreakdown {
        technical_score: round1(technical),
        capital_score: round1(capital),
        social_score: round1(social),
        narrative_score: round1(narrative),
        final_score: round1(final_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metrics() -> TokenMetrics {
        TokenMetrics {
            price_usd: 0.042,
            liquidity_usd: 250_000.0,
            volume_h24_usd: 1_200_000.0,
            price_change_h24: 14.5,
            txns_h24: 860,
            market_cap_usd: 9_000_000.0,
            social_links: 3,
        }
    }

    #[test]
    fn test_sub_scores_within_bounds() {
        let breakdown = score_metrics(&sample_metrics(), &ScoreWeights::default());
        for score in [
            breakdown.technical_score,
            breakdown.capital_score,
            breakdown.social_score,
            breakdown.narrative_score,
            breakdown.final_score,
        ] {
            assert!((0.0..=100.0).contains(&score), "score out of bounds: {score}");
        }
    }

    #[test]
    fn test_zero_metrics_floor() {
        let metrics = TokenMetrics {
            price_usd: 0.0,
            liquidity_usd: 0.0,
            volume_h24_usd: 0.0,
            price_change_h24: 0.0,
            txns_h24: 0,
            market_cap_usd: 0.0,
            social_links: 0,
        };
        let breakdown = score_metrics(&metrics, &ScoreWeights::default());
        assert_eq!(breakdown.capital_score, 0.0);
        assert_eq!(breakdown.social_score, 0.0);
        assert_eq!(breakdown.narrative_score, 0.0);
        // Flat momentum still contributes to the technical baseline.
        assert_eq!(breakdown.technical_score, 30.0);
    }

    #[test]
    fn test_final_score_is_weighted_mean() {
        let metrics = sample_metrics();
        let weights = ScoreWeights::default();
        let breakdown = score_metrics(&metrics, &weights);

        let expected = (weights.technical * breakdown.technical_score
            + weights.capital * breakdown.capital_score
            + weights.social * breakdown.social_score
            + weights.narrative * breakdown.narrative_score)
            / (weights.technical + weights.capital + weights.social + weights.narrative);
        // Sub-scores are rounded before the check, so allow one rounding step.
        assert!((breakdown.final_score - expected).abs() < 0.2);
    }

    #[test]
    fn test_richer_metrics_score_higher() {
        let weights = ScoreWeights::default();
        let low = score_metrics(
            &TokenMetrics {
                price_usd: 0.0001,
                liquidity_usd: 1_000.0,
                volume_h24_usd: 500.0,
                price_change_h24: -30.0,
                txns_h24: 4,
                market_cap_usd: 20_000.0,
                social_links: 0,
            },
            &weights,
        );
        let high = score_metrics(&sample_metrics(), &weights);
        assert!(high.final_score > low.final_score);
    }

    #[test]
    fn test_crash_does_not_underflow() {
        let metrics = TokenMetrics {
            price_change_h24: -400.0,
            ..sample_metrics()
        };
        let breakdown = score_metrics(&metrics, &ScoreWeights::default());
        assert!(breakdown.technical_score >= 0.0);
        assert!(breakdown.final_score >= 0.0);
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        let breakdown = score_metrics(&sample_metrics(), &ScoreWeights::default());
        for score in [breakdown.technical_score, breakdown.final_score] {
            assert_eq!((score * 10.0).round() / 10.0, score);
        }
    }
}
