use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::pipeline::RankedMatch;
use crate::matching::scoring::{CompatibilityMatch, FactorBreakdown};

/// Ranked match result as served to the GUI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub profile_id: String,
    pub name: Option<String>,
    /// Overall score, 0–100.
    pub score: u8,
    /// Score clears the strong-match threshold.
    pub strong_match: bool,
    /// Score sits close enough to the threshold that a human should look.
    pub borderline: bool,
    pub breakdown: ScoreBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<MatchDetails>,
    pub matched_at: DateTime<Utc>,
}

impl MatchResponse {
    pub fn from_ranked(
        ranked: &RankedMatch,
        matched_at: DateTime<Utc>,
        config: &MatchConfig,
        include_factors: bool,
    ) -> Self {
        let score = f64::from(ranked.result.score);
        Self {
            profile_id: ranked.result.profile_id.clone(),
            name: ranked.profile.name.clone(),
            score: ranked.result.score,
            strong_match: score >= config.strong_match_threshold,
            borderline: (score - config.strong_match_threshold).abs()
                <= config.borderline_margin,
            breakdown: ScoreBreakdown::from(&ranked.result.factors),
            details: include_factors.then(|| MatchDetails::from(&ranked.result)),
            matched_at,
        }
    }
}

/// The seven factor scores, flattened for the GUI.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScoreBreakdown {
    pub skills_complement: f32,
    pub values_alignment: f32,
    pub experience: f32,
    pub location: f32,
    pub availability: f32,
    pub commitment: f32,
    pub industry: f32,
}

impl From<&FactorBreakdown> for ScoreBreakdown {
    fn from(factors: &FactorBreakdown) -> Self {
        Self {
            skills_complement: factors.skills_complement.score as f32,
            values_alignment: factors.values_alignment.score as f32,
            experience: factors.experience.score as f32,
            location: factors.location.score as f32,
            availability: factors.availability.score as f32,
            commitment: factors.commitment.score as f32,
            industry: factors.industry.score as f32,
        }
    }
}

/// Per-factor explanations, included on request.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MatchDetails {
    pub skills_complement: Option<String>,
    pub values_alignment: Option<String>,
    pub experience: Option<String>,
    pub location: Option<String>,
    pub availability: Option<String>,
    pub commitment: Option<String>,
    pub industry: Option<String>,
}

impl From<&CompatibilityMatch> for MatchDetails {
    fn from(result: &CompatibilityMatch) -> Self {
        let factors = &result.factors;
        Self {
            skills_complement: Some(factors.skills_complement.details.clone()),
            values_alignment: Some(factors.values_alignment.details.clone()),
            experience: Some(factors.experience.details.clone()),
            location: Some(factors.location.details.clone()),
            availability: Some(factors.availability.details.clone()),
            commitment: Some(factors.commitment.details.clone()),
            industry: Some(factors.industry.details.clone()),
        }
    }
}

/// Response thresholds, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Scores at or above this count as strong matches (default 85).
    pub strong_match_threshold: f64,
    /// Scores within this of the threshold are flagged borderline.
    pub borderline_margin: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            strong_match_threshold: 85.0,
            borderline_margin: 5.0,
        }
    }
}

impl MatchConfig {
    pub fn from_env() -> Self {
        Self {
            strong_match_threshold: std::env::var("CF_STRONG_MATCH_THRESHOLD")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(85.0),
            borderline_margin: std::env::var("CF_BORDERLINE_MARGIN")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5.0),
        }
    }
}
