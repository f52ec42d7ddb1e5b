use serde::Deserialize;

/// Match request from the HTTP API.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    /// Seeker profile to rank candidates for; must already be stored.
    pub profile_id: String,
    #[serde(default)]
    pub limit: Option<usize>,
    /// Overrides the engine's minimum score (0–100) for this request.
    #[serde(default)]
    pub min_score: Option<f64>,
    /// Include per-factor detail strings in the response.
    #[serde(default)]
    pub include_factors: bool,
}
