use super::{
    location::evaluate_location,
    skills::{score_skills_complement, score_tag_alignment, NEUTRAL_SCORE},
    weights::{Weights, DEFAULT_WEIGHTS},
};
use crate::tag_normalizer::normalize_keyword;
use crate::Profile;

#[derive(Debug, Clone)]
pub struct MatchingConfig {
    pub weights: Weights,
    /// Candidates scoring below this (0–100) are dropped by the pipeline.
    pub min_match_score: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
            min_match_score: env_min_match_score(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FactorScore {
    /// 0–100.
    pub score: f64,
    pub status: &'static str,
    pub details: String,
}

/// The seven sub-scores behind an overall compatibility score.
#[derive(Debug, Clone)]
pub struct FactorBreakdown {
    pub skills_complement: FactorScore,
    pub values_alignment: FactorScore,
    pub experience: FactorScore,
    pub location: FactorScore,
    pub availability: FactorScore,
    pub commitment: FactorScore,
    pub industry: FactorScore,
}

impl FactorBreakdown {
    pub fn weighted_total(&self, weights: &Weights) -> f64 {
        self.skills_complement.score * weights.skills_complement
            + self.values_alignment.score * weights.values_alignment
            + self.experience.score * weights.experience
            + self.location.score * weights.location
            + self.availability.score * weights.availability
            + self.commitment.score * weights.commitment
            + self.industry.score * weights.industry
    }
}

#[derive(Debug, Clone)]
pub struct CompatibilityMatch {
    /// Id of the candidate profile that was scored against.
    pub profile_id: String,
    /// Rounded weighted sum, always in 0..=100.
    pub score: u8,
    pub factors: FactorBreakdown,
}

/// Score a candidate against a seeker with the default configuration.
///
/// Deterministic, no side effects, total: missing or empty fields fall back
/// to neutral defaults rather than erroring.
pub fn calculate_compatibility(seeker: &Profile, candidate: &Profile) -> CompatibilityMatch {
    CompatibilityEngine::default().calculate(seeker, candidate)
}

pub struct CompatibilityEngine {
    config: MatchingConfig,
}

impl Default for CompatibilityEngine {
    fn default() -> Self {
        Self::new(MatchingConfig::default())
    }
}

impl CompatibilityEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    pub fn calculate(&self, seeker: &Profile, candidate: &Profile) -> CompatibilityMatch {
        let factors = FactorBreakdown {
            skills_complement: self.score_skills(seeker, candidate),
            values_alignment: self.score_values(seeker, candidate),
            experience: self.score_experience(seeker, candidate),
            location: self.score_location(seeker, candidate),
            availability: self.score_availability(seeker, candidate),
            commitment: self.score_commitment(seeker, candidate),
            industry: self.score_industry(seeker, candidate),
        };

        let total = factors.weighted_total(&self.config.weights);

        CompatibilityMatch {
            profile_id: candidate.id.clone().unwrap_or_default(),
            score: total.round().clamp(0.0, 100.0) as u8,
            factors,
        }
    }

    fn score_skills(&self, seeker: &Profile, candidate: &Profile) -> FactorScore {
        let result = score_skills_complement(&seeker.skills, &candidate.skills);
        FactorScore {
            score: result.score,
            status: status_from_score(result.score, result.neutral),
            details: result.reason,
        }
    }

    fn score_values(&self, seeker: &Profile, candidate: &Profile) -> FactorScore {
        let result = score_tag_alignment("value", &seeker.values, &candidate.values);
        FactorScore {
            score: result.score,
            status: status_from_score(result.score, result.neutral),
            details: result.reason,
        }
    }

    fn score_industry(&self, seeker: &Profile, candidate: &Profile) -> FactorScore {
        let result = score_tag_alignment("industry", &seeker.industry, &candidate.industry);
        FactorScore {
            score: result.score,
            status: status_from_score(result.score, result.neutral),
            details: result.reason,
        }
    }

    fn score_experience(&self, seeker: &Profile, candidate: &Profile) -> FactorScore {
        let level_a = experience_level(seeker.experience.as_deref());
        let level_b = experience_level(candidate.experience.as_deref());
        let gap = (level_a - level_b).abs();

        // A peer is ideal, one step apart is nearly as good; a wider gap
        // usually means mentor/mentee rather than co-founders.
        let score = match gap {
            0 => 90.0,
            1 => 85.0,
            _ => 70.0,
        };

        FactorScore {
            score,
            status: status_from_score(score, false),
            details: format!("experience levels {level_a} vs {level_b} (gap {gap})"),
        }
    }

    fn score_location(&self, seeker: &Profile, candidate: &Profile) -> FactorScore {
        let evaluation = evaluate_location(seeker, candidate);
        FactorScore {
            score: evaluation.score,
            status: status_from_score(evaluation.score, evaluation.neutral),
            details: evaluation.details,
        }
    }

    fn score_availability(&self, seeker: &Profile, candidate: &Profile) -> FactorScore {
        let a = seeker.availability.as_deref().map(normalize_keyword);
        let b = candidate.availability.as_deref().map(normalize_keyword);

        let (score, neutral, details) = match (a.as_deref(), b.as_deref()) {
            (None, _) | (_, None) | (Some(""), _) | (_, Some("")) => (
                NEUTRAL_SCORE,
                true,
                "availability unknown on one side, neutral score".to_string(),
            ),
            (Some(x), Some(y)) if x == y => (100.0, false, format!("both available {x}")),
            (Some("full-time"), Some("part-time")) | (Some("part-time"), Some("full-time")) => {
                (60.0, false, "full-time vs part-time".to_string())
            }
            (Some(x), Some(y)) => (40.0, false, format!("availability mismatch: {x} vs {y}")),
        };

        FactorScore {
            score,
            status: status_from_score(score, neutral),
            details,
        }
    }

    fn score_commitment(&self, seeker: &Profile, candidate: &Profile) -> FactorScore {
        let a = seeker.commitment.as_deref().map(normalize_keyword);
        let b = candidate.commitment.as_deref().map(normalize_keyword);

        let (score, neutral, details) = match (a.as_deref(), b.as_deref()) {
            (None, _) | (_, None) | (Some(""), _) | (_, Some("")) => (
                NEUTRAL_SCORE,
                true,
                "commitment unknown on one side, neutral score".to_string(),
            ),
            (Some(x), Some(y)) if x == y => (100.0, false, format!("both committed {x}")),
            (Some("high"), Some("medium")) | (Some("medium"), Some("high")) => {
                (80.0, false, "high vs medium commitment".to_string())
            }
            (Some("high"), Some("low")) | (Some("low"), Some("high")) => {
                (30.0, false, "high vs low commitment".to_string())
            }
            (Some(x), Some(y)) => (50.0, false, format!("commitment gap: {x} vs {y}")),
        };

        FactorScore {
            score,
            status: status_from_score(score, neutral),
            details,
        }
    }
}

fn experience_level(raw: Option<&str>) -> i32 {
    match raw.map(normalize_keyword).as_deref() {
        Some("beginner") => 1,
        Some("expert") => 3,
        // "intermediate", unrecognized labels, and missing all read as mid.
        _ => 2,
    }
}

fn env_min_match_score() -> f64 {
    std::env::var("CF_MIN_MATCH_SCORE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.0)
}

fn status_from_score(score: f64, neutral: bool) -> &'static str {
    if neutral {
        "UNKNOWN"
    } else if score >= 90.0 {
        "PERFECT_MATCH"
    } else if score >= 70.0 {
        "MATCH"
    } else if score >= 40.0 {
        "PARTIAL_MATCH"
    } else {
        "MISS"
    }
}
