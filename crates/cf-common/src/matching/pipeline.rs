use super::scoring::{CompatibilityEngine, CompatibilityMatch, MatchingConfig};
use crate::Profile;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub matching: MatchingConfig,
    /// Maximum candidates returned (score-descending, then truncated).
    pub max_candidates: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            matching: MatchingConfig::default(),
            max_candidates: 50,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RankedMatch {
    pub profile: Profile,
    pub result: CompatibilityMatch,
}

pub struct MatchingEngine {
    engine: CompatibilityEngine,
    max_candidates: usize,
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl MatchingEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: CompatibilityEngine::new(config.matching),
            max_candidates: config.max_candidates,
        }
    }

    /// Score one candidate, returning None when it is the seeker's own
    /// profile or lands below the configured minimum score.
    pub fn evaluate_candidate(&self, seeker: &Profile, candidate: &Profile) -> Option<RankedMatch> {
        if let (Some(seeker_id), Some(candidate_id)) = (seeker.trimmed_id(), candidate.trimmed_id())
        {
            if seeker_id == candidate_id {
                return None;
            }
        }

        let result = self.engine.calculate(seeker, candidate);
        if f64::from(result.score) < self.engine.config().min_match_score {
            return None;
        }

        Some(RankedMatch {
            profile: candidate.clone(),
            result,
        })
    }

    /// Score the whole pool and return it best-first. Sorting is stable, so
    /// equal scores keep the pool's original order.
    pub fn rank_candidates(&self, seeker: &Profile, pool: &[Profile]) -> Vec<RankedMatch> {
        let mut ranked: Vec<_> = pool
            .iter()
            .filter_map(|candidate| self.evaluate_candidate(seeker, candidate))
            .collect();

        ranked.sort_by(|a, b| b.result.score.cmp(&a.result.score));
        ranked.truncate(self.max_candidates);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeker() -> Profile {
        Profile {
            id: Some("seeker".into()),
            skills: vec!["Rust".into(), "Backend".into()],
            values: vec!["Craft".into()],
            experience: Some("expert".into()),
            location: Some("Berlin".into()),
            availability: Some("full-time".into()),
            commitment: Some("high".into()),
            industry: vec!["DevTools".into()],
            ..Profile::default()
        }
    }

    fn strong_candidate() -> Profile {
        Profile {
            id: Some("strong".into()),
            skills: vec!["Design".into(), "Sales".into()],
            values: vec!["Craft".into()],
            experience: Some("expert".into()),
            location: Some("Berlin".into()),
            availability: Some("full-time".into()),
            commitment: Some("high".into()),
            industry: vec!["DevTools".into()],
            ..Profile::default()
        }
    }

    fn weak_candidate() -> Profile {
        Profile {
            id: Some("weak".into()),
            skills: vec!["Rust".into(), "Backend".into()],
            values: vec!["Scale".into()],
            experience: Some("beginner".into()),
            location: Some("Tokyo".into()),
            availability: Some("weekends".into()),
            commitment: Some("low".into()),
            industry: vec!["Gaming".into()],
            ..Profile::default()
        }
    }

    #[test]
    fn ranks_candidates_best_first() {
        let engine = MatchingEngine::default();
        let ranked = engine.rank_candidates(&seeker(), &[weak_candidate(), strong_candidate()]);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].result.profile_id, "strong");
        assert!(ranked[0].result.score > ranked[1].result.score);
    }

    #[test]
    fn skips_own_profile() {
        let engine = MatchingEngine::default();
        let me = seeker();
        let ranked = engine.rank_candidates(&seeker(), &[me, strong_candidate()]);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].result.profile_id, "strong");
    }

    #[test]
    fn min_score_filters_weak_matches() {
        let mut config = EngineConfig::default();
        config.matching.min_match_score = 80.0;
        let engine = MatchingEngine::new(config);

        let ranked = engine.rank_candidates(&seeker(), &[weak_candidate(), strong_candidate()]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].result.profile_id, "strong");
    }

    #[test]
    fn truncates_to_max_candidates() {
        let config = EngineConfig {
            max_candidates: 1,
            ..EngineConfig::default()
        };
        let engine = MatchingEngine::new(config);

        let ranked = engine.rank_candidates(&seeker(), &[weak_candidate(), strong_candidate()]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].result.profile_id, "strong");
    }

    #[test]
    fn profiles_without_ids_are_still_scored() {
        let engine = MatchingEngine::default();
        let mut anonymous = strong_candidate();
        anonymous.id = None;

        let ranked = engine.rank_candidates(&seeker(), &[anonymous]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].result.profile_id, "");
    }
}
