use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;

use cf_common::api::match_request::MatchRequest;
use cf_common::api::match_response::MatchResponse;
use cf_common::matching::pipeline::{EngineConfig, MatchingEngine};
use cf_common::matching::scoring::calculate_compatibility;

use crate::SharedState;
use crate::auth::AuthUser;
use crate::error::ApiError;

const DEFAULT_MATCH_LIMIT: usize = 50;
const MAX_MATCH_LIMIT: usize = 200;

/// Rank every stored profile against the requested seeker.
pub async fn run_match(
    State(state): State<SharedState>,
    _auth: AuthUser,
    Json(request): Json<MatchRequest>,
) -> Result<Json<Vec<MatchResponse>>, ApiError> {
    let seeker_id = request.profile_id.trim();
    if seeker_id.is_empty() {
        return Err(ApiError::BadRequest("profile_id is required".into()));
    }

    let seeker = state
        .store
        .load(seeker_id)?
        .ok_or_else(|| ApiError::NotFound(format!("profile {seeker_id} not found")))?;

    if let Some(min_score) = request.min_score {
        if !(0.0..=100.0).contains(&min_score) {
            return Err(ApiError::BadRequest("min_score must be within 0..=100".into()));
        }
    }

    let mut config = EngineConfig {
        max_candidates: request
            .limit
            .unwrap_or(DEFAULT_MATCH_LIMIT)
            .clamp(1, MAX_MATCH_LIMIT),
        ..EngineConfig::default()
    };
    if let Some(min_score) = request.min_score {
        config.matching.min_match_score = min_score;
    }

    let pool = state.store.list()?;
    let engine = MatchingEngine::new(config);
    let ranked = engine.rank_candidates(&seeker, &pool);

    let matched_at = Utc::now();
    let responses = ranked
        .iter()
        .map(|entry| {
            MatchResponse::from_ranked(
                entry,
                matched_at,
                &state.match_config,
                request.include_factors,
            )
        })
        .collect();

    Ok(Json(responses))
}

/// Score a single pair, factors included. Backs the profile comparison view.
pub async fn get_compatibility(
    State(state): State<SharedState>,
    Path((id, other_id)): Path<(String, String)>,
    _auth: AuthUser,
) -> Result<Json<MatchResponse>, ApiError> {
    let seeker = state
        .store
        .load(&id)?
        .ok_or_else(|| ApiError::NotFound(format!("profile {id} not found")))?;
    let candidate = state
        .store
        .load(&other_id)?
        .ok_or_else(|| ApiError::NotFound(format!("profile {other_id} not found")))?;

    let result = calculate_compatibility(&seeker, &candidate);
    let ranked = cf_common::matching::pipeline::RankedMatch {
        profile: candidate,
        result,
    };

    Ok(Json(MatchResponse::from_ranked(
        &ranked,
        Utc::now(),
        &state.match_config,
        true,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_state;
    use cf_common::Profile;

    fn profile(id: &str, skills: &[&str], values: &[&str]) -> Profile {
        Profile {
            id: Some(id.into()),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            values: values.iter().map(|s| s.to_string()).collect(),
            location: Some("Berlin".into()),
            availability: Some("full-time".into()),
            commitment: Some("high".into()),
            ..Profile::default()
        }
    }

    #[tokio::test]
    async fn ranks_stored_candidates_excluding_seeker() {
        let state = test_state("test-key");
        state.store.save(&profile("me", &["Rust"], &["Craft"])).unwrap();
        state.store.save(&profile("good", &["Design"], &["Craft"])).unwrap();
        state.store.save(&profile("meh", &["Rust"], &["Scale"])).unwrap();

        let request = MatchRequest {
            profile_id: "me".into(),
            limit: None,
            min_score: None,
            include_factors: false,
        };

        let Json(responses) = run_match(
            State(state),
            crate::auth::AuthUser {
                subject: "api_key".into(),
            },
            Json(request),
        )
        .await
        .unwrap();

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].profile_id, "good");
        assert!(responses.iter().all(|r| r.profile_id != "me"));
        assert!(responses[0].score >= responses[1].score);
    }

    #[tokio::test]
    async fn unknown_seeker_is_not_found() {
        let state = test_state("test-key");
        let request = MatchRequest {
            profile_id: "ghost".into(),
            limit: None,
            min_score: None,
            include_factors: false,
        };

        let result = run_match(
            State(state),
            crate::auth::AuthUser {
                subject: "api_key".into(),
            },
            Json(request),
        )
        .await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn out_of_range_min_score_is_rejected() {
        let state = test_state("test-key");
        state.store.save(&profile("me", &["Rust"], &["Craft"])).unwrap();

        let request = MatchRequest {
            profile_id: "me".into(),
            limit: None,
            min_score: Some(150.0),
            include_factors: false,
        };

        let result = run_match(
            State(state),
            crate::auth::AuthUser {
                subject: "api_key".into(),
            },
            Json(request),
        )
        .await;

        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn pair_compatibility_includes_factor_details() {
        let state = test_state("test-key");
        state.store.save(&profile("a", &["Rust"], &["Craft"])).unwrap();
        state.store.save(&profile("b", &["Design"], &["Craft"])).unwrap();

        let Json(response) = get_compatibility(
            State(state),
            Path(("a".into(), "b".into())),
            crate::auth::AuthUser {
                subject: "api_key".into(),
            },
        )
        .await
        .unwrap();

        assert_eq!(response.profile_id, "b");
        assert!(response.details.is_some());
    }
}
