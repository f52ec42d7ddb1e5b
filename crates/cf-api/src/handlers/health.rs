use axum::{Json, extract::State};
use serde_json::json;

use crate::SharedState;
use crate::error::ApiError;

pub async fn livez() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn readyz(State(state): State<SharedState>) -> Result<Json<serde_json::Value>, ApiError> {
    if !state.readiness.load(std::sync::atomic::Ordering::SeqCst) {
        return Err(ApiError::ServiceUnavailable("shutting_down".into()));
    }

    // Exercise the store so a broken backing file fails readiness, not the
    // first real request.
    let profiles = state
        .store
        .list()
        .map_err(|err| ApiError::ServiceUnavailable(format!("store check failed: {err}")))?;

    Ok(Json(json!({
        "status": "ok",
        "profiles": profiles.len(),
        "application": env!("CARGO_PKG_NAME"),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_state;
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn readyz_reports_profile_count() {
        let state = test_state("test-key");
        let response = readyz(State(state)).await.unwrap();
        assert_eq!(response.0["status"], "ok");
        assert_eq!(response.0["profiles"], 0);
    }

    #[tokio::test]
    async fn readyz_rejects_when_shutting_down() {
        let state = test_state("test-key");
        state.readiness.store(false, Ordering::SeqCst);

        match readyz(State(state)).await {
            Err(ApiError::ServiceUnavailable(code)) => assert!(code.contains("shutting_down")),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
