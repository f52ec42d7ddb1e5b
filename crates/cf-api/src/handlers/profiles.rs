use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use cf_common::Profile;

use crate::SharedState;
use crate::auth::AuthUser;
use crate::error::ApiError;

/// Upsert a profile. Profiles arriving without an id (fresh sign-ups) get
/// one minted; the stored form is echoed back so the client learns it.
pub async fn upsert_profile(
    State(state): State<SharedState>,
    _auth: AuthUser,
    Json(mut profile): Json<Profile>,
) -> Result<Json<Profile>, ApiError> {
    match profile.trimmed_id() {
        Some(id) => profile.id = Some(id.to_string()),
        None => profile.id = Some(Uuid::new_v4().to_string()),
    }

    state.store.save(&profile)?;
    Ok(Json(profile))
}

pub async fn get_profile(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    _auth: AuthUser,
) -> Result<Json<Profile>, ApiError> {
    let profile = state
        .store
        .load(&id)?
        .ok_or_else(|| ApiError::NotFound(format!("profile {id} not found")))?;

    Ok(Json(profile))
}

pub async fn list_profiles(
    State(state): State<SharedState>,
    _auth: AuthUser,
) -> Result<Json<Vec<Profile>>, ApiError> {
    Ok(Json(state.store.list()?))
}

pub async fn delete_profile(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    _auth: AuthUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !state.store.remove(&id)? {
        return Err(ApiError::NotFound(format!("profile {id} not found")));
    }

    Ok(Json(serde_json::json!({ "deleted": id })))
}
