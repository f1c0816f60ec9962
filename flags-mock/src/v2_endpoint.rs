use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bytes::Bytes;
use serde_json::Value;

use crate::api::FlagsError;
use crate::router;
use crate::store::FlagPayload;

/// POST /api/v2/flags/:project_key
///
/// The body is buffered in full before parsing. Anything that does not
/// deserialize into a keyed payload is rejected as invalid JSON without
/// touching the store.
pub async fn create_flag(
    State(state): State<router::State>,
    Path(project_key): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), FlagsError> {
    let payload: FlagPayload =
        serde_json::from_slice(&body).map_err(|_| FlagsError::InvalidJson)?;

    let flag_key = payload.key.clone();
    let record = state.store.put(&project_key, payload);

    tracing::info!("created flag {} in project {}", flag_key, project_key);

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v2/flags/:project_key/:flag_key
pub async fn get_flag(
    State(state): State<router::State>,
    Path((project_key, flag_key)): Path<(String, String)>,
) -> Result<Json<Value>, FlagsError> {
    let record = state.store.get(&project_key, &flag_key)?;

    Ok(Json(record))
}

/// DELETE /api/v2/flags/:project_key/:flag_key
pub async fn delete_flag(
    State(state): State<router::State>,
    Path((project_key, flag_key)): Path<(String, String)>,
) -> Result<StatusCode, FlagsError> {
    state.store.delete(&project_key, &flag_key)?;

    tracing::info!("deleted flag {} from project {}", flag_key, project_key);

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v2/flags/:project_key/:flag_key/archive
pub async fn archive_flag(
    State(state): State<router::State>,
    Path((project_key, flag_key)): Path<(String, String)>,
) -> Result<Json<Value>, FlagsError> {
    let record = state.store.archive(&project_key, &flag_key)?;

    tracing::info!("archived flag {} in project {}", flag_key, project_key);

    Ok(Json(record))
}
