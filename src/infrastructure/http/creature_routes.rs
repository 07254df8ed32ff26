//! Creature API routes

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    Json,
};
use std::sync::Arc;

use super::error::{ApiError, RequestContext};
use crate::application::dto::{
    CreateCreatureRequestDto, CreatureResponseDto, UpdateCreatureRequestDto,
};
use crate::application::services::CreatureService;
use crate::domain::value_objects::CreatureId;
use crate::infrastructure::state::AppState;

/// List all creatures
pub async fn list_creatures(
    State(state): State<Arc<AppState>>,
    ctx: RequestContext,
) -> Result<Json<Vec<CreatureResponseDto>>, ApiError> {
    let creatures = state
        .creature_service
        .get_all()
        .await
        .map_err(|e| ctx.error(e))?;

    Ok(Json(
        creatures.into_iter().map(CreatureResponseDto::from).collect(),
    ))
}

/// Create a creature in an existing zone
pub async fn create_creature(
    State(state): State<Arc<AppState>>,
    ctx: RequestContext,
    payload: Result<Json<CreateCreatureRequestDto>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<CreatureResponseDto>), ApiError> {
    let req = ctx.json(payload)?;

    let details = state
        .creature_service
        .create(req.into())
        .await
        .map_err(|e| ctx.error(e))?;

    let location = format!("/api/creatures/{}", details.creature.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CreatureResponseDto::from(details)),
    ))
}

/// Get a creature by ID
pub async fn get_creature(
    State(state): State<Arc<AppState>>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<Json<CreatureResponseDto>, ApiError> {
    let id: CreatureId = ctx.id(&id)?;

    let details = state
        .creature_service
        .get_by_id(id)
        .await
        .map_err(|e| ctx.error(e))?;

    Ok(Json(CreatureResponseDto::from(details)))
}

/// Update a creature; omitted or null fields are left unchanged
pub async fn update_creature(
    State(state): State<Arc<AppState>>,
    ctx: RequestContext,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCreatureRequestDto>, JsonRejection>,
) -> Result<Json<CreatureResponseDto>, ApiError> {
    let id: CreatureId = ctx.id(&id)?;
    let req = ctx.json(payload)?;

    let details = state
        .creature_service
        .update(id, req.into())
        .await
        .map_err(|e| ctx.error(e))?;

    Ok(Json(CreatureResponseDto::from(details)))
}

/// Delete a creature unless it is in critical health
pub async fn delete_creature(
    State(state): State<Arc<AppState>>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: CreatureId = ctx.id(&id)?;

    state
        .creature_service
        .delete(id)
        .await
        .map_err(|e| ctx.error(e))?;

    Ok(StatusCode::NO_CONTENT)
}
