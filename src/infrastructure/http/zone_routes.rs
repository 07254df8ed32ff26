//! Zone API routes

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    Json,
};
use std::sync::Arc;
use tracing::debug;

use super::error::{ApiError, RequestContext};
use crate::application::dto::{
    CreateZoneRequestDto, UpdateZoneRequestDto, ZoneResponseDto, ZoneSummaryResponseDto,
};
use crate::application::services::{ZoneCreation, ZoneService};
use crate::domain::value_objects::ZoneId;
use crate::infrastructure::state::AppState;

/// List zones with their creature counts (also served as `/api/zones/summary`)
pub async fn list_zones(
    State(state): State<Arc<AppState>>,
    ctx: RequestContext,
) -> Result<Json<Vec<ZoneSummaryResponseDto>>, ApiError> {
    let summary = state
        .zone_service
        .find_summary()
        .await
        .map_err(|e| ctx.error(e))?;

    Ok(Json(
        summary.into_iter().map(ZoneSummaryResponseDto::from).collect(),
    ))
}

/// Create a zone, or return the existing zone with the same name
pub async fn create_zone(
    State(state): State<Arc<AppState>>,
    ctx: RequestContext,
    payload: Result<Json<CreateZoneRequestDto>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<ZoneResponseDto>), ApiError> {
    let req = ctx.json(payload)?;

    let creation = state
        .zone_service
        .create_or_get(req.into())
        .await
        .map_err(|e| ctx.error(e))?;

    if let ZoneCreation::Existing(zone) = &creation {
        debug!(zone_id = %zone.id, "Zone create resolved to existing zone");
    }

    let zone = creation.into_zone();
    let location = format!("/api/zones/{}", zone.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ZoneResponseDto::from(zone)),
    ))
}

/// Get a zone by ID
pub async fn get_zone(
    State(state): State<Arc<AppState>>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<Json<ZoneResponseDto>, ApiError> {
    let id: ZoneId = ctx.id(&id)?;

    let zone = state
        .zone_service
        .find_one(id)
        .await
        .map_err(|e| ctx.error(e))?;

    Ok(Json(ZoneResponseDto::from(zone)))
}

/// Update a zone; omitted or null fields are left unchanged
pub async fn update_zone(
    State(state): State<Arc<AppState>>,
    ctx: RequestContext,
    Path(id): Path<String>,
    payload: Result<Json<UpdateZoneRequestDto>, JsonRejection>,
) -> Result<Json<ZoneResponseDto>, ApiError> {
    let id: ZoneId = ctx.id(&id)?;
    let req = ctx.json(payload)?;

    let zone = state
        .zone_service
        .update(id, req.into())
        .await
        .map_err(|e| ctx.error(e))?;

    Ok(Json(ZoneResponseDto::from(zone)))
}

/// Delete a zone that has no creatures
pub async fn delete_zone(
    State(state): State<Arc<AppState>>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: ZoneId = ctx.id(&id)?;

    state
        .zone_service
        .delete(id)
        .await
        .map_err(|e| ctx.error(e))?;

    Ok(StatusCode::NO_CONTENT)
}
