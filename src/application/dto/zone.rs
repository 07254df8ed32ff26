use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::zone_name_not_blank;
use crate::application::services::{CreateZoneRequest, UpdateZoneRequest};
use crate::domain::entities::{Zone, ZoneSummary};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateZoneRequestDto {
    #[serde(default)]
    #[validate(
        required(message = "Zone name must not be blank"),
        custom(function = "zone_name_not_blank")
    )]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(length(max = 255, message = "description must be at most 255 characters"))]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(range(min = 1, message = "capacity must be at least 1"))]
    pub capacity: Option<i32>,
}

/// Blank names are left to the service, which rejects them as an invalid argument
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateZoneRequestDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(length(max = 255, message = "description must be at most 255 characters"))]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(range(min = 1, message = "capacity must be at least 1"))]
    pub capacity: Option<i32>,
}

impl From<CreateZoneRequestDto> for CreateZoneRequest {
    fn from(dto: CreateZoneRequestDto) -> Self {
        Self {
            name: dto.name.unwrap_or_default(),
            description: dto.description,
            capacity: dto.capacity,
        }
    }
}

impl From<UpdateZoneRequestDto> for UpdateZoneRequest {
    fn from(dto: UpdateZoneRequestDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            capacity: dto.capacity,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneResponseDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub capacity: Option<i32>,
}

impl From<Zone> for ZoneResponseDto {
    fn from(z: Zone) -> Self {
        Self {
            id: z.id.value(),
            name: z.name,
            description: z.description,
            capacity: z.capacity,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSummaryResponseDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub creature_count: i64,
}

impl From<ZoneSummary> for ZoneSummaryResponseDto {
    fn from(s: ZoneSummary) -> Self {
        Self {
            id: s.id.value(),
            name: s.name,
            description: s.description,
            capacity: s.capacity,
            creature_count: s.creature_count,
        }
    }
}
