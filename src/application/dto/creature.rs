use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{
    health_status_not_blank, name_not_blank, name_not_blank_when_provided, species_not_blank,
};
use crate::application::services::{
    CreateCreatureRequest, CreatureDetails, UpdateCreatureRequest,
};
use crate::domain::entities::ZoneRef;
use crate::domain::value_objects::ZoneId;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCreatureRequestDto {
    #[serde(default)]
    #[validate(
        required(message = "name must not be blank"),
        custom(function = "name_not_blank")
    )]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(
        required(message = "species must not be blank"),
        custom(function = "species_not_blank")
    )]
    pub species: Option<String>,
    #[serde(default)]
    #[validate(
        required(message = "size must not be null"),
        range(min = 0.1, message = "size must be at least 0.1")
    )]
    pub size: Option<f64>,
    #[serde(default)]
    #[validate(
        required(message = "dangerLevel must not be null"),
        range(min = 1, max = 5, message = "dangerLevel must be between 1 and 5")
    )]
    pub danger_level: Option<i32>,
    #[serde(default)]
    #[validate(
        required(message = "healthStatus must not be blank"),
        custom(function = "health_status_not_blank")
    )]
    pub health_status: Option<String>,
    #[serde(default)]
    #[validate(required(message = "zoneId must not be null"))]
    pub zone_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCreatureRequestDto {
    #[serde(default)]
    #[validate(custom(function = "name_not_blank_when_provided"))]
    pub name: Option<String>,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.1, message = "size must be at least 0.1"))]
    pub size: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 1, max = 5, message = "dangerLevel must be between 1 and 5"))]
    pub danger_level: Option<i32>,
    #[serde(default)]
    pub health_status: Option<String>,
    #[serde(default)]
    pub zone_id: Option<i64>,
}

impl From<CreateCreatureRequestDto> for CreateCreatureRequest {
    fn from(dto: CreateCreatureRequestDto) -> Self {
        Self {
            name: dto.name.unwrap_or_default(),
            species: dto.species.unwrap_or_default(),
            size: dto.size,
            danger_level: dto.danger_level,
            health_status: dto.health_status.unwrap_or_default(),
            zone_id: dto.zone_id.map(ZoneId::new),
        }
    }
}

impl From<UpdateCreatureRequestDto> for UpdateCreatureRequest {
    fn from(dto: UpdateCreatureRequestDto) -> Self {
        Self {
            name: dto.name,
            species: dto.species,
            size: dto.size,
            danger_level: dto.danger_level,
            health_status: dto.health_status,
            zone_id: dto.zone_id.map(ZoneId::new),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ZoneRefResponseDto {
    pub id: i64,
    pub name: String,
}

impl From<ZoneRef> for ZoneRefResponseDto {
    fn from(z: ZoneRef) -> Self {
        Self {
            id: z.id.value(),
            name: z.name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureResponseDto {
    pub id: i64,
    pub name: String,
    pub species: String,
    pub size: f64,
    pub danger_level: i32,
    pub health_status: String,
    pub zone: ZoneRefResponseDto,
}

impl From<CreatureDetails> for CreatureResponseDto {
    fn from(d: CreatureDetails) -> Self {
        let c = d.creature;
        Self {
            id: c.id.value(),
            name: c.name,
            species: c.species,
            size: c.size,
            danger_level: c.danger_level,
            health_status: c.health_status,
            zone: ZoneRefResponseDto::from(d.zone),
        }
    }
}
