use axum::{
    extract::{Path, State},
    Json,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;

use crate::entities::planet;
use crate::error::{AppError, AppResult};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct PlanetResponse {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub gltf_model_url: String,
    pub distance_from_earth_km: f64,
    pub travel_time_days: i32,
    pub emoji: String,
}

impl From<planet::Model> for PlanetResponse {
    fn from(p: planet::Model) -> Self {
        PlanetResponse {
            id: p.id,
            name: p.name,
            slug: p.slug,
            description: p.description,
            gltf_model_url: p.gltf_model_url,
            distance_from_earth_km: p.distance_from_earth_km,
            travel_time_days: p.travel_time_days,
            emoji: p.emoji,
        }
    }
}

/// List all destinations, nearest first
pub async fn list_planets(State(state): State<AppState>) -> AppResult<Json<Vec<PlanetResponse>>> {
    let planets = planet::Entity::find()
        .order_by_asc(planet::Column::DistanceFromEarthKm)
        .all(&state.db)
        .await?;

    Ok(Json(planets.into_iter().map(PlanetResponse::from).collect()))
}

/// Get one destination by slug
pub async fn get_planet(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<PlanetResponse>> {
    let planet = planet::Entity::find()
        .filter(planet::Column::Slug.eq(&slug))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Planet not found".to_string()))?;

    Ok(Json(planet.into()))
}
