use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::flight::FlightStatus;
use crate::entities::pod::PodType;
use crate::entities::{flight, planet, pod};
use crate::error::{AppError, AppResult};
use crate::handlers::catalog::PlanetResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct PodResponse {
    pub id: Uuid,
    pub flight_id: Uuid,
    pub pod_number: String,
    pub pod_type: PodType,
    pub price_credits: Decimal,
    pub is_available: bool,
}

impl From<pod::Model> for PodResponse {
    fn from(p: pod::Model) -> Self {
        PodResponse {
            id: p.id,
            flight_id: p.flight_id,
            pod_number: p.pod_number,
            pod_type: p.pod_type,
            price_credits: p.price_credits,
            is_available: p.is_available,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FlightResponse {
    pub id: Uuid,
    pub flight_number: String,
    pub origin_planet: PlanetResponse,
    pub destination_planet: PlanetResponse,
    pub departure_at: DateTime<Utc>,
    pub arrival_at: DateTime<Utc>,
    pub seats_total: i32,
    pub seats_available: i32,
    pub price_credits: Decimal,
    pub status: FlightStatus,
    pub pods: Vec<PodResponse>,
}

fn build_flight_response(
    f: flight::Model,
    planets: &[planet::Model],
    pods: Vec<pod::Model>,
) -> AppResult<FlightResponse> {
    let origin = planets
        .iter()
        .find(|p| p.id == f.origin_planet_id)
        .cloned()
        .ok_or_else(|| AppError::Internal(format!("Origin planet missing for flight {}", f.id)))?;
    let destination = planets
        .iter()
        .find(|p| p.id == f.destination_planet_id)
        .cloned()
        .ok_or_else(|| {
            AppError::Internal(format!("Destination planet missing for flight {}", f.id))
        })?;

    Ok(FlightResponse {
        id: f.id,
        flight_number: f.flight_number,
        origin_planet: origin.into(),
        destination_planet: destination.into(),
        departure_at: f.departure_at.with_timezone(&Utc),
        arrival_at: f.arrival_at.with_timezone(&Utc),
        seats_total: f.seats_total,
        seats_available: f.seats_available,
        price_credits: f.price_credits,
        status: f.status,
        pods: pods.into_iter().map(PodResponse::from).collect(),
    })
}

#[derive(Debug, Deserialize)]
pub struct FlightFilter {
    pub origin: Option<String>,
    pub destination: Option<String>,
}

/// List flights with nested planets and pods. Optional `origin` and
/// `destination` planet slugs narrow independently and combine with AND.
pub async fn list_flights(
    State(state): State<AppState>,
    Query(filter): Query<FlightFilter>,
) -> AppResult<Json<Vec<FlightResponse>>> {
    let planets = planet::Entity::find().all(&state.db).await?;

    let mut query = flight::Entity::find().order_by_desc(flight::Column::DepartureAt);

    if let Some(origin) = &filter.origin {
        // An unknown slug matches nothing, same as filtering on a
        // planet that has no flights
        let origin_id = planets
            .iter()
            .find(|p| &p.slug == origin)
            .map(|p| p.id)
            .unwrap_or(-1);
        query = query.filter(flight::Column::OriginPlanetId.eq(origin_id));
    }
    if let Some(destination) = &filter.destination {
        let destination_id = planets
            .iter()
            .find(|p| &p.slug == destination)
            .map(|p| p.id)
            .unwrap_or(-1);
        query = query.filter(flight::Column::DestinationPlanetId.eq(destination_id));
    }

    let flights = query.all(&state.db).await?;

    let flight_ids: Vec<Uuid> = flights.iter().map(|f| f.id).collect();
    let mut pods = pod::Entity::find()
        .filter(pod::Column::FlightId.is_in(flight_ids))
        .order_by_asc(pod::Column::PodType)
        .order_by_asc(pod::Column::PodNumber)
        .all(&state.db)
        .await?;

    let mut responses = Vec::with_capacity(flights.len());
    for f in flights {
        let (own, rest): (Vec<_>, Vec<_>) = pods.into_iter().partition(|p| p.flight_id == f.id);
        pods = rest;
        responses.push(build_flight_response(f, &planets, own)?);
    }

    Ok(Json(responses))
}

/// Get one flight with its nested graph
pub async fn get_flight(
    State(state): State<AppState>,
    Path(flight_id): Path<Uuid>,
) -> AppResult<Json<FlightResponse>> {
    let flight = flight::Entity::find_by_id(flight_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Flight not found".to_string()))?;

    let planets = planet::Entity::find().all(&state.db).await?;
    let pods = pod::Entity::find()
        .filter(pod::Column::FlightId.eq(flight.id))
        .order_by_asc(pod::Column::PodType)
        .order_by_asc(pod::Column::PodNumber)
        .all(&state.db)
        .await?;

    Ok(Json(build_flight_response(flight, &planets, pods)?))
}

#[derive(Debug, Deserialize)]
pub struct CreateFlightRequest {
    pub flight_number: String,
    pub origin_planet_id: i32,
    pub destination_planet_id: i32,
    pub departure_at: DateTime<Utc>,
    pub arrival_at: DateTime<Utc>,
    pub seats_total: i32,
    pub price_credits: Decimal,
}

/// Create a flight. Currently unauthenticated; see DESIGN.md before
/// locking this down.
pub async fn create_flight(
    State(state): State<AppState>,
    Json(payload): Json<CreateFlightRequest>,
) -> AppResult<(StatusCode, Json<FlightResponse>)> {
    if payload.seats_total <= 0 {
        return Err(AppError::validation(
            "seats_total",
            "Must have at least 1 seat.",
        ));
    }

    let planets = planet::Entity::find().all(&state.db).await?;
    if !planets.iter().any(|p| p.id == payload.origin_planet_id) {
        return Err(AppError::NotFound("Origin planet not found".to_string()));
    }
    if !planets.iter().any(|p| p.id == payload.destination_planet_id) {
        return Err(AppError::NotFound(
            "Destination planet not found".to_string(),
        ));
    }

    let existing = flight::Entity::find()
        .filter(flight::Column::FlightNumber.eq(&payload.flight_number))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(
            "A flight with that flight number already exists".to_string(),
        ));
    }

    let now = Utc::now();
    let new_flight = flight::ActiveModel {
        id: Set(Uuid::new_v4()),
        flight_number: Set(payload.flight_number),
        origin_planet_id: Set(payload.origin_planet_id),
        destination_planet_id: Set(payload.destination_planet_id),
        departure_at: Set(payload.departure_at.into()),
        arrival_at: Set(payload.arrival_at.into()),
        seats_total: Set(payload.seats_total),
        // A new flight starts fully available
        seats_available: Set(payload.seats_total),
        price_credits: Set(payload.price_credits),
        status: Set(FlightStatus::Scheduled),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    let flight = new_flight.insert(&state.db).await?;

    tracing::info!(flight_number = %flight.flight_number, "Flight created");

    Ok((
        StatusCode::CREATED,
        Json(build_flight_response(flight, &planets, Vec::new())?),
    ))
}

#[derive(Debug, Deserialize)]
pub struct PodFilter {
    pub flight: Option<Uuid>,
}

/// List pods, ordered by type then pod number
pub async fn list_pods(
    State(state): State<AppState>,
    Query(filter): Query<PodFilter>,
) -> AppResult<Json<Vec<PodResponse>>> {
    let mut query = pod::Entity::find()
        .order_by_asc(pod::Column::PodType)
        .order_by_asc(pod::Column::PodNumber);

    if let Some(flight_id) = filter.flight {
        query = query.filter(pod::Column::FlightId.eq(flight_id));
    }

    let pods = query.all(&state.db).await?;
    Ok(Json(pods.into_iter().map(PodResponse::from).collect()))
}

#[derive(Debug, Deserialize)]
pub struct CreatePodRequest {
    pub flight_id: Uuid,
    pub pod_number: String,
    pub pod_type: PodType,
    pub price_credits: Decimal,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_true() -> bool {
    true
}

/// Create a pod on a flight
pub async fn create_pod(
    State(state): State<AppState>,
    Json(payload): Json<CreatePodRequest>,
) -> AppResult<(StatusCode, Json<PodResponse>)> {
    let flight = flight::Entity::find_by_id(payload.flight_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Flight not found".to_string()))?;

    let existing = pod::Entity::find()
        .filter(pod::Column::FlightId.eq(flight.id))
        .filter(pod::Column::PodNumber.eq(&payload.pod_number))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(
            "A pod with that number already exists on this flight".to_string(),
        ));
    }

    let new_pod = pod::ActiveModel {
        id: Set(Uuid::new_v4()),
        flight_id: Set(flight.id),
        pod_number: Set(payload.pod_number),
        pod_type: Set(payload.pod_type),
        price_credits: Set(payload.price_credits),
        is_available: Set(payload.is_available),
        created_at: Set(Utc::now().into()),
    };
    let pod = new_pod.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(pod.into())))
}
