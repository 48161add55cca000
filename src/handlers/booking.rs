use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::booking::BookingStatus;
use crate::entities::flight::FlightStatus;
use crate::entities::{booking, flight, planet, pod, user};
use crate::error::{AppError, AppResult};
use crate::handlers::catalog::PlanetResponse;
use crate::handlers::inventory::PodResponse;
use crate::utils::jwt::Claims;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct BookingUserInfo {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Serialize)]
pub struct BookingFlightInfo {
    pub id: Uuid,
    pub flight_number: String,
    pub origin_planet: PlanetResponse,
    pub destination_planet: PlanetResponse,
    pub departure_at: DateTime<Utc>,
    pub arrival_at: DateTime<Utc>,
    pub price_credits: Decimal,
    pub status: FlightStatus,
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub user: BookingUserInfo,
    pub flight: BookingFlightInfo,
    pub pod: Option<PodResponse>,
    pub status: BookingStatus,
    pub total_price: Decimal,
    pub booked_at: DateTime<Utc>,
}

fn build_booking_response(
    b: booking::Model,
    user: &user::Model,
    f: flight::Model,
    planets: &[planet::Model],
    pod: Option<pod::Model>,
) -> AppResult<BookingResponse> {
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

    Ok(BookingResponse {
        id: b.id,
        user: BookingUserInfo {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        },
        flight: BookingFlightInfo {
            id: f.id,
            flight_number: f.flight_number,
            origin_planet: origin.into(),
            destination_planet: destination.into(),
            departure_at: f.departure_at.with_timezone(&Utc),
            arrival_at: f.arrival_at.with_timezone(&Utc),
            price_credits: f.price_credits,
            status: f.status,
        },
        pod: pod.map(PodResponse::from),
        status: b.status,
        total_price: b.total_price,
        booked_at: b.booked_at.with_timezone(&Utc),
    })
}

async fn load_current_user(state: &AppState, user_id: Uuid) -> AppResult<user::Model> {
    user::Entity::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Unknown account".to_string()))
}

/// Find a booking visible to the caller. Foreign and unknown ids look
/// the same from the outside: NotFound.
async fn find_own_booking(
    state: &AppState,
    user_id: Uuid,
    booking_id: Uuid,
) -> AppResult<booking::Model> {
    booking::Entity::find_by_id(booking_id)
        .filter(booking::Column::UserId.eq(user_id))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))
}

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub flight_id: Uuid,
    pub pod_id: Option<Uuid>,
    pub total_price: Option<Decimal>,
}

/// Create a booking in `pending` state. The booking always belongs to
/// the authenticated caller, whatever the client claims.
///
/// Availability bookkeeping runs inside one transaction: the seat
/// decrement and pod flip are conditional updates, so two concurrent
/// requests cannot oversell the last seat or the same pod.
pub async fn create_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    let user = load_current_user(&state, claims.sub).await?;

    let flight = flight::Entity::find_by_id(payload.flight_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Flight not found".to_string()))?;

    let pod = match payload.pod_id {
        Some(pod_id) => {
            let pod = pod::Entity::find_by_id(pod_id)
                .one(&state.db)
                .await?
                .ok_or_else(|| AppError::NotFound("Pod not found".to_string()))?;
            if pod.flight_id != flight.id {
                return Err(AppError::BadRequest(
                    "Pod does not belong to this flight".to_string(),
                ));
            }
            Some(pod)
        }
        None => None,
    };

    // One booking per (user, flight, pod)
    let mut duplicate_query = booking::Entity::find()
        .filter(booking::Column::UserId.eq(user.id))
        .filter(booking::Column::FlightId.eq(flight.id));
    duplicate_query = match payload.pod_id {
        Some(pod_id) => duplicate_query.filter(booking::Column::PodId.eq(pod_id)),
        None => duplicate_query.filter(booking::Column::PodId.is_null()),
    };
    if duplicate_query.one(&state.db).await?.is_some() {
        return Err(AppError::Conflict(
            "You already have a booking for this flight and pod".to_string(),
        ));
    }

    let total_price = payload.total_price.unwrap_or_else(|| {
        flight.price_credits
            + pod
                .as_ref()
                .map(|p| p.price_credits)
                .unwrap_or(Decimal::ZERO)
    });

    let txn = state.db.begin().await?;

    let seats = flight::Entity::update_many()
        .col_expr(
            flight::Column::SeatsAvailable,
            Expr::col(flight::Column::SeatsAvailable).sub(1),
        )
        .filter(flight::Column::Id.eq(flight.id))
        .filter(flight::Column::SeatsAvailable.gt(0))
        .exec(&txn)
        .await?;
    if seats.rows_affected == 0 {
        return Err(AppError::Conflict(
            "No seats available on this flight".to_string(),
        ));
    }

    if let Some(p) = &pod {
        let flipped = pod::Entity::update_many()
            .col_expr(pod::Column::IsAvailable, Expr::value(false))
            .filter(pod::Column::Id.eq(p.id))
            .filter(pod::Column::IsAvailable.eq(true))
            .exec(&txn)
            .await?;
        if flipped.rows_affected == 0 {
            return Err(AppError::Conflict("Pod is no longer available".to_string()));
        }
    }

    let now = Utc::now();
    let new_booking = booking::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user.id),
        flight_id: Set(flight.id),
        pod_id: Set(payload.pod_id),
        status: Set(BookingStatus::Pending),
        total_price: Set(total_price),
        booked_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    let booking = new_booking.insert(&txn).await?;

    txn.commit().await?;

    tracing::info!(
        booking_id = %booking.id,
        flight_number = %flight.flight_number,
        "Booking created"
    );

    let planets = planet::Entity::find().all(&state.db).await?;
    // Reflect the pod flip done inside the transaction
    let pod = pod.map(|mut p| {
        p.is_available = false;
        p
    });
    let response = build_booking_response(booking, &user, flight, &planets, pod)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// List the caller's bookings, newest first
pub async fn my_bookings(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> AppResult<Json<Vec<BookingResponse>>> {
    let user = load_current_user(&state, claims.sub).await?;

    let bookings = booking::Entity::find()
        .filter(booking::Column::UserId.eq(user.id))
        .order_by_desc(booking::Column::BookedAt)
        .all(&state.db)
        .await?;

    let flight_ids: Vec<Uuid> = bookings.iter().map(|b| b.flight_id).collect();
    let pod_ids: Vec<Uuid> = bookings.iter().filter_map(|b| b.pod_id).collect();

    let flights = flight::Entity::find()
        .filter(flight::Column::Id.is_in(flight_ids))
        .all(&state.db)
        .await?;
    let pods = pod::Entity::find()
        .filter(pod::Column::Id.is_in(pod_ids))
        .all(&state.db)
        .await?;
    let planets = planet::Entity::find().all(&state.db).await?;

    let mut responses = Vec::with_capacity(bookings.len());
    for b in bookings {
        let flight = flights
            .iter()
            .find(|f| f.id == b.flight_id)
            .cloned()
            .ok_or_else(|| AppError::Internal(format!("Flight missing for booking {}", b.id)))?;
        let pod = b.pod_id.and_then(|pid| pods.iter().find(|p| p.id == pid).cloned());
        responses.push(build_booking_response(b, &user, flight, &planets, pod)?);
    }

    Ok(Json(responses))
}

/// Confirm a pending booking. No payment check happens here yet.
pub async fn confirm_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(booking_id): Path<Uuid>,
) -> AppResult<Json<BookingResponse>> {
    let user = load_current_user(&state, claims.sub).await?;
    let booking = find_own_booking(&state, user.id, booking_id).await?;

    let booking = match booking.status {
        // Re-confirming is a no-op
        BookingStatus::Confirmed => booking,
        BookingStatus::Pending => {
            let mut active: booking::ActiveModel = booking.into();
            active.status = Set(BookingStatus::Confirmed);
            active.updated_at = Set(Utc::now().into());
            active.update(&state.db).await?
        }
        BookingStatus::Cancelled => {
            return Err(AppError::Conflict(
                "Cannot confirm a cancelled booking".to_string(),
            ));
        }
        BookingStatus::Completed => {
            return Err(AppError::Conflict(
                "Cannot confirm a completed booking".to_string(),
            ));
        }
    };

    finish_booking_response(&state, booking, &user).await
}

/// Cancel a booking from any state. Idempotent; the seat and pod are
/// returned to inventory only on the first transition into cancelled.
pub async fn cancel_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(booking_id): Path<Uuid>,
) -> AppResult<Json<BookingResponse>> {
    let user = load_current_user(&state, claims.sub).await?;
    let booking = find_own_booking(&state, user.id, booking_id).await?;

    let booking = if booking.status == BookingStatus::Cancelled {
        booking
    } else {
        let txn = state.db.begin().await?;

        flight::Entity::update_many()
            .col_expr(
                flight::Column::SeatsAvailable,
                Expr::col(flight::Column::SeatsAvailable).add(1),
            )
            .filter(flight::Column::Id.eq(booking.flight_id))
            .filter(Expr::col(flight::Column::SeatsAvailable).lt(Expr::col(flight::Column::SeatsTotal)))
            .exec(&txn)
            .await?;

        if let Some(pod_id) = booking.pod_id {
            pod::Entity::update_many()
                .col_expr(pod::Column::IsAvailable, Expr::value(true))
                .filter(pod::Column::Id.eq(pod_id))
                .exec(&txn)
                .await?;
        }

        let mut active: booking::ActiveModel = booking.into();
        active.status = Set(BookingStatus::Cancelled);
        active.updated_at = Set(Utc::now().into());
        let booking = active.update(&txn).await?;

        txn.commit().await?;

        tracing::info!(booking_id = %booking.id, "Booking cancelled");
        booking
    };

    finish_booking_response(&state, booking, &user).await
}

async fn finish_booking_response(
    state: &AppState,
    booking: booking::Model,
    user: &user::Model,
) -> AppResult<Json<BookingResponse>> {
    let flight = flight::Entity::find_by_id(booking.flight_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::Internal(format!("Flight missing for booking {}", booking.id)))?;
    let pod = match booking.pod_id {
        Some(pod_id) => pod::Entity::find_by_id(pod_id).one(&state.db).await?,
        None => None,
    };
    let planets = planet::Entity::find().all(&state.db).await?;

    Ok(Json(build_booking_response(
        booking, user, flight, &planets, pod,
    )?))
}
