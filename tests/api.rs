use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend,
    EntityTrait, PaginatorTrait, Schema, Set,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use space_travel_backend::entities::flight::FlightStatus;
use space_travel_backend::entities::pod::PodType;
use space_travel_backend::entities::{booking, flight, planet, pod, profile};
use space_travel_backend::utils::slug::slugify;
use space_travel_backend::{routes, AppState, Config};

async fn setup() -> (Router, DatabaseConnection) {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // A single connection keeps every query on the same in-memory database
    options.max_connections(1);
    let db = Database::connect(options).await.unwrap();

    let schema = Schema::new(DbBackend::Sqlite);
    let backend = db.get_database_backend();
    db.execute(backend.build(&schema.create_table_from_entity(
        space_travel_backend::entities::user::Entity,
    )))
    .await
    .unwrap();
    db.execute(backend.build(&schema.create_table_from_entity(profile::Entity)))
        .await
        .unwrap();
    db.execute(backend.build(&schema.create_table_from_entity(planet::Entity)))
        .await
        .unwrap();
    db.execute(backend.build(&schema.create_table_from_entity(flight::Entity)))
        .await
        .unwrap();
    db.execute(backend.build(&schema.create_table_from_entity(pod::Entity)))
        .await
        .unwrap();
    db.execute(backend.build(&schema.create_table_from_entity(booking::Entity)))
        .await
        .unwrap();

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret".to_string(),
        access_token_minutes: 60,
        refresh_token_days: 7,
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        seed_demo_data: false,
    };

    let state = AppState {
        db: db.clone(),
        config,
    };

    (routes::create_router(state), db)
}

async fn send(
    app: &Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn register(app: &Router, username: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/api/v1/accounts/register",
        None,
        Some(json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "first_name": "Test",
            "last_name": "User",
            "password": "password123",
            "password2": "password123",
        })),
    )
    .await
}

async fn login(app: &Router, username: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/accounts/login",
        None,
        Some(json!({ "username": username, "password": "password123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["access"].as_str().unwrap().to_string()
}

async fn insert_planet(db: &DatabaseConnection, name: &str, distance: f64) -> planet::Model {
    let now = Utc::now();
    planet::ActiveModel {
        name: Set(name.to_string()),
        slug: Set(slugify(name)),
        description: Set(format!("{} description", name)),
        gltf_model_url: Set(String::new()),
        distance_from_earth_km: Set(distance),
        travel_time_days: Set(10),
        emoji: Set("🪐".to_string()),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

async fn insert_flight(
    db: &DatabaseConnection,
    number: &str,
    origin: &planet::Model,
    destination: &planet::Model,
    seats: i32,
) -> flight::Model {
    let now = Utc::now();
    flight::ActiveModel {
        id: Set(Uuid::new_v4()),
        flight_number: Set(number.to_string()),
        origin_planet_id: Set(origin.id),
        destination_planet_id: Set(destination.id),
        departure_at: Set((now + Duration::days(30)).into()),
        arrival_at: Set((now + Duration::days(40)).into()),
        seats_total: Set(seats),
        seats_available: Set(seats),
        price_credits: Set(Decimal::new(50_000, 0)),
        status: Set(FlightStatus::Scheduled),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(db)
    .await
    .unwrap()
}

async fn insert_pod(db: &DatabaseConnection, f: &flight::Model, number: &str) -> pod::Model {
    pod::ActiveModel {
        id: Set(Uuid::new_v4()),
        flight_id: Set(f.id),
        pod_number: Set(number.to_string()),
        pod_type: Set(PodType::Luxury),
        price_credits: Set(Decimal::new(15_000, 0)),
        is_available: Set(true),
        created_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await
    .unwrap()
}

// ============ Accounts ============

#[tokio::test]
async fn register_creates_exactly_one_profile_with_default_credits() {
    let (app, db) = setup().await;

    let (status, body) = register(&app, "alice").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body["message"],
        "Welcome, alice! Your account has been created."
    );

    assert_eq!(profile::Entity::find().count(&db).await.unwrap(), 1);

    let token = login(&app, "alice").await;
    let (status, me) = send(&app, Method::GET, "/api/v1/accounts/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["username"], "alice");

    let credits: Decimal = me["profile"]["credits_balance"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(credits, Decimal::new(10_000, 0));
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let (app, _db) = setup().await;

    let (status, _) = register(&app, "alice").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = register(&app, "alice").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["fields"]["username"].is_string());
}

#[tokio::test]
async fn password_rules_are_enforced() {
    let (app, _db) = setup().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/accounts/register",
        None,
        Some(json!({
            "username": "bob",
            "email": "bob@example.com",
            "password": "password123",
            "password2": "different456",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"]["password"], "Passwords do not match.");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/accounts/register",
        None,
        Some(json!({
            "username": "bob",
            "email": "bob@example.com",
            "password": "short",
            "password2": "short",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_rejects_bad_password() {
    let (app, _db) = setup().await;
    register(&app, "alice").await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/accounts/login",
        None,
        Some(json!({ "username": "alice", "password": "wrongpassword" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn refresh_exchanges_token_kinds_strictly() {
    let (app, _db) = setup().await;
    register(&app, "alice").await;

    let (_, tokens) = send(
        &app,
        Method::POST,
        "/api/v1/accounts/login",
        None,
        Some(json!({ "username": "alice", "password": "password123" })),
    )
    .await;
    let refresh = tokens["refresh"].as_str().unwrap();
    let access = tokens["access"].as_str().unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/accounts/token/refresh",
        None,
        Some(json!({ "refresh": refresh })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let new_access = body["access"].as_str().unwrap();

    let (status, _) = send(
        &app,
        Method::GET,
        "/api/v1/accounts/me",
        Some(new_access),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // An access token cannot be used as a refresh token
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/accounts/token/refresh",
        None,
        Some(json!({ "refresh": access })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // And a refresh token cannot hit protected routes
    let (status, _) = send(&app, Method::GET, "/api/v1/accounts/me", Some(refresh), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn profile_patch_updates_fields_but_not_credits() {
    let (app, _db) = setup().await;
    register(&app, "alice").await;
    let token = login(&app, "alice").await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/v1/accounts/profile",
        Some(&token),
        Some(json!({
            "bio": "Seasoned traveller",
            "passport_id": "SP-1234",
            "preferred_pod_type": "cryo",
            "credits_balance": "999999.00",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["bio"], "Seasoned traveller");
    assert_eq!(body["profile"]["passport_id"], "SP-1234");
    assert_eq!(body["profile"]["preferred_pod_type"], "cryo");

    // Client-supplied credits are ignored
    let credits: Decimal = body["profile"]["credits_balance"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(credits, Decimal::new(10_000, 0));
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let (app, _db) = setup().await;

    let (status, _) = send(&app, Method::GET, "/api/v1/bookings", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::GET, "/api/v1/accounts/me", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// ============ Catalog ============

#[tokio::test]
async fn planets_are_listed_nearest_first() {
    let (app, db) = setup().await;
    insert_planet(&db, "Neptune", 4_500_000_000.0).await;
    insert_planet(&db, "Moon", 384_400.0).await;
    insert_planet(&db, "Mars", 225_000_000.0).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/planets", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Moon", "Mars", "Neptune"]);
}

#[tokio::test]
async fn planet_lookup_by_slug() {
    let (app, db) = setup().await;
    insert_planet(&db, "Proxima Centauri b", 4e13).await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/planets/proxima-centauri-b",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Proxima Centauri b");

    let (status, _) = send(&app, Method::GET, "/api/v1/planets/vulcan", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============ Inventory ============

#[tokio::test]
async fn flight_filters_combine_with_and() {
    let (app, db) = setup().await;
    let earth = insert_planet(&db, "Earth", 0.0).await;
    let mars = insert_planet(&db, "Mars", 225_000_000.0).await;
    let europa = insert_planet(&db, "Europa", 550_000_000.0).await;

    insert_flight(&db, "FLMAR-EUR-1", &mars, &europa, 100).await;
    insert_flight(&db, "FLMAR-EUR-2", &mars, &europa, 100).await;
    insert_flight(&db, "FLEAR-MAR-1", &earth, &mars, 100).await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/flights?origin=mars&destination=europa",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let numbers: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["flight_number"].as_str().unwrap())
        .collect();
    assert_eq!(numbers.len(), 2);
    assert!(numbers.contains(&"FLMAR-EUR-1"));
    assert!(numbers.contains(&"FLMAR-EUR-2"));

    // Single filter narrows independently
    let (_, body) = send(&app, Method::GET, "/api/v1/flights?origin=mars", None, None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = send(
        &app,
        Method::GET,
        "/api/v1/flights?origin=vulcan",
        None,
        None,
    )
    .await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn created_flight_starts_fully_available() {
    let (app, db) = setup().await;
    let earth = insert_planet(&db, "Earth", 0.0).await;
    let mars = insert_planet(&db, "Mars", 225_000_000.0).await;

    let departure = Utc::now() + Duration::days(20);
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/flights",
        None,
        Some(json!({
            "flight_number": "FLEAR-MAR-9",
            "origin_planet_id": earth.id,
            "destination_planet_id": mars.id,
            "departure_at": departure,
            "arrival_at": departure + Duration::days(250),
            "seats_total": 200,
            "price_credits": "50000.00",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["seats_available"], 200);
    assert_eq!(body["status"], "scheduled");
    assert_eq!(body["origin_planet"]["slug"], "earth");

    // Flight numbers are unique
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/flights",
        None,
        Some(json!({
            "flight_number": "FLEAR-MAR-9",
            "origin_planet_id": earth.id,
            "destination_planet_id": mars.id,
            "departure_at": departure,
            "arrival_at": departure + Duration::days(250),
            "seats_total": 100,
            "price_credits": "40000.00",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn pods_are_listed_by_type_then_number() {
    let (app, db) = setup().await;
    let earth = insert_planet(&db, "Earth", 0.0).await;
    let mars = insert_planet(&db, "Mars", 225_000_000.0).await;
    let f = insert_flight(&db, "FLEAR-MAR-1", &earth, &mars, 100).await;

    for (number, pod_type) in [("2", "standard"), ("1", "standard"), ("3", "cryo")] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/pods",
            None,
            Some(json!({
                "flight_id": f.id,
                "pod_number": number,
                "pod_type": pod_type,
                "price_credits": "5000.00",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/v1/pods?flight={}", f.id),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let order: Vec<(String, String)> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| {
            (
                p["pod_type"].as_str().unwrap().to_string(),
                p["pod_number"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        order,
        vec![
            ("cryo".to_string(), "3".to_string()),
            ("standard".to_string(), "1".to_string()),
            ("standard".to_string(), "2".to_string()),
        ]
    );

    // (flight, pod_number) is unique
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/pods",
        None,
        Some(json!({
            "flight_id": f.id,
            "pod_number": "1",
            "pod_type": "luxury",
            "price_credits": "15000.00",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

// ============ Bookings ============

#[tokio::test]
async fn booking_lifecycle_pending_confirmed_cancelled() {
    let (app, db) = setup().await;
    let earth = insert_planet(&db, "Earth", 0.0).await;
    let mars = insert_planet(&db, "Mars", 225_000_000.0).await;
    let f = insert_flight(&db, "FLEAR-MAR-1", &earth, &mars, 100).await;
    let p = insert_pod(&db, &f, "1").await;

    register(&app, "alice").await;
    let token = login(&app, "alice").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/bookings",
        Some(&token),
        Some(json!({ "flight_id": f.id, "pod_id": p.id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["pod"]["pod_number"], "1");
    let booking_id = body["id"].as_str().unwrap().to_string();

    // total price defaults to flight price + pod price
    let total: Decimal = body["total_price"].as_str().unwrap().parse().unwrap();
    assert_eq!(total, Decimal::new(65_000, 0));

    // Same (user, flight, pod) twice is a conflict
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/bookings",
        Some(&token),
        Some(json!({ "flight_id": f.id, "pod_id": p.id })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/v1/bookings/{}/confirm", booking_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "confirmed");

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/v1/bookings/{}/cancel", booking_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "cancelled");

    // Cancelling again leaves the booking cancelled
    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/v1/bookings/{}/cancel", booking_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "cancelled");

    // A cancelled booking cannot be confirmed
    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/v1/bookings/{}/confirm", booking_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn booking_adjusts_seat_and_pod_availability() {
    let (app, db) = setup().await;
    let earth = insert_planet(&db, "Earth", 0.0).await;
    let mars = insert_planet(&db, "Mars", 225_000_000.0).await;
    let f = insert_flight(&db, "FLEAR-MAR-1", &earth, &mars, 100).await;
    let p = insert_pod(&db, &f, "1").await;

    register(&app, "alice").await;
    let token = login(&app, "alice").await;

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/v1/bookings",
        Some(&token),
        Some(json!({ "flight_id": f.id, "pod_id": p.id })),
    )
    .await;
    let booking_id = body["id"].as_str().unwrap().to_string();

    let flight = flight::Entity::find_by_id(f.id).one(&db).await.unwrap().unwrap();
    assert_eq!(flight.seats_available, 99);
    let pod = pod::Entity::find_by_id(p.id).one(&db).await.unwrap().unwrap();
    assert!(!pod.is_available);

    // A booked pod cannot be taken by someone else
    register(&app, "brook").await;
    let other_token = login(&app, "brook").await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/bookings",
        Some(&other_token),
        Some(json!({ "flight_id": f.id, "pod_id": p.id })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Cancellation returns the seat and pod to inventory, once
    for _ in 0..2 {
        send(
            &app,
            Method::POST,
            &format!("/api/v1/bookings/{}/cancel", booking_id),
            Some(&token),
            None,
        )
        .await;
    }

    let flight = flight::Entity::find_by_id(f.id).one(&db).await.unwrap().unwrap();
    assert_eq!(flight.seats_available, 100);
    let pod = pod::Entity::find_by_id(p.id).one(&db).await.unwrap().unwrap();
    assert!(pod.is_available);
}

#[tokio::test]
async fn full_flight_rejects_bookings() {
    let (app, db) = setup().await;
    let earth = insert_planet(&db, "Earth", 0.0).await;
    let mars = insert_planet(&db, "Mars", 225_000_000.0).await;
    let f = insert_flight(&db, "FLEAR-MAR-1", &earth, &mars, 1).await;

    register(&app, "alice").await;
    register(&app, "brook").await;

    let token = login(&app, "alice").await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/bookings",
        Some(&token),
        Some(json!({ "flight_id": f.id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let token = login(&app, "brook").await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/bookings",
        Some(&token),
        Some(json!({ "flight_id": f.id })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn bookings_are_scoped_to_their_owner() {
    let (app, db) = setup().await;
    let earth = insert_planet(&db, "Earth", 0.0).await;
    let mars = insert_planet(&db, "Mars", 225_000_000.0).await;
    let f = insert_flight(&db, "FLEAR-MAR-1", &earth, &mars, 100).await;

    register(&app, "alice").await;
    register(&app, "brook").await;

    let alice_token = login(&app, "alice").await;
    let (_, body) = send(
        &app,
        Method::POST,
        "/api/v1/bookings",
        Some(&alice_token),
        Some(json!({ "flight_id": f.id })),
    )
    .await;
    let booking_id = body["id"].as_str().unwrap().to_string();

    // Another user sees an empty list
    let brook_token = login(&app, "brook").await;
    let (status, body) = send(&app, Method::GET, "/api/v1/bookings", Some(&brook_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);

    // And cannot act on the foreign booking; it looks like it doesn't exist
    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/v1/bookings/{}/confirm", booking_id),
        Some(&brook_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, Method::GET, "/api/v1/bookings", Some(&alice_token), None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn booking_rejects_pod_from_another_flight() {
    let (app, db) = setup().await;
    let earth = insert_planet(&db, "Earth", 0.0).await;
    let mars = insert_planet(&db, "Mars", 225_000_000.0).await;
    let f1 = insert_flight(&db, "FLEAR-MAR-1", &earth, &mars, 100).await;
    let f2 = insert_flight(&db, "FLEAR-MAR-2", &earth, &mars, 100).await;
    let p2 = insert_pod(&db, &f2, "1").await;

    register(&app, "alice").await;
    let token = login(&app, "alice").await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/bookings",
        Some(&token),
        Some(json!({ "flight_id": f1.id, "pod_id": p2.id })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/bookings",
        Some(&token),
        Some(json!({ "flight_id": f1.id, "pod_id": Uuid::new_v4() })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
