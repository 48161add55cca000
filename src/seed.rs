use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use crate::entities::flight::FlightStatus;
use crate::entities::pod::PodType;
use crate::entities::{flight, planet, pod, profile, user};
use crate::error::{AppError, AppResult};
use crate::utils::slug::slugify;

const DEMO_CREDITS: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 2); // 10000.00

// (name, description, distance_km, travel_days, emoji, base fare)
const PLANETS: &[(&str, &str, f64, i32, &str, i64)] = &[
    ("Earth", "Our home planet. Blue marble with diverse ecosystems.", 0.0, 0, "🌍", 100_000),
    ("Moon", "Earth's natural satellite. Gateway to space.", 384_400.0, 3, "🌙", 10_000),
    ("Mars", "The red planet. Known for its thin atmosphere and polar ice caps.", 225_000_000.0, 250, "🔴", 50_000),
    ("Venus", "Hot and hostile planet with extreme atmospheric pressure.", 108_000_000.0, 150, "✨", 45_000),
    ("Mercury", "The smallest planet, closest to the sun.", 77_000_000.0, 120, "⚡", 40_000),
    ("Jupiter", "Gas giant with the Great Red Spot. Largest planet in our system.", 550_000_000.0, 600, "🪐", 75_000),
    ("Europa", "Jupiter's icy moon with a hidden subsurface ocean.", 550_000_000.0, 620, "❄️", 80_000),
    ("Saturn", "The ringed planet. Known for its spectacular ring system.", 1_200_000_000.0, 800, "💫", 85_000),
    ("Titan", "Saturn's largest moon with methane lakes.", 1_200_000_000.0, 820, "🏜️", 90_000),
    ("Neptune", "Furthest ice giant with supersonic winds.", 4_500_000_000.0, 1_600, "🌊", 100_000),
    ("Pluto", "Dwarf planet with icy terrain and nitrogen plains.", 5_900_000_000.0, 1_800, "🧊", 110_000),
    ("Proxima Centauri b", "Exoplanet in the habitable zone of Proxima Centauri.", 40_000_000_000_000.0, 2_000, "🌟", 500_000),
];

const POD_TYPES: &[(PodType, i64)] = &[
    (PodType::Standard, 5_000),
    (PodType::Luxury, 15_000),
    (PodType::Cryo, 10_000),
];

/// Populate an empty database with demo planets, flights between the
/// nearest destinations, pods, and a demo account.
pub async fn seed_demo_data(db: &DatabaseConnection) -> AppResult<()> {
    if planet::Entity::find().count(db).await? > 0 {
        tracing::info!("Catalog already populated, skipping demo seed");
        return Ok(());
    }

    let now = Utc::now();
    let mut planets = Vec::new();

    for (name, description, distance, travel_days, emoji, fare) in PLANETS {
        let model = planet::ActiveModel {
            name: Set(name.to_string()),
            slug: Set(slugify(name)),
            description: Set(description.to_string()),
            gltf_model_url: Set(format!(
                "https://models.spacetravel.example/{}.glb",
                slugify(name)
            )),
            distance_from_earth_km: Set(*distance),
            travel_time_days: Set(*travel_days),
            emoji: Set(emoji.to_string()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };
        let planet = model.insert(db).await?;
        tracing::info!(name = %planet.name, "Seeded planet");
        planets.push((planet, *fare));
    }

    seed_demo_user(db).await?;

    let mut rng = StdRng::from_entropy();

    // Flights among the first few destinations, a couple per route
    for i in 0..5 {
        for j in (i + 1)..6 {
            let (origin, _) = &planets[i];
            let (destination, base_fare) = &planets[j];

            for n in 1..=rng.gen_range(2..=3) {
                let departure = now + Duration::days(rng.gen_range(5..60));
                let arrival = departure + Duration::days(destination.travel_time_days as i64);
                let fare = base_fare + rng.gen_range(-5_000..10_000);

                let new_flight = flight::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    flight_number: Set(format!(
                        "FL{}-{}-{}",
                        origin.name[..3].to_uppercase(),
                        destination.name[..3].to_uppercase(),
                        n
                    )),
                    origin_planet_id: Set(origin.id),
                    destination_planet_id: Set(destination.id),
                    departure_at: Set(departure.into()),
                    arrival_at: Set(arrival.into()),
                    seats_total: Set(200),
                    seats_available: Set(200),
                    price_credits: Set(Decimal::new(fare * 100, 2)),
                    status: Set(FlightStatus::Scheduled),
                    created_at: Set(now.into()),
                    updated_at: Set(now.into()),
                };
                let flight = new_flight.insert(db).await?;

                let mut pod_counter = 1;
                for (pod_type, price) in POD_TYPES {
                    for _ in 0..rng.gen_range(3..=6) {
                        let new_pod = pod::ActiveModel {
                            id: Set(Uuid::new_v4()),
                            flight_id: Set(flight.id),
                            pod_number: Set(pod_counter.to_string()),
                            pod_type: Set(*pod_type),
                            price_credits: Set(Decimal::new(price * 100, 2)),
                            is_available: Set(true),
                            created_at: Set(now.into()),
                        };
                        new_pod.insert(db).await?;
                        pod_counter += 1;
                    }
                }

                tracing::info!(flight_number = %flight.flight_number, "Seeded flight");
            }
        }
    }

    Ok(())
}

/// Create the demo account if it doesn't exist
async fn seed_demo_user(db: &DatabaseConnection) -> AppResult<()> {
    let existing = user::Entity::find()
        .filter(user::Column::Username.eq("demo"))
        .one(db)
        .await?;
    if existing.is_some() {
        return Ok(());
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(b"demo1234", &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash demo password: {}", e)))?
        .to_string();

    let now = Utc::now();
    let demo = user::ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set("demo".to_string()),
        email: Set("demo@example.com".to_string()),
        password_hash: Set(password_hash),
        first_name: Set("Demo".to_string()),
        last_name: Set("User".to_string()),
        created_at: Set(now.into()),
    };
    let demo = demo.insert(db).await?;

    let demo_profile = profile::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(demo.id),
        bio: Set(String::new()),
        passport_id: Set(String::new()),
        phone: Set(String::new()),
        date_of_birth: Set(None),
        credits_balance: Set(DEMO_CREDITS),
        preferred_pod_type: Set(PodType::Standard),
        avatar_url: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    demo_profile.insert(db).await?;

    tracing::info!("Demo account created: demo");
    Ok(())
}
