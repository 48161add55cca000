use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::handlers::{account, auth, booking, catalog, inventory};
use crate::middleware::auth::auth_middleware;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    // Accounts: register/login/refresh are public, me/profile need a token
    let account_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/token/refresh", post(auth::refresh))
        .merge(
            Router::new()
                .route("/me", get(account::me).patch(account::update_me))
                .route(
                    "/profile",
                    get(account::get_profile).patch(account::update_profile),
                )
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth_middleware,
                )),
        );

    // Catalog and inventory are publicly readable; flight and pod
    // creation are also public until an admin surface exists
    let public_routes = Router::new()
        .route("/planets", get(catalog::list_planets))
        .route("/planets/{slug}", get(catalog::get_planet))
        .route(
            "/flights",
            get(inventory::list_flights).post(inventory::create_flight),
        )
        .route("/flights/{id}", get(inventory::get_flight))
        .route(
            "/pods",
            get(inventory::list_pods).post(inventory::create_pod),
        );

    // Bookings are strictly scoped to the authenticated caller
    let booking_routes = Router::new()
        .route("/", post(booking::create_booking).get(booking::my_bookings))
        .route("/{id}/confirm", post(booking::confirm_booking))
        .route("/{id}/cancel", post(booking::cancel_booking))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .nest("/api/v1/accounts", account_routes)
        .nest("/api/v1", public_routes)
        .nest("/api/v1/bookings", booking_routes)
        .with_state(state)
}
