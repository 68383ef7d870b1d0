use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{booking, flight, user};
use crate::middleware::rate_limit::log_request;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    // User registration and lookup
    let user_routes = Router::new()
        .route("/register", post(user::register))
        .route("/{id}", get(user::get_user));

    // Flight inventory
    let flight_routes = Router::new()
        .route("/inventory", post(flight::add_flight))
        .route("/search", post(flight::search_flights))
        .route("/{id}", get(flight::get_flight));

    // Booking workflow
    let booking_routes = Router::new()
        .route("/{flight_id}", post(booking::book_flight))
        .route("/ticket/{pnr}", get(booking::get_ticket))
        .route("/history/{email}", get(booking::booking_history))
        .route("/cancel/{pnr}", delete(booking::cancel_booking));

    Router::new()
        .nest("/api/users", user_routes)
        .nest("/api/flights", flight_routes)
        .nest("/api/bookings", booking_routes)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
