use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::booking::{self, BookingStatus, TripType};
use crate::entities::user::{self, UserRole};
use crate::entities::{flight, passenger};
use crate::error::{AppError, AppResult};
use crate::handlers::user::hash_password;
use crate::utils::pnr;
use crate::validation;
use crate::AppState;

const MAX_PNR_ATTEMPTS: u32 = 5;
const CANCELLATION_CUTOFF_HOURS: i64 = 24;
const DEFAULT_BAGGAGE_KG: i32 = 20;

#[derive(Debug, Deserialize)]
pub struct PassengerRequest {
    pub name: String,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub meal_preference: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    pub user_email: String,
    pub number_of_passengers: i32,
    #[serde(default)]
    pub trip_type: TripType,
    #[serde(default)]
    pub passengers: Vec<PassengerRequest>,
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub booking_id: i32,
    pub pnr_number: String,
    pub flight_number: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub departure_time: DateTime<Utc>,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub booking_date: DateTime<Utc>,
    pub number_of_passengers: i32,
}

/// Book seats on a flight. Runs as one transaction: guest-user creation,
/// booking and passenger inserts, and the seat decrement commit or roll
/// back together. The flight row is locked so concurrent bookings against
/// the same flight serialize instead of overselling.
pub async fn book_flight(
    State(state): State<AppState>,
    Path(flight_id): Path<i32>,
    Json(payload): Json<BookingRequest>,
) -> AppResult<Json<BookingResponse>> {
    tracing::info!(
        "Processing booking for flight {} with email {}",
        flight_id,
        payload.user_email
    );

    let now = Utc::now();
    validate_booking_request(flight_id, &payload)?;

    let txn = state.db.begin().await?;

    let user = resolve_user(&txn, &payload.user_email).await?;

    let flight = flight::Entity::find_by_id(flight_id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Flight not found with ID: {}", flight_id)))?;

    validation::validate_available_seats(flight.available_seats, payload.number_of_passengers)?;
    if departed(now, flight.departure_time.with_timezone(&Utc)) {
        return Err(AppError::Booking(
            "Cannot book flight that has already departed".to_string(),
        ));
    }

    let total_price = total_price(flight.price_per_seat, payload.number_of_passengers);
    let pnr_number = allocate_pnr(&txn).await?;

    let new_booking = booking::ActiveModel {
        pnr_number: Set(pnr_number.clone()),
        user_id: Set(user.id),
        flight_id: Set(flight.id),
        number_of_passengers: Set(payload.number_of_passengers),
        total_price: Set(total_price),
        status: Set(BookingStatus::Confirmed),
        trip_type: Set(payload.trip_type.clone()),
        booking_date: Set(now.into()),
        is_active: Set(true),
        ..Default::default()
    };
    let saved = new_booking.insert(&txn).await?;

    for p in &payload.passengers {
        let row = passenger::ActiveModel {
            booking_id: Set(saved.id),
            name: Set(p.name.clone()),
            gender: Set(p.gender.clone()),
            age: Set(p.age),
            meal_preference: Set(p.meal_preference.clone()),
            baggage_allowance_kg: Set(DEFAULT_BAGGAGE_KG),
            is_active: Set(true),
            ..Default::default()
        };
        row.insert(&txn).await?;
    }

    let remaining = flight.available_seats - payload.number_of_passengers;
    let flight_number = flight.flight_number.clone();
    let departure_city = flight.departure_city.clone();
    let arrival_city = flight.arrival_city.clone();
    let departure_time = flight.departure_time;

    let mut active: flight::ActiveModel = flight.into();
    active.available_seats = Set(remaining);
    active.updated_at = Set(now.into());
    active.update(&txn).await?;

    txn.commit().await?;
    tracing::info!("Booking created successfully with PNR: {}", pnr_number);

    Ok(Json(BookingResponse {
        booking_id: saved.id,
        pnr_number: saved.pnr_number,
        flight_number,
        departure_city,
        arrival_city,
        departure_time: departure_time.with_timezone(&Utc),
        total_price: saved.total_price,
        status: saved.status,
        booking_date: saved.booking_date.with_timezone(&Utc),
        number_of_passengers: saved.number_of_passengers,
    }))
}

/// Fetch a ticket by PNR
pub async fn get_ticket(
    State(state): State<AppState>,
    Path(pnr): Path<String>,
) -> AppResult<Json<BookingResponse>> {
    if pnr.trim().is_empty() {
        return Err(AppError::Validation("PNR cannot be empty".to_string()));
    }
    tracing::info!("Fetching booking with PNR: {}", pnr);

    let booking = booking::Entity::find()
        .filter(booking::Column::PnrNumber.eq(&pnr))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking not found with PNR: {}", pnr)))?;

    let flight = flight::Entity::find_by_id(booking.flight_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| {
            AppError::Internal(format!("Flight missing for booking {}", booking.id))
        })?;

    Ok(Json(to_response(booking, &flight)))
}

/// Booking history for an email, most recent first. An unknown email is an
/// empty history, not an error.
pub async fn booking_history(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<Vec<BookingResponse>>> {
    validation::validate_email(&email)?;
    tracing::info!("Fetching booking history for email: {}", email);

    let user = user::Entity::find()
        .filter(user::Column::Email.eq(&email))
        .one(&state.db)
        .await?;

    let Some(user) = user else {
        return Ok(Json(Vec::new()));
    };

    let bookings = booking::Entity::find()
        .filter(booking::Column::UserId.eq(user.id))
        .order_by_desc(booking::Column::BookingDate)
        .all(&state.db)
        .await?;

    let flights = flight::Entity::find().all(&state.db).await?;

    let responses: Vec<BookingResponse> = bookings
        .into_iter()
        .filter_map(|b| {
            let flight = flights.iter().find(|f| f.id == b.flight_id)?;
            Some(to_response(b, flight))
        })
        .collect();

    Ok(Json(responses))
}

/// Cancel a booking by PNR. Disallowed within 24 hours of departure;
/// exactly 24 hours before is still cancellable. Refund is the full price.
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(pnr): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    if pnr.trim().is_empty() {
        return Err(AppError::Validation("PNR cannot be empty".to_string()));
    }
    tracing::info!("Cancelling booking with PNR: {}", pnr);

    let now = Utc::now();
    let txn = state.db.begin().await?;

    let booking = booking::Entity::find()
        .filter(booking::Column::PnrNumber.eq(&pnr))
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking not found with PNR: {}", pnr)))?;

    if booking.status == BookingStatus::Cancelled {
        return Err(AppError::Booking("Booking is already cancelled".to_string()));
    }

    let flight = flight::Entity::find_by_id(booking.flight_id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or_else(|| {
            AppError::Internal(format!("Flight missing for booking {}", booking.id))
        })?;

    if within_cancellation_window(now, flight.departure_time.with_timezone(&Utc)) {
        return Err(AppError::Booking(
            "Cannot cancel booking within 24 hours of departure".to_string(),
        ));
    }

    let refund_amount = booking.total_price;
    let seats_to_restore = booking.number_of_passengers;

    let mut active: booking::ActiveModel = booking.into();
    active.status = Set(BookingStatus::Cancelled);
    active.cancellation_date = Set(Some(now.into()));
    active.refund_amount = Set(Some(refund_amount));
    active.updated_at = Set(now.into());
    let updated = active.update(&txn).await?;

    let restored = flight.available_seats + seats_to_restore;
    let mut flight_active: flight::ActiveModel = flight.into();
    flight_active.available_seats = Set(restored);
    flight_active.updated_at = Set(now.into());
    flight_active.update(&txn).await?;

    txn.commit().await?;
    tracing::info!("Booking cancelled successfully: {}", updated.pnr_number);

    Ok(Json(serde_json::json!({
        "message": "Booking cancelled successfully",
        "pnr_number": updated.pnr_number,
        "refund_amount": updated.refund_amount,
    })))
}

/// All field-level checks, run before any storage access
fn validate_booking_request(flight_id: i32, request: &BookingRequest) -> AppResult<()> {
    if flight_id <= 0 {
        return Err(AppError::Validation("Invalid flight ID".to_string()));
    }
    validation::validate_email(&request.user_email)?;
    validation::validate_number_of_passengers(request.number_of_passengers)?;
    if request.passengers.is_empty() {
        return Err(AppError::Validation(
            "Passenger details are required".to_string(),
        ));
    }
    if request.passengers.len() != request.number_of_passengers as usize {
        return Err(AppError::Validation(
            "Number of passengers doesn't match passenger details count".to_string(),
        ));
    }
    for p in &request.passengers {
        validation::validate_name(&p.name)?;
        validation::validate_age(p.age)?;
    }
    Ok(())
}

/// Resolve the booking owner by email, creating a guest account when no
/// user exists. Runs inside the booking transaction so a failed booking
/// rolls the guest back too.
async fn resolve_user(txn: &DatabaseTransaction, email: &str) -> AppResult<user::Model> {
    let existing = user::Entity::find()
        .filter(user::Column::Email.eq(email))
        .one(txn)
        .await?;

    if let Some(user) = existing {
        return Ok(user);
    }

    tracing::info!("Creating guest user for email: {}", email);
    let credential = hash_password(&format!("guest-{}", Uuid::new_v4()))?;

    let guest = user::ActiveModel {
        email: Set(email.to_string()),
        password: Set(credential),
        first_name: Set("Guest".to_string()),
        last_name: Set("User".to_string()),
        role: Set(UserRole::User),
        is_active: Set(true),
        ..Default::default()
    };

    Ok(guest.insert(txn).await?)
}

/// Draw PNR tokens until one is free in the booking index, bounded so a
/// degenerate token space cannot loop forever
async fn allocate_pnr(txn: &DatabaseTransaction) -> AppResult<String> {
    for _ in 0..MAX_PNR_ATTEMPTS {
        let candidate = pnr::generate_pnr();
        let taken = booking::Entity::find()
            .filter(booking::Column::PnrNumber.eq(&candidate))
            .one(txn)
            .await?
            .is_some();
        if !taken {
            return Ok(candidate);
        }
    }
    Err(AppError::Internal(
        "Failed to allocate a unique PNR".to_string(),
    ))
}

fn departed(now: DateTime<Utc>, departure_time: DateTime<Utc>) -> bool {
    now > departure_time
}

/// Cancellation closes strictly after departure − 24h, so exactly 24 hours
/// before departure is still cancellable
fn within_cancellation_window(now: DateTime<Utc>, departure_time: DateTime<Utc>) -> bool {
    now > departure_time - Duration::hours(CANCELLATION_CUTOFF_HOURS)
}

fn total_price(price_per_seat: Decimal, number_of_passengers: i32) -> Decimal {
    price_per_seat * Decimal::from(number_of_passengers)
}

fn to_response(booking: booking::Model, flight: &flight::Model) -> BookingResponse {
    BookingResponse {
        booking_id: booking.id,
        pnr_number: booking.pnr_number,
        flight_number: flight.flight_number.clone(),
        departure_city: flight.departure_city.clone(),
        arrival_city: flight.arrival_city.clone(),
        departure_time: flight.departure_time.with_timezone(&Utc),
        total_price: booking.total_price,
        status: booking.status,
        booking_date: booking.booking_date.with_timezone(&Utc),
        number_of_passengers: booking.number_of_passengers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request(count: i32, names: &[&str]) -> BookingRequest {
        BookingRequest {
            user_email: "traveller@example.com".to_string(),
            number_of_passengers: count,
            trip_type: TripType::OneWay,
            passengers: names
                .iter()
                .map(|n| PassengerRequest {
                    name: n.to_string(),
                    gender: None,
                    age: Some(30),
                    meal_preference: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_total_price_is_exact() {
        let price: Decimal = "100.50".parse().unwrap();
        assert_eq!(total_price(price, 3), "301.50".parse().unwrap());

        // a float-based computation would drift here
        let price: Decimal = "0.10".parse().unwrap();
        assert_eq!(total_price(price, 3), "0.30".parse().unwrap());

        let price: Decimal = "4999.99".parse().unwrap();
        assert_eq!(total_price(price, 7), "34999.93".parse().unwrap());
    }

    #[test]
    fn test_cancellation_cutoff_boundary() {
        let departure = Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap();

        let exactly_24h_before = departure - Duration::hours(24);
        assert!(!within_cancellation_window(exactly_24h_before, departure));

        let one_second_later = exactly_24h_before + Duration::seconds(1);
        assert!(within_cancellation_window(one_second_later, departure));

        let well_before = departure - Duration::days(3);
        assert!(!within_cancellation_window(well_before, departure));
    }

    #[test]
    fn test_departed_boundary() {
        let departure = Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap();

        assert!(!departed(departure, departure));
        assert!(!departed(departure - Duration::seconds(1), departure));
        assert!(departed(departure + Duration::seconds(1), departure));
    }

    #[test]
    fn test_validation_accepts_well_formed_request() {
        assert!(validate_booking_request(1, &request(2, &["Asha Rao", "Ravi Rao"])).is_ok());
    }

    #[test]
    fn test_validation_rejects_count_mismatch() {
        let err = validate_booking_request(1, &request(2, &["Asha Rao"])).unwrap_err();
        assert!(err.to_string().contains("doesn't match"));
    }

    #[test]
    fn test_validation_rejects_bad_inputs_before_storage() {
        assert!(validate_booking_request(0, &request(1, &["Asha Rao"])).is_err());
        assert!(validate_booking_request(-5, &request(1, &["Asha Rao"])).is_err());

        let mut bad_email = request(1, &["Asha Rao"]);
        bad_email.user_email = "not-an-email".to_string();
        assert!(validate_booking_request(1, &bad_email).is_err());

        assert!(validate_booking_request(1, &request(0, &[])).is_err());
        assert!(validate_booking_request(1, &request(1, &["X"])).is_err());

        let mut bad_age = request(1, &["Asha Rao"]);
        bad_age.passengers[0].age = Some(130);
        assert!(validate_booking_request(1, &bad_age).is_err());
    }
}
