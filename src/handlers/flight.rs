use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};

use crate::entities::flight::{self, FlightStatus};
use crate::entities::airline;
use crate::error::{AppError, AppResult};
use crate::validation;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AddFlightRequest {
    pub airline_id: Option<i32>,
    pub flight_number: Option<String>,
    pub departure_city: Option<String>,
    pub arrival_city: Option<String>,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub total_seats: Option<i32>,
    pub price_per_seat: Option<Decimal>,
    pub aircraft_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FlightSearchRequest {
    pub departure_city: Option<String>,
    pub arrival_city: Option<String>,
    pub departure_date: Option<NaiveDate>,
    pub number_of_passengers: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct FlightResponse {
    pub flight_id: i32,
    pub flight_number: String,
    pub airline_name: String,
    pub aircraft_type: Option<String>,
    pub departure_city: String,
    pub arrival_city: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub available_seats: i32,
    pub price_per_seat: Decimal,
}

/// Add a flight to the inventory
pub async fn add_flight(
    State(state): State<AppState>,
    Json(payload): Json<AddFlightRequest>,
) -> AppResult<Json<FlightResponse>> {
    let flight_number = match payload.flight_number.as_deref() {
        Some(n) if !n.trim().is_empty() => n.to_string(),
        _ => return Err(AppError::Validation("Flight number is required".to_string())),
    };
    tracing::info!("Adding new flight: {}", flight_number);

    let airline_id = payload
        .airline_id
        .ok_or_else(|| AppError::Validation("Airline ID is required".to_string()))?;
    let departure_city = match payload.departure_city.as_deref() {
        Some(c) if !c.trim().is_empty() => c.to_string(),
        _ => {
            return Err(AppError::Validation(
                "Departure and arrival cities are required".to_string(),
            ))
        }
    };
    let arrival_city = match payload.arrival_city.as_deref() {
        Some(c) if !c.trim().is_empty() => c.to_string(),
        _ => {
            return Err(AppError::Validation(
                "Departure and arrival cities are required".to_string(),
            ))
        }
    };
    let total_seats = match payload.total_seats {
        Some(s) if s > 0 => s,
        _ => {
            return Err(AppError::Validation(
                "Total seats must be greater than 0".to_string(),
            ))
        }
    };
    let price_per_seat = match payload.price_per_seat {
        Some(p) if p > Decimal::ZERO => p,
        _ => {
            return Err(AppError::Validation(
                "Price per seat must be greater than 0".to_string(),
            ))
        }
    };

    let airline = airline::Entity::find_by_id(airline_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Airline not found with ID: {}", airline_id)))?;

    let duplicate = flight::Entity::find()
        .filter(flight::Column::FlightNumber.eq(&flight_number))
        .one(&state.db)
        .await?;

    if duplicate.is_some() {
        return Err(AppError::Conflict(
            "Flight with this number already exists".to_string(),
        ));
    }

    let new_flight = flight::ActiveModel {
        airline_id: Set(airline.id),
        flight_number: Set(flight_number),
        departure_city: Set(departure_city),
        arrival_city: Set(arrival_city),
        departure_time: Set(payload.departure_time.into()),
        arrival_time: Set(payload.arrival_time.into()),
        total_seats: Set(total_seats),
        available_seats: Set(total_seats),
        price_per_seat: Set(price_per_seat),
        aircraft_type: Set(payload.aircraft_type),
        status: Set(FlightStatus::Active),
        is_active: Set(true),
        ..Default::default()
    };

    let saved = new_flight.insert(&state.db).await?;
    tracing::info!("Flight inventory added successfully: {}", saved.flight_number);

    Ok(Json(to_response(saved, &airline)))
}

/// Search active flights with open seats for a route and calendar date
pub async fn search_flights(
    State(state): State<AppState>,
    Json(payload): Json<FlightSearchRequest>,
) -> AppResult<Json<Vec<FlightResponse>>> {
    let departure_city = match payload.departure_city.as_deref() {
        Some(c) if !c.trim().is_empty() => c,
        _ => return Err(AppError::Validation("Departure city is required".to_string())),
    };
    let arrival_city = match payload.arrival_city.as_deref() {
        Some(c) if !c.trim().is_empty() => c,
        _ => return Err(AppError::Validation("Arrival city is required".to_string())),
    };
    let departure_date = payload
        .departure_date
        .ok_or_else(|| AppError::Validation("Departure date is required".to_string()))?;
    validation::validate_number_of_passengers(payload.number_of_passengers.unwrap_or(0))?;

    tracing::info!(
        "Searching flights from {} to {} on {}",
        departure_city,
        arrival_city,
        departure_date
    );

    let (day_start, day_end) = day_bounds(departure_date);

    let flights = flight::Entity::find()
        .filter(flight::Column::DepartureCity.eq(departure_city))
        .filter(flight::Column::ArrivalCity.eq(arrival_city))
        .filter(flight::Column::DepartureTime.gte(day_start))
        .filter(flight::Column::DepartureTime.lt(day_end))
        .filter(flight::Column::AvailableSeats.gt(0))
        .filter(flight::Column::IsActive.eq(true))
        .order_by_asc(flight::Column::DepartureTime)
        .all(&state.db)
        .await?;

    tracing::info!("Found {} flights", flights.len());

    let airlines = airline::Entity::find().all(&state.db).await?;

    let responses: Vec<FlightResponse> = flights
        .into_iter()
        .filter_map(|f| {
            let airline = airlines.iter().find(|a| a.id == f.airline_id)?;
            Some(to_response(f, airline))
        })
        .collect();

    Ok(Json(responses))
}

/// Get flight details by id
pub async fn get_flight(
    State(state): State<AppState>,
    Path(flight_id): Path<i32>,
) -> AppResult<Json<FlightResponse>> {
    if flight_id <= 0 {
        return Err(AppError::Validation("Invalid flight ID".to_string()));
    }

    let flight = flight::Entity::find_by_id(flight_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Flight not found with ID: {}", flight_id)))?;

    let airline = airline::Entity::find_by_id(flight.airline_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| {
            AppError::Internal(format!("Airline missing for flight {}", flight.id))
        })?;

    Ok(Json(to_response(flight, &airline)))
}

/// UTC window covering the whole calendar date: [00:00, next day 00:00)
fn day_bounds(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = date.and_time(NaiveTime::MIN).and_utc();
    (start, start + Duration::days(1))
}

fn to_response(flight: flight::Model, airline: &airline::Model) -> FlightResponse {
    FlightResponse {
        flight_id: flight.id,
        flight_number: flight.flight_number,
        airline_name: airline.name.clone(),
        aircraft_type: flight.aircraft_type,
        departure_city: flight.departure_city,
        arrival_city: flight.arrival_city,
        departure_time: flight.departure_time.with_timezone(&Utc),
        arrival_time: flight.arrival_time.with_timezone(&Utc),
        available_seats: flight.available_seats,
        price_per_seat: flight.price_per_seat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_bounds_cover_whole_date() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let (start, end) = day_bounds(date);

        assert_eq!(start.to_rfc3339(), "2025-06-01T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2025-06-02T00:00:00+00:00");

        let in_day = date.and_hms_opt(23, 59, 59).unwrap().and_utc();
        assert!(in_day >= start && in_day < end);
    }
}
