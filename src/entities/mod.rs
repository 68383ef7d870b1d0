pub mod airline;
pub mod booking;
pub mod flight;
pub mod passenger;
pub mod seat;
pub mod user;
