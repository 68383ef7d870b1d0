use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AppError, AppResult};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern must compile")
});

pub fn validate_email(email: &str) -> AppResult<()> {
    if email.trim().is_empty() {
        return Err(AppError::Validation("Email cannot be empty".to_string()));
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(AppError::Validation("Invalid email format".to_string()));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> AppResult<()> {
    if password.is_empty() {
        return Err(AppError::Validation("Password cannot be empty".to_string()));
    }
    if password.len() < 6 {
        return Err(AppError::Validation(
            "Password must be at least 6 characters long".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("Name cannot be empty".to_string()));
    }
    if name.len() < 2 || name.len() > 100 {
        return Err(AppError::Validation(
            "Name must be between 2 and 100 characters".to_string(),
        ));
    }
    Ok(())
}

/// Age is optional on passenger records; only bounds-check a supplied value.
pub fn validate_age(age: Option<i32>) -> AppResult<()> {
    if let Some(age) = age {
        if !(0..=120).contains(&age) {
            return Err(AppError::Validation(
                "Age must be between 0 and 120".to_string(),
            ));
        }
    }
    Ok(())
}

pub fn validate_number_of_passengers(number_of_passengers: i32) -> AppResult<()> {
    if number_of_passengers <= 0 {
        return Err(AppError::Validation(
            "Number of passengers must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

/// The message carries the current count so the caller can see what is left.
pub fn validate_available_seats(available_seats: i32, requested_seats: i32) -> AppResult<()> {
    if requested_seats > available_seats {
        return Err(AppError::Validation(format!(
            "Not enough available seats. Available: {}",
            available_seats
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("a.b+tag@mail.co.in").is_ok());
        assert!(validate_email("user_1-x@sub.domain.org").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert!(validate_email("").is_err());
        assert!(validate_email("   ").is_err());
        assert!(validate_email("no-at-sign.com").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email("short@tld.x").is_err());
        assert!(validate_email("spaces in@mail.com").is_err());
    }

    #[test]
    fn test_name_bounds() {
        assert!(validate_name("Jo").is_ok());
        assert!(validate_name(&"x".repeat(100)).is_ok());
        assert!(validate_name("J").is_err());
        assert!(validate_name(&"x".repeat(101)).is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_age_bounds() {
        assert!(validate_age(None).is_ok());
        assert!(validate_age(Some(0)).is_ok());
        assert!(validate_age(Some(120)).is_ok());
        assert!(validate_age(Some(-1)).is_err());
        assert!(validate_age(Some(121)).is_err());
    }

    #[test]
    fn test_passenger_count() {
        assert!(validate_number_of_passengers(1).is_ok());
        assert!(validate_number_of_passengers(0).is_err());
        assert!(validate_number_of_passengers(-3).is_err());
    }

    #[test]
    fn test_available_seats_message_reports_count() {
        assert!(validate_available_seats(5, 5).is_ok());
        let err = validate_available_seats(0, 5).unwrap_err();
        assert!(err.to_string().contains("Available: 0"));
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("secret1").is_ok());
        assert!(validate_password("").is_err());
        assert!(validate_password("abc12").is_err());
    }
}
