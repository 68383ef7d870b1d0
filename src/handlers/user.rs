use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use axum::{
    extract::{Path, State},
    Json,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::entities::user::{self, UserRole};
use crate::error::{AppError, AppResult};
use crate::validation;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub message: String,
}

/// Register a new user account
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<Json<RegisterResponse>> {
    tracing::info!("Registering user with email: {}", payload.email);

    validation::validate_email(&payload.email)?;
    validation::validate_password(&payload.password)?;
    validation::validate_name(&payload.first_name)?;
    validation::validate_name(&payload.last_name)?;

    let existing = user::Entity::find()
        .filter(user::Column::Email.eq(&payload.email))
        .one(&state.db)
        .await?;

    if existing.is_some() {
        return Err(AppError::Conflict(
            "User with this email already exists".to_string(),
        ));
    }

    let password = hash_password(&payload.password)?;

    let new_user = user::ActiveModel {
        email: Set(payload.email),
        password: Set(password),
        first_name: Set(payload.first_name),
        last_name: Set(payload.last_name),
        phone_number: Set(payload.phone_number),
        address: Set(payload.address),
        city: Set(payload.city),
        state: Set(payload.state),
        pincode: Set(payload.pincode),
        role: Set(UserRole::User),
        is_active: Set(true),
        ..Default::default()
    };

    let saved = new_user.insert(&state.db).await?;
    tracing::info!("User registered successfully with ID: {}", saved.id);

    Ok(Json(RegisterResponse {
        user_id: saved.id,
        email: saved.email,
        first_name: saved.first_name,
        last_name: saved.last_name,
        message: "User registered successfully".to_string(),
    }))
}

/// Fetch a user by id; the password field is never serialized
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<user::Model>> {
    if user_id <= 0 {
        return Err(AppError::Validation("Invalid user ID".to_string()));
    }

    let user = user::Entity::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User not found with ID: {}", user_id)))?;

    Ok(Json(user))
}

pub(crate) fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}
