use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth;
use crate::errors::AppError;
use crate::models::portfolio::Portfolio;
use crate::models::user::User;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub user: User,
    pub portfolio: Portfolio,
}

/// POST /api/v1/users
///
/// Registers a user and creates their empty default portfolio in the same
/// store operation, so every user observably has a portfolio.
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "Username and password are required".to_string(),
        ));
    }

    let user = User {
        id: Uuid::new_v4(),
        username: req.username,
        credential_digest: auth::hash_password(&req.password)?,
        created_at: Utc::now(),
    };

    let (user, portfolio) = state.storage.create_user_with_portfolio(user).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse { user, portfolio }),
    ))
}
