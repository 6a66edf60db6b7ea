use serde::{Deserialize, Serialize};

use crate::error::{AppError, FieldError};

use super::user::UserResponse;

/// Request body for admin login.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    #[schema(example = "admin")]
    pub username: String,
    pub password: String,
}

pub fn validate_login_request(payload: &LoginRequest) -> Result<(), AppError> {
    let mut errors = Vec::new();
    if payload.username.trim().is_empty() {
        errors.push(FieldError::new("username", "username must not be empty"));
    }
    if payload.password.is_empty() {
        errors.push(FieldError::new("password", "password must not be empty"));
    }
    super::shared::finish(errors)
}

/// Successful login response. The token must be sent as
/// `Authorization: Bearer <token>` on every admin request.
#[derive(Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    pub message: String,
    /// Signed, expiring JWT.
    pub token: String,
    /// Sanitized user record, never the password hash.
    pub user: UserResponse,
}
