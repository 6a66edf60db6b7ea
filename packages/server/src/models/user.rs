use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::user;
use crate::error::{AppError, FieldError};

use super::shared::{check_email, check_required_text, finish};

/// User record as exposed over the API. The password hash is never included.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    #[schema(example = "sarah.putri")]
    pub username: String,
    #[schema(example = "sarah.putri@greenfieldenv.co.id")]
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[schema(example = "editor")]
    pub role: String,
    pub is_active: bool,
    pub invited_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<user::Model> for UserResponse {
    fn from(u: user::Model) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            role: u.role,
            is_active: u.is_active,
            invited_by: u.invited_by,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// Request body for inviting a new user. The account starts with the
/// starter password and is expected to change it on first login.
#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InviteUserRequest {
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Defaults to `viewer` when omitted.
    pub role: Option<String>,
}

#[derive(Deserialize, Default, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
    /// When present, the password is re-hashed and replaced.
    pub password: Option<String>,
}

fn check_role(errors: &mut Vec<FieldError>, role: &str) {
    if !user::ROLES.contains(&role) {
        errors.push(FieldError::new(
            "role",
            format!("role must be one of: {}", user::ROLES.join(", ")),
        ));
    }
}

pub fn validate_invite_user(payload: &InviteUserRequest) -> Result<(), AppError> {
    let mut errors = Vec::new();
    check_required_text(&mut errors, "username", &payload.username, 64);
    check_email(&mut errors, "email", &payload.email);
    if let Some(ref role) = payload.role {
        check_role(&mut errors, role);
    }
    finish(errors)
}

pub fn validate_update_user(payload: &UpdateUserRequest) -> Result<(), AppError> {
    let mut errors = Vec::new();
    if let Some(ref username) = payload.username {
        check_required_text(&mut errors, "username", username, 64);
    }
    if let Some(ref email) = payload.email {
        check_email(&mut errors, "email", email);
    }
    if let Some(ref role) = payload.role {
        check_role(&mut errors, role);
    }
    if let Some(ref password) = payload.password
        && password.chars().count() < 8
    {
        errors.push(FieldError::new(
            "password",
            "password must be at least 8 characters",
        ));
    }
    finish(errors)
}
