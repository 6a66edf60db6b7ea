use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::contact_submission;
use crate::error::{AppError, FieldError};

use super::shared::{check_email, check_required_text, finish};

/// Minimum length for the free-text message on the public contact form.
pub const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmissionResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service: Option<String>,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<contact_submission::Model> for ContactSubmissionResponse {
    fn from(s: contact_submission::Model) -> Self {
        Self {
            id: s.id,
            name: s.name,
            email: s.email,
            phone: s.phone,
            company: s.company,
            service: s.service,
            message: s.message,
            is_read: s.is_read,
            created_at: s.created_at,
        }
    }
}

#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactSubmissionRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service: Option<String>,
    pub message: String,
}

pub fn validate_contact_submission(
    payload: &CreateContactSubmissionRequest,
) -> Result<(), AppError> {
    let mut errors = Vec::new();
    check_required_text(&mut errors, "name", &payload.name, 128);
    check_email(&mut errors, "email", &payload.email);
    if payload.message.trim().chars().count() < MIN_MESSAGE_CHARS {
        errors.push(FieldError::new(
            "message",
            format!("message must be at least {MIN_MESSAGE_CHARS} characters"),
        ));
    }
    finish(errors)
}
