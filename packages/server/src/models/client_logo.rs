use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::client_logo;
use crate::error::{AppError, FieldError};

use super::shared::{check_required_text, default_true, double_option, finish};

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientLogoResponse {
    pub id: i32,
    #[schema(example = "PT Pertamina")]
    pub name: String,
    pub logo_url: String,
    pub website_url: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<client_logo::Model> for ClientLogoResponse {
    fn from(l: client_logo::Model) -> Self {
        Self {
            id: l.id,
            name: l.name,
            logo_url: l.logo_url,
            website_url: l.website_url,
            is_active: l.is_active,
            sort_order: l.sort_order,
            created_at: l.created_at,
            updated_at: l.updated_at,
        }
    }
}

#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientLogoRequest {
    pub name: String,
    pub logo_url: String,
    pub website_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Deserialize, Default, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientLogoRequest {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub website_url: Option<Option<String>>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

fn check_sort_order(errors: &mut Vec<FieldError>, sort_order: i32) {
    if sort_order < 0 {
        errors.push(FieldError::new("sortOrder", "sortOrder must be >= 0"));
    }
}

pub fn validate_create_client_logo(payload: &CreateClientLogoRequest) -> Result<(), AppError> {
    let mut errors = Vec::new();
    check_required_text(&mut errors, "name", &payload.name, 128);
    if payload.logo_url.trim().is_empty() {
        errors.push(FieldError::new("logoUrl", "logoUrl must not be empty"));
    }
    check_sort_order(&mut errors, payload.sort_order);
    finish(errors)
}

pub fn validate_update_client_logo(payload: &UpdateClientLogoRequest) -> Result<(), AppError> {
    let mut errors = Vec::new();
    if let Some(ref name) = payload.name {
        check_required_text(&mut errors, "name", name, 128);
    }
    if let Some(ref logo_url) = payload.logo_url
        && logo_url.trim().is_empty()
    {
        errors.push(FieldError::new("logoUrl", "logoUrl must not be empty"));
    }
    if let Some(sort_order) = payload.sort_order {
        check_sort_order(&mut errors, sort_order);
    }
    finish(errors)
}
