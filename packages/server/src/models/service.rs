use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::service;
use crate::error::{AppError, FieldError};

use super::shared::{check_required_text, check_slug, default_true, double_option, finish};

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    pub id: i32,
    #[schema(example = "Environmental Impact Assessment")]
    pub name: String,
    /// Rendered HTML body.
    pub description: String,
    pub short_description: String,
    #[schema(example = "environmental-impact-assessment")]
    pub slug: String,
    /// Symbolic glyph name resolved client-side, e.g. "Leaf".
    pub icon: String,
    pub features: Vec<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<service::Model> for ServiceResponse {
    fn from(s: service::Model) -> Self {
        Self {
            id: s.id,
            name: s.name,
            description: s.description,
            short_description: s.short_description,
            slug: s.slug,
            icon: s.icon,
            features: serde_json::from_value(s.features).unwrap_or_default(),
            image_url: s.image_url,
            is_active: s.is_active,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    pub name: String,
    pub description: String,
    pub short_description: String,
    pub slug: String,
    pub icon: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Deserialize, Default, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub slug: Option<String>,
    pub icon: Option<String>,
    pub features: Option<Vec<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
    pub is_active: Option<bool>,
}

pub fn validate_create_service(payload: &CreateServiceRequest) -> Result<(), AppError> {
    let mut errors = Vec::new();
    check_required_text(&mut errors, "name", &payload.name, 128);
    if payload.description.trim().is_empty() {
        errors.push(FieldError::new(
            "description",
            "description must not be empty",
        ));
    }
    check_required_text(&mut errors, "shortDescription", &payload.short_description, 512);
    check_slug(&mut errors, "slug", &payload.slug);
    if payload.icon.trim().is_empty() {
        errors.push(FieldError::new("icon", "icon must not be empty"));
    }
    finish(errors)
}

pub fn validate_update_service(payload: &UpdateServiceRequest) -> Result<(), AppError> {
    let mut errors = Vec::new();
    if let Some(ref name) = payload.name {
        check_required_text(&mut errors, "name", name, 128);
    }
    if let Some(ref description) = payload.description
        && description.trim().is_empty()
    {
        errors.push(FieldError::new(
            "description",
            "description must not be empty",
        ));
    }
    if let Some(ref short) = payload.short_description {
        check_required_text(&mut errors, "shortDescription", short, 512);
    }
    if let Some(ref slug) = payload.slug {
        check_slug(&mut errors, "slug", slug);
    }
    if let Some(ref icon) = payload.icon
        && icon.trim().is_empty()
    {
        errors.push(FieldError::new("icon", "icon must not be empty"));
    }
    finish(errors)
}
