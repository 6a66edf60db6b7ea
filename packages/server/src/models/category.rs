use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::category;
use crate::error::AppError;

use super::shared::{check_required_text, check_slug, finish};

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i32,
    #[schema(example = "Green Building")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = "green-building")]
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<category::Model> for CategoryResponse {
    fn from(c: category::Model) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            slug: c.slug,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
    pub slug: String,
}

#[derive(Deserialize, Default, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::shared::double_option")]
    pub description: Option<Option<String>>,
    pub slug: Option<String>,
}

pub fn validate_create_category(payload: &CreateCategoryRequest) -> Result<(), AppError> {
    let mut errors = Vec::new();
    check_required_text(&mut errors, "name", &payload.name, 128);
    check_slug(&mut errors, "slug", &payload.slug);
    finish(errors)
}

pub fn validate_update_category(payload: &UpdateCategoryRequest) -> Result<(), AppError> {
    let mut errors = Vec::new();
    if let Some(ref name) = payload.name {
        check_required_text(&mut errors, "name", name, 128);
    }
    if let Some(ref slug) = payload.slug {
        check_slug(&mut errors, "slug", slug);
    }
    finish(errors)
}
