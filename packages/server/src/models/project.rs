use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::project;
use crate::error::{AppError, FieldError};

use super::shared::{check_required_text, default_true, double_option, finish};

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: i32,
    #[schema(example = "Green Building Certification for Jakarta Office Tower")]
    pub title: String,
    pub description: String,
    pub short_description: String,
    #[schema(example = "PT Ciputra Development")]
    pub client: String,
    pub service_id: i32,
    pub image_url: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    pub duration: Option<String>,
    pub team_size: Option<i32>,
    pub technologies: Vec<String>,
    pub challenges: Option<String>,
    pub results: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<project::Model> for ProjectResponse {
    fn from(p: project::Model) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            short_description: p.short_description,
            client: p.client,
            service_id: p.service_id,
            image_url: p.image_url,
            completed_at: p.completed_at,
            duration: p.duration,
            team_size: p.team_size,
            technologies: serde_json::from_value(p.technologies).unwrap_or_default(),
            challenges: p.challenges,
            results: p.results,
            is_active: p.is_active,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub client: String,
    pub service_id: i32,
    pub image_url: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    pub duration: Option<String>,
    pub team_size: Option<i32>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub challenges: Option<String>,
    pub results: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Deserialize, Default, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub client: Option<String>,
    pub service_id: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub completed_at: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub duration: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub team_size: Option<Option<i32>>,
    pub technologies: Option<Vec<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub challenges: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub results: Option<Option<String>>,
    pub is_active: Option<bool>,
}

fn check_team_size(errors: &mut Vec<FieldError>, team_size: Option<i32>) {
    if let Some(n) = team_size
        && n < 1
    {
        errors.push(FieldError::new("teamSize", "teamSize must be at least 1"));
    }
}

pub fn validate_create_project(payload: &CreateProjectRequest) -> Result<(), AppError> {
    let mut errors = Vec::new();
    check_required_text(&mut errors, "title", &payload.title, 256);
    if payload.description.trim().is_empty() {
        errors.push(FieldError::new(
            "description",
            "description must not be empty",
        ));
    }
    check_required_text(&mut errors, "shortDescription", &payload.short_description, 512);
    check_required_text(&mut errors, "client", &payload.client, 128);
    check_team_size(&mut errors, payload.team_size);
    finish(errors)
}

pub fn validate_update_project(payload: &UpdateProjectRequest) -> Result<(), AppError> {
    let mut errors = Vec::new();
    if let Some(ref title) = payload.title {
        check_required_text(&mut errors, "title", title, 256);
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
    if let Some(ref client) = payload.client {
        check_required_text(&mut errors, "client", client, 128);
    }
    if let Some(team_size) = payload.team_size {
        check_team_size(&mut errors, team_size);
    }
    finish(errors)
}
