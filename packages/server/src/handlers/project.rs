use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{project, service};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::project::{
    CreateProjectRequest, ProjectResponse, UpdateProjectRequest, validate_create_project,
    validate_update_project,
};
use crate::models::shared::{MessageResponse, SortQuery, sort_order};
use crate::state::AppState;

fn project_sort_column(query: &SortQuery) -> Result<project::Column, AppError> {
    match query.sort_by.as_deref().unwrap_or("completedAt") {
        "completedAt" => Ok(project::Column::CompletedAt),
        "createdAt" => Ok(project::Column::CreatedAt),
        "title" => Ok(project::Column::Title),
        other => Err(AppError::invalid(
            "sortBy",
            format!("sortBy must be one of: completedAt, createdAt, title, got '{other}'"),
        )),
    }
}

async fn find_project<C>(conn: &C, id: i32) -> Result<project::Model, AppError>
where
    C: ConnectionTrait,
{
    project::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".into()))
}

/// Projects must point at an existing service.
async fn check_service_reference<C>(conn: &C, service_id: Option<i32>) -> Result<(), AppError>
where
    C: ConnectionTrait,
{
    if let Some(service_id) = service_id
        && service::Entity::find_by_id(service_id)
            .one(conn)
            .await?
            .is_none()
    {
        return Err(AppError::invalid(
            "serviceId",
            format!("service {service_id} does not exist"),
        ));
    }
    Ok(())
}

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "Projects",
    operation_id = "listProjects",
    summary = "List active reference projects",
    params(SortQuery),
    responses(
        (status = 200, description = "Active projects", body = Vec<ProjectResponse>),
        (status = 400, description = "Unknown sort key (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<SortQuery>,
) -> Result<Json<Vec<ProjectResponse>>, AppError> {
    let column = project_sort_column(&query)?;
    let order = sort_order(&query)?;

    let projects = project::Entity::find()
        .filter(project::Column::IsActive.eq(true))
        .order_by(column, order)
        .all(&state.db)
        .await?;

    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "Projects",
    operation_id = "getProject",
    summary = "Get an active project by ID",
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project", body = ProjectResponse),
        (status = 404, description = "Absent or inactive (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProjectResponse>, AppError> {
    let project = project::Entity::find_by_id(id)
        .filter(project::Column::IsActive.eq(true))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

    Ok(Json(project.into()))
}

#[utoipa::path(
    get,
    path = "/api/admin/projects",
    tag = "Projects",
    operation_id = "listProjectsAdmin",
    summary = "List all projects, inactive included",
    params(SortQuery),
    responses(
        (status = 200, description = "All projects", body = Vec<ProjectResponse>),
        (status = 400, description = "Unknown sort key (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip_all)]
pub async fn list_projects_admin(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<SortQuery>,
) -> Result<Json<Vec<ProjectResponse>>, AppError> {
    let column = project_sort_column(&query)?;
    let order = sort_order(&query)?;

    let projects = project::Entity::find()
        .order_by(column, order)
        .all(&state.db)
        .await?;

    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/api/admin/projects",
    tag = "Projects",
    operation_id = "createProject",
    summary = "Create a project",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created", body = ProjectResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(title = %payload.title))]
pub async fn create_project(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProjectRequest>,
) -> Result<impl IntoResponse, AppError> {
    auth_user.require_editor()?;
    validate_create_project(&payload)?;
    check_service_reference(&state.db, Some(payload.service_id)).await?;

    let now = chrono::Utc::now();
    let new_project = project::ActiveModel {
        title: Set(payload.title.trim().to_string()),
        description: Set(payload.description),
        short_description: Set(payload.short_description),
        client: Set(payload.client),
        service_id: Set(payload.service_id),
        image_url: Set(payload.image_url),
        completed_at: Set(payload.completed_at),
        duration: Set(payload.duration),
        team_size: Set(payload.team_size),
        technologies: Set(serde_json::json!(payload.technologies)),
        challenges: Set(payload.challenges),
        results: Set(payload.results),
        is_active: Set(payload.is_active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let model = new_project.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(ProjectResponse::from(model))))
}

#[utoipa::path(
    put,
    path = "/api/admin/projects/{id}",
    tag = "Projects",
    operation_id = "updateProject",
    summary = "Partially update a project",
    description = "Only provided fields are modified; explicit `null` clears nullable fields.",
    params(("id" = i32, Path, description = "Project ID")),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Project updated", body = ProjectResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Project not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(id))]
pub async fn update_project(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateProjectRequest>,
) -> Result<Json<ProjectResponse>, AppError> {
    auth_user.require_editor()?;
    validate_update_project(&payload)?;

    let txn = state.db.begin().await?;

    let existing = find_project(&txn, id).await?;
    check_service_reference(&txn, payload.service_id).await?;

    let mut active: project::ActiveModel = existing.into();
    if let Some(ref title) = payload.title {
        active.title = Set(title.trim().to_string());
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(short_description) = payload.short_description {
        active.short_description = Set(short_description);
    }
    if let Some(client) = payload.client {
        active.client = Set(client);
    }
    if let Some(service_id) = payload.service_id {
        active.service_id = Set(service_id);
    }
    if let Some(image_url) = payload.image_url {
        active.image_url = Set(image_url);
    }
    if let Some(completed_at) = payload.completed_at {
        active.completed_at = Set(completed_at);
    }
    if let Some(duration) = payload.duration {
        active.duration = Set(duration);
    }
    if let Some(team_size) = payload.team_size {
        active.team_size = Set(team_size);
    }
    if let Some(technologies) = payload.technologies {
        active.technologies = Set(serde_json::json!(technologies));
    }
    if let Some(challenges) = payload.challenges {
        active.challenges = Set(challenges);
    }
    if let Some(results) = payload.results {
        active.results = Set(results);
    }
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(is_active);
    }
    active.updated_at = Set(chrono::Utc::now());

    let model = active.update(&txn).await?;
    txn.commit().await?;

    Ok(Json(model.into()))
}

#[utoipa::path(
    delete,
    path = "/api/admin/projects/{id}",
    tag = "Projects",
    operation_id = "deleteProject",
    summary = "Delete a project",
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Project not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(id))]
pub async fn delete_project(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    auth_user.require_editor()?;

    let result = project::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Project not found".into()));
    }

    Ok(Json(MessageResponse::new("Project deleted successfully")))
}
