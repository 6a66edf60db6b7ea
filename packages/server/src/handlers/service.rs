use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{project, service};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::service::{
    CreateServiceRequest, ServiceResponse, UpdateServiceRequest, validate_create_service,
    validate_update_service,
};
use crate::models::shared::MessageResponse;
use crate::state::AppState;

async fn find_service<C>(conn: &C, id: i32) -> Result<service::Model, AppError>
where
    C: ConnectionTrait,
{
    service::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".into()))
}

#[utoipa::path(
    get,
    path = "/api/services",
    tag = "Services",
    operation_id = "listServices",
    summary = "List active services ordered by name",
    responses(
        (status = 200, description = "Active services", body = Vec<ServiceResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceResponse>>, AppError> {
    let services = service::Entity::find()
        .filter(service::Column::IsActive.eq(true))
        .order_by_asc(service::Column::Name)
        .all(&state.db)
        .await?;

    Ok(Json(services.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/services/{slug}",
    tag = "Services",
    operation_id = "getServiceBySlug",
    summary = "Look up a service by its slug",
    params(("slug" = String, Path, description = "Service slug")),
    responses(
        (status = 200, description = "Service", body = ServiceResponse),
        (status = 404, description = "Service not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(slug = %slug))]
pub async fn get_service_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ServiceResponse>, AppError> {
    let service = service::Entity::find()
        .filter(service::Column::Slug.eq(&slug))
        .filter(service::Column::IsActive.eq(true))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".into()))?;

    Ok(Json(service.into()))
}

#[utoipa::path(
    get,
    path = "/api/admin/services",
    tag = "Services",
    operation_id = "listServicesAdmin",
    summary = "List all services, inactive included",
    responses(
        (status = 200, description = "All services", body = Vec<ServiceResponse>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip_all)]
pub async fn list_services_admin(
    _auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceResponse>>, AppError> {
    let services = service::Entity::find()
        .order_by_asc(service::Column::Name)
        .all(&state.db)
        .await?;

    Ok(Json(services.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/api/admin/services",
    tag = "Services",
    operation_id = "createService",
    summary = "Create a service",
    request_body = CreateServiceRequest,
    responses(
        (status = 201, description = "Service created", body = ServiceResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 409, description = "Duplicate slug (CONFLICT)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(slug = %payload.slug))]
pub async fn create_service(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateServiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    auth_user.require_editor()?;
    validate_create_service(&payload)?;

    let now = chrono::Utc::now();
    let new_service = service::ActiveModel {
        name: Set(payload.name.trim().to_string()),
        description: Set(payload.description),
        short_description: Set(payload.short_description),
        slug: Set(payload.slug),
        icon: Set(payload.icon),
        features: Set(serde_json::json!(payload.features)),
        image_url: Set(payload.image_url),
        is_active: Set(payload.is_active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let model = new_service
        .insert(&state.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::Conflict("A service with that slug already exists".into())
            }
            _ => AppError::from(e),
        })?;

    Ok((StatusCode::CREATED, Json(ServiceResponse::from(model))))
}

#[utoipa::path(
    put,
    path = "/api/admin/services/{id}",
    tag = "Services",
    operation_id = "updateService",
    summary = "Partially update a service",
    params(("id" = i32, Path, description = "Service ID")),
    request_body = UpdateServiceRequest,
    responses(
        (status = 200, description = "Service updated", body = ServiceResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Service not found (NOT_FOUND)", body = ErrorBody),
        (status = 409, description = "Duplicate slug (CONFLICT)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(id))]
pub async fn update_service(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateServiceRequest>,
) -> Result<Json<ServiceResponse>, AppError> {
    auth_user.require_editor()?;
    validate_update_service(&payload)?;

    let txn = state.db.begin().await?;

    let existing = find_service(&txn, id).await?;
    let mut active: service::ActiveModel = existing.into();

    if let Some(ref name) = payload.name {
        active.name = Set(name.trim().to_string());
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(short_description) = payload.short_description {
        active.short_description = Set(short_description);
    }
    if let Some(slug) = payload.slug {
        active.slug = Set(slug);
    }
    if let Some(icon) = payload.icon {
        active.icon = Set(icon);
    }
    if let Some(features) = payload.features {
        active.features = Set(serde_json::json!(features));
    }
    if let Some(image_url) = payload.image_url {
        active.image_url = Set(image_url);
    }
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(is_active);
    }
    active.updated_at = Set(chrono::Utc::now());

    let model = active.update(&txn).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict("A service with that slug already exists".into())
        }
        _ => AppError::from(e),
    })?;
    txn.commit().await?;

    Ok(Json(model.into()))
}

#[utoipa::path(
    delete,
    path = "/api/admin/services/{id}",
    tag = "Services",
    operation_id = "deleteService",
    summary = "Delete a service",
    description = "Rejected while projects still reference the service.",
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Service not found (NOT_FOUND)", body = ErrorBody),
        (status = 409, description = "Service still has projects (CONFLICT)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(id))]
pub async fn delete_service(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    auth_user.require_editor()?;

    let txn = state.db.begin().await?;

    let existing = find_service(&txn, id).await?;

    let project_count = project::Entity::find()
        .filter(project::Column::ServiceId.eq(id))
        .count(&txn)
        .await?;
    if project_count > 0 {
        return Err(AppError::Conflict(
            "Cannot delete a service that still has projects".into(),
        ));
    }

    service::Entity::delete_by_id(existing.id).exec(&txn).await?;
    txn.commit().await?;

    Ok(Json(MessageResponse::new("Service deleted successfully")))
}
