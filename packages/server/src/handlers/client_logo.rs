use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::client_logo;
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::client_logo::{
    ClientLogoResponse, CreateClientLogoRequest, UpdateClientLogoRequest,
    validate_create_client_logo, validate_update_client_logo,
};
use crate::models::shared::MessageResponse;
use crate::state::AppState;

async fn find_logo<C>(conn: &C, id: i32) -> Result<client_logo::Model, AppError>
where
    C: ConnectionTrait,
{
    client_logo::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::NotFound("Client logo not found".into()))
}

#[utoipa::path(
    get,
    path = "/api/client-logos",
    tag = "Client Logos",
    operation_id = "listClientLogos",
    summary = "List active client logos in display order",
    responses(
        (status = 200, description = "Active logos, sortOrder ascending", body = Vec<ClientLogoResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_client_logos(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientLogoResponse>>, AppError> {
    let logos = client_logo::Entity::find()
        .filter(client_logo::Column::IsActive.eq(true))
        .order_by_asc(client_logo::Column::SortOrder)
        .all(&state.db)
        .await?;

    Ok(Json(logos.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/admin/client-logos",
    tag = "Client Logos",
    operation_id = "listClientLogosAdmin",
    summary = "List all client logos, inactive included",
    responses(
        (status = 200, description = "All logos", body = Vec<ClientLogoResponse>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip_all)]
pub async fn list_client_logos_admin(
    _auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientLogoResponse>>, AppError> {
    let logos = client_logo::Entity::find()
        .order_by_asc(client_logo::Column::SortOrder)
        .all(&state.db)
        .await?;

    Ok(Json(logos.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/api/admin/client-logos",
    tag = "Client Logos",
    operation_id = "createClientLogo",
    summary = "Create a client logo",
    request_body = CreateClientLogoRequest,
    responses(
        (status = 201, description = "Logo created", body = ClientLogoResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(name = %payload.name))]
pub async fn create_client_logo(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateClientLogoRequest>,
) -> Result<impl IntoResponse, AppError> {
    auth_user.require_editor()?;
    validate_create_client_logo(&payload)?;

    let now = chrono::Utc::now();
    let new_logo = client_logo::ActiveModel {
        name: Set(payload.name.trim().to_string()),
        logo_url: Set(payload.logo_url),
        website_url: Set(payload.website_url),
        is_active: Set(payload.is_active),
        sort_order: Set(payload.sort_order),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let model = new_logo.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(ClientLogoResponse::from(model))))
}

#[utoipa::path(
    put,
    path = "/api/admin/client-logos/{id}",
    tag = "Client Logos",
    operation_id = "updateClientLogo",
    summary = "Partially update a client logo",
    params(("id" = i32, Path, description = "Client logo ID")),
    request_body = UpdateClientLogoRequest,
    responses(
        (status = 200, description = "Logo updated", body = ClientLogoResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Logo not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(id))]
pub async fn update_client_logo(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateClientLogoRequest>,
) -> Result<Json<ClientLogoResponse>, AppError> {
    auth_user.require_editor()?;
    validate_update_client_logo(&payload)?;

    let txn = state.db.begin().await?;

    let existing = find_logo(&txn, id).await?;
    let mut active: client_logo::ActiveModel = existing.into();

    if let Some(ref name) = payload.name {
        active.name = Set(name.trim().to_string());
    }
    if let Some(logo_url) = payload.logo_url {
        active.logo_url = Set(logo_url);
    }
    if let Some(website_url) = payload.website_url {
        active.website_url = Set(website_url);
    }
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(is_active);
    }
    if let Some(sort_order) = payload.sort_order {
        active.sort_order = Set(sort_order);
    }
    active.updated_at = Set(chrono::Utc::now());

    let model = active.update(&txn).await?;
    txn.commit().await?;

    Ok(Json(model.into()))
}

#[utoipa::path(
    delete,
    path = "/api/admin/client-logos/{id}",
    tag = "Client Logos",
    operation_id = "deleteClientLogo",
    summary = "Delete a client logo",
    params(("id" = i32, Path, description = "Client logo ID")),
    responses(
        (status = 200, description = "Logo deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Logo not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(id))]
pub async fn delete_client_logo(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    auth_user.require_editor()?;

    let result = client_logo::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Client logo not found".into()));
    }

    Ok(Json(MessageResponse::new("Client logo deleted successfully")))
}
