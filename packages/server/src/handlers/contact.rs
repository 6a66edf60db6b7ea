use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::contact_submission;
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::contact::{
    ContactSubmissionResponse, CreateContactSubmissionRequest, validate_contact_submission,
};
use crate::models::shared::MessageResponse;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "Contact",
    operation_id = "submitContactForm",
    summary = "Submit the public contact form",
    description = "Always acknowledges with a localized confirmation; the stored submission's read state is not exposed here.",
    request_body = CreateContactSubmissionRequest,
    responses(
        (status = 201, description = "Submission stored", body = MessageResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(email = %payload.email))]
pub async fn submit_contact_form(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateContactSubmissionRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_contact_submission(&payload)?;

    let new_submission = contact_submission::ActiveModel {
        name: Set(payload.name.trim().to_string()),
        email: Set(payload.email),
        phone: Set(payload.phone),
        company: Set(payload.company),
        service: Set(payload.service),
        message: Set(payload.message),
        is_read: Set(false),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    new_submission.insert(&state.db).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(
            "Pesan berhasil dikirim. Kami akan menghubungi Anda segera.",
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/admin/contact-submissions",
    tag = "Contact",
    operation_id = "listContactSubmissions",
    summary = "List contact submissions, newest first",
    responses(
        (status = 200, description = "Submissions", body = Vec<ContactSubmissionResponse>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user))]
pub async fn list_contact_submissions(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactSubmissionResponse>>, AppError> {
    auth_user.require_admin()?;

    let submissions = contact_submission::Entity::find()
        .order_by_desc(contact_submission::Column::CreatedAt)
        .all(&state.db)
        .await?;

    Ok(Json(submissions.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    put,
    path = "/api/admin/contact-submissions/{id}/read",
    tag = "Contact",
    operation_id = "markContactSubmissionRead",
    summary = "Mark a contact submission as read",
    params(("id" = i32, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "Marked as read", body = MessageResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Submission not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(id))]
pub async fn mark_submission_read(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    auth_user.require_admin()?;

    let existing = contact_submission::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact submission not found".into()))?;

    let mut active: contact_submission::ActiveModel = existing.into();
    active.is_read = Set(true);
    active.update(&state.db).await?;

    Ok(Json(MessageResponse::new(
        "Contact submission marked as read",
    )))
}
