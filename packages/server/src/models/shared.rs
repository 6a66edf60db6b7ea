use sea_orm::Order;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AppError, FieldError};

/// Generic `{"message": "..."}` body used by delete confirmations and the
/// contact form acknowledgement.
#[derive(Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Category deleted successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Client-supplied sort parameters for list endpoints.
///
/// `sort_by` values are matched per entity against an explicit allow-list;
/// anything outside it is rejected with a validation error rather than
/// silently sorting on an arbitrary column.
#[derive(Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SortQuery {
    /// Field to sort by, e.g. `createdAt`.
    pub sort_by: Option<String>,
    /// `asc` or `desc` (default).
    pub sort_order: Option<String>,
}

/// Resolve the sort direction, defaulting to descending.
pub fn sort_order(query: &SortQuery) -> Result<Order, AppError> {
    match query.sort_order.as_deref() {
        None | Some("desc") => Ok(Order::Desc),
        Some("asc") => Ok(Order::Asc),
        Some(other) => Err(AppError::invalid(
            "sortOrder",
            format!("sortOrder must be 'asc' or 'desc', got '{other}'"),
        )),
    }
}

/// Serde helper for partial-update semantics on nullable fields.
///
/// * JSON field absent  => `None`          (don't update)
/// * JSON field = null  => `Some(None)`    (set to NULL)
/// * JSON field = value => `Some(Some(v))` (set to value)
pub fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Some(Option::deserialize(deserializer)?))
}

pub fn default_true() -> bool {
    true
}

/// Push a field error unless `value` is a non-empty trimmed string within
/// `max` characters.
pub fn check_required_text(errors: &mut Vec<FieldError>, field: &str, value: &str, max: usize) {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.chars().count() > max {
        errors.push(FieldError::new(
            field,
            format!("{field} must be 1-{max} characters"),
        ));
    }
}

/// Slugs are lowercase ASCII letters, digits, and hyphens.
pub fn check_slug(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    let ok = !value.is_empty()
        && value.chars().count() <= 128
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !ok {
        errors.push(FieldError::new(
            field,
            format!("{field} must contain only lowercase letters, digits, and hyphens"),
        ));
    }
}

/// Minimal shape check; real deliverability is out of scope.
pub fn check_email(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    let ok = match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    };
    if !ok {
        errors.push(FieldError::new(
            field,
            format!("{field} must be a valid email address"),
        ));
    }
}

/// Finish a validation pass: empty error list means the payload is valid.
pub fn finish(errors: Vec<FieldError>) -> Result<(), AppError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}
