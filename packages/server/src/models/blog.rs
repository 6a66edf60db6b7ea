use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::blog_post;
use crate::error::{AppError, FieldError};

use super::shared::{check_required_text, double_option, finish};

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostResponse {
    pub id: i32,
    #[schema(example = "Implementasi Green Building di Indonesia")]
    pub title: String,
    /// Rendered HTML body.
    pub content: String,
    pub excerpt: String,
    pub author_id: i32,
    pub category_id: i32,
    pub image_url: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<blog_post::Model> for BlogPostResponse {
    fn from(p: blog_post::Model) -> Self {
        Self {
            id: p.id,
            title: p.title,
            content: p.content,
            excerpt: p.excerpt,
            author_id: p.author_id,
            category_id: p.category_id,
            image_url: p.image_url,
            published: p.published,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPostRequest {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author_id: i32,
    pub category_id: i32,
    pub image_url: Option<String>,
    /// Defaults to draft.
    #[serde(default)]
    pub published: bool,
}

#[derive(Deserialize, Default, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogPostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author_id: Option<i32>,
    pub category_id: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
    pub published: Option<bool>,
}

pub fn validate_create_blog_post(payload: &CreateBlogPostRequest) -> Result<(), AppError> {
    let mut errors = Vec::new();
    check_required_text(&mut errors, "title", &payload.title, 256);
    if payload.content.trim().is_empty() {
        errors.push(FieldError::new("content", "content must not be empty"));
    }
    check_required_text(&mut errors, "excerpt", &payload.excerpt, 512);
    finish(errors)
}

pub fn validate_update_blog_post(payload: &UpdateBlogPostRequest) -> Result<(), AppError> {
    let mut errors = Vec::new();
    if let Some(ref title) = payload.title {
        check_required_text(&mut errors, "title", title, 256);
    }
    if let Some(ref content) = payload.content
        && content.trim().is_empty()
    {
        errors.push(FieldError::new("content", "content must not be empty"));
    }
    if let Some(ref excerpt) = payload.excerpt {
        check_required_text(&mut errors, "excerpt", excerpt, 512);
    }
    finish(errors)
}
