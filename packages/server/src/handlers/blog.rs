use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{blog_post, category, user};
use crate::error::{AppError, ErrorBody, FieldError};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::blog::{
    BlogPostResponse, CreateBlogPostRequest, UpdateBlogPostRequest, validate_create_blog_post,
    validate_update_blog_post,
};
use crate::models::shared::{MessageResponse, SortQuery, finish, sort_order};
use crate::state::AppState;

fn post_sort_column(query: &SortQuery) -> Result<blog_post::Column, AppError> {
    match query.sort_by.as_deref().unwrap_or("createdAt") {
        "createdAt" => Ok(blog_post::Column::CreatedAt),
        "updatedAt" => Ok(blog_post::Column::UpdatedAt),
        "title" => Ok(blog_post::Column::Title),
        other => Err(AppError::invalid(
            "sortBy",
            format!("sortBy must be one of: createdAt, updatedAt, title, got '{other}'"),
        )),
    }
}

async fn find_post<C>(conn: &C, id: i32) -> Result<blog_post::Model, AppError>
where
    C: ConnectionTrait,
{
    blog_post::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog post not found".into()))
}

/// Verify that the author and category a post points at actually exist.
async fn check_references<C>(
    conn: &C,
    author_id: Option<i32>,
    category_id: Option<i32>,
) -> Result<(), AppError>
where
    C: ConnectionTrait,
{
    let mut errors = Vec::new();
    if let Some(author_id) = author_id
        && user::Entity::find_by_id(author_id).one(conn).await?.is_none()
    {
        errors.push(FieldError::new(
            "authorId",
            format!("author {author_id} does not exist"),
        ));
    }
    if let Some(category_id) = category_id
        && category::Entity::find_by_id(category_id)
            .one(conn)
            .await?
            .is_none()
    {
        errors.push(FieldError::new(
            "categoryId",
            format!("category {category_id} does not exist"),
        ));
    }
    finish(errors)
}

#[utoipa::path(
    get,
    path = "/api/blog/posts",
    tag = "Blog",
    operation_id = "listPublishedBlogPosts",
    summary = "List published blog posts",
    params(SortQuery),
    responses(
        (status = 200, description = "Published posts", body = Vec<BlogPostResponse>),
        (status = 400, description = "Unknown sort key (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_published_posts(
    State(state): State<AppState>,
    Query(query): Query<SortQuery>,
) -> Result<Json<Vec<BlogPostResponse>>, AppError> {
    let column = post_sort_column(&query)?;
    let order = sort_order(&query)?;

    let posts = blog_post::Entity::find()
        .filter(blog_post::Column::Published.eq(true))
        .order_by(column, order)
        .all(&state.db)
        .await?;

    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/blog/posts/{id}",
    tag = "Blog",
    operation_id = "getPublishedBlogPost",
    summary = "Get a published blog post by ID",
    params(("id" = i32, Path, description = "Blog post ID")),
    responses(
        (status = 200, description = "Blog post", body = BlogPostResponse),
        (status = 404, description = "Absent or unpublished (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_published_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<BlogPostResponse>, AppError> {
    // Drafts are indistinguishable from absent posts on the public surface.
    let post = blog_post::Entity::find_by_id(id)
        .filter(blog_post::Column::Published.eq(true))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog post not found".into()))?;

    Ok(Json(post.into()))
}

#[utoipa::path(
    get,
    path = "/api/admin/blog/posts",
    tag = "Blog",
    operation_id = "listAllBlogPosts",
    summary = "List all blog posts, drafts included",
    params(SortQuery),
    responses(
        (status = 200, description = "All posts", body = Vec<BlogPostResponse>),
        (status = 400, description = "Unknown sort key (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip_all)]
pub async fn list_posts(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<SortQuery>,
) -> Result<Json<Vec<BlogPostResponse>>, AppError> {
    let column = post_sort_column(&query)?;
    let order = sort_order(&query)?;

    let posts = blog_post::Entity::find()
        .order_by(column, order)
        .all(&state.db)
        .await?;

    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/api/admin/blog/posts",
    tag = "Blog",
    operation_id = "createBlogPost",
    summary = "Create a blog post",
    request_body = CreateBlogPostRequest,
    responses(
        (status = 201, description = "Post created", body = BlogPostResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(title = %payload.title))]
pub async fn create_post(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateBlogPostRequest>,
) -> Result<impl IntoResponse, AppError> {
    auth_user.require_editor()?;
    validate_create_blog_post(&payload)?;
    check_references(&state.db, Some(payload.author_id), Some(payload.category_id)).await?;

    let now = chrono::Utc::now();
    let new_post = blog_post::ActiveModel {
        title: Set(payload.title.trim().to_string()),
        content: Set(payload.content),
        excerpt: Set(payload.excerpt),
        author_id: Set(payload.author_id),
        category_id: Set(payload.category_id),
        image_url: Set(payload.image_url),
        published: Set(payload.published),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let model = new_post.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(BlogPostResponse::from(model))))
}

#[utoipa::path(
    put,
    path = "/api/admin/blog/posts/{id}",
    tag = "Blog",
    operation_id = "updateBlogPost",
    summary = "Partially update a blog post",
    description = "Only provided fields are modified; `imageUrl: null` clears the image.",
    params(("id" = i32, Path, description = "Blog post ID")),
    request_body = UpdateBlogPostRequest,
    responses(
        (status = 200, description = "Post updated", body = BlogPostResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Post not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(id))]
pub async fn update_post(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateBlogPostRequest>,
) -> Result<Json<BlogPostResponse>, AppError> {
    auth_user.require_editor()?;
    validate_update_blog_post(&payload)?;

    let txn = state.db.begin().await?;

    let existing = find_post(&txn, id).await?;
    check_references(&txn, payload.author_id, payload.category_id).await?;

    let mut active: blog_post::ActiveModel = existing.into();
    if let Some(ref title) = payload.title {
        active.title = Set(title.trim().to_string());
    }
    if let Some(content) = payload.content {
        active.content = Set(content);
    }
    if let Some(excerpt) = payload.excerpt {
        active.excerpt = Set(excerpt);
    }
    if let Some(author_id) = payload.author_id {
        active.author_id = Set(author_id);
    }
    if let Some(category_id) = payload.category_id {
        active.category_id = Set(category_id);
    }
    if let Some(image_url) = payload.image_url {
        active.image_url = Set(image_url);
    }
    if let Some(published) = payload.published {
        active.published = Set(published);
    }
    active.updated_at = Set(chrono::Utc::now());

    let model = active.update(&txn).await?;
    txn.commit().await?;

    Ok(Json(model.into()))
}

#[utoipa::path(
    delete,
    path = "/api/admin/blog/posts/{id}",
    tag = "Blog",
    operation_id = "deleteBlogPost",
    summary = "Delete a blog post",
    params(("id" = i32, Path, description = "Blog post ID")),
    responses(
        (status = 200, description = "Post deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Post not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(id))]
pub async fn delete_post(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    auth_user.require_editor()?;

    let result = blog_post::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Blog post not found".into()));
    }

    Ok(Json(MessageResponse::new("Blog post deleted successfully")))
}
