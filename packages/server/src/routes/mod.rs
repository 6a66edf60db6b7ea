use axum::{
    Router,
    routing::{get, post, put},
};

use crate::handlers;
use crate::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(public_routes())
        .nest("/admin", admin_routes())
}

/// Read-only surface plus the contact form. No authentication.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/blog/posts", get(handlers::blog::list_published_posts))
        .route("/blog/posts/{id}", get(handlers::blog::get_published_post))
        .route("/categories", get(handlers::category::list_categories))
        .route("/services", get(handlers::service::list_services))
        .route(
            "/services/{slug}",
            get(handlers::service::get_service_by_slug),
        )
        .route("/projects", get(handlers::project::list_projects))
        .route("/projects/{id}", get(handlers::project::get_project))
        .route(
            "/client-logos",
            get(handlers::client_logo::list_client_logos),
        )
        .route("/contact", post(handlers::contact::submit_contact_form))
}

/// Admin surface. Every handler except login demands a bearer token.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::auth::login))
        .route(
            "/blog/posts",
            get(handlers::blog::list_posts).post(handlers::blog::create_post),
        )
        .route(
            "/blog/posts/{id}",
            put(handlers::blog::update_post).delete(handlers::blog::delete_post),
        )
        .route(
            "/categories",
            get(handlers::category::list_categories_admin).post(handlers::category::create_category),
        )
        .route(
            "/categories/{id}",
            put(handlers::category::update_category).delete(handlers::category::delete_category),
        )
        .route(
            "/services",
            get(handlers::service::list_services_admin).post(handlers::service::create_service),
        )
        .route(
            "/services/{id}",
            put(handlers::service::update_service).delete(handlers::service::delete_service),
        )
        .route(
            "/projects",
            get(handlers::project::list_projects_admin).post(handlers::project::create_project),
        )
        .route(
            "/projects/{id}",
            put(handlers::project::update_project).delete(handlers::project::delete_project),
        )
        .route(
            "/client-logos",
            get(handlers::client_logo::list_client_logos_admin)
                .post(handlers::client_logo::create_client_logo),
        )
        .route(
            "/client-logos/{id}",
            put(handlers::client_logo::update_client_logo)
                .delete(handlers::client_logo::delete_client_logo),
        )
        .route(
            "/contact-submissions",
            get(handlers::contact::list_contact_submissions),
        )
        .route(
            "/contact-submissions/{id}/read",
            put(handlers::contact::mark_submission_read),
        )
        .route(
            "/users",
            get(handlers::user::list_users).post(handlers::user::invite_user),
        )
        .route(
            "/users/{id}",
            put(handlers::user::update_user).delete(handlers::user::delete_user),
        )
}
