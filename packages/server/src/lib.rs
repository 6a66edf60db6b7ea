pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod seed;
pub mod state;
pub mod utils;

use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Greenfield Environment Solution API",
        version = "1.0.0",
        description = "Content API for the Greenfield corporate site: blog, services, projects, client logos, contact form, and admin user management"
    ),
    paths(
        handlers::auth::login,
        handlers::blog::list_published_posts,
        handlers::blog::get_published_post,
        handlers::blog::list_posts,
        handlers::blog::create_post,
        handlers::blog::update_post,
        handlers::blog::delete_post,
        handlers::category::list_categories,
        handlers::category::list_categories_admin,
        handlers::category::create_category,
        handlers::category::update_category,
        handlers::category::delete_category,
        handlers::service::list_services,
        handlers::service::get_service_by_slug,
        handlers::service::list_services_admin,
        handlers::service::create_service,
        handlers::service::update_service,
        handlers::service::delete_service,
        handlers::project::list_projects,
        handlers::project::get_project,
        handlers::project::list_projects_admin,
        handlers::project::create_project,
        handlers::project::update_project,
        handlers::project::delete_project,
        handlers::client_logo::list_client_logos,
        handlers::client_logo::list_client_logos_admin,
        handlers::client_logo::create_client_logo,
        handlers::client_logo::update_client_logo,
        handlers::client_logo::delete_client_logo,
        handlers::contact::submit_contact_form,
        handlers::contact::list_contact_submissions,
        handlers::contact::mark_submission_read,
        handlers::user::list_users,
        handlers::user::invite_user,
        handlers::user::update_user,
        handlers::user::delete_user,
    ),
    tags(
        (name = "Auth", description = "Admin login"),
        (name = "Blog", description = "Blog post CRUD and the public feed"),
        (name = "Categories", description = "Blog category management"),
        (name = "Services", description = "Consulting service pages"),
        (name = "Projects", description = "Reference projects"),
        (name = "Client Logos", description = "Client logo carousel"),
        (name = "Contact", description = "Contact form and inbox"),
        (name = "Users", description = "User management"),
    ),
    modifiers(&SecurityAddon),
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let cors = &state.config.server.cors;
    let layer = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(cors.max_age));

    if cors.allow_origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = cors
            .allow_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let api = ApiDoc::openapi();

    axum::Router::new()
        .nest("/api", routes::api_routes())
        .layer(cors_layer(&state))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
        .merge(Scalar::with_url("/scalar", api))
}
