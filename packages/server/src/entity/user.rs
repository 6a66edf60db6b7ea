use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_EDITOR: &str = "editor";
pub const ROLE_VIEWER: &str = "viewer";

/// All roles a user account can hold.
pub const ROLES: &[&str] = &[ROLE_ADMIN, ROLE_EDITOR, ROLE_VIEWER];

/// The role assigned to invited users when none is given.
pub const DEFAULT_ROLE: &str = ROLE_VIEWER;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2 hash, never the plaintext.
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// One of: admin, editor, viewer.
    pub role: String,
    pub is_active: bool,

    /// NULL for the bootstrap admin.
    pub invited_by: Option<i32>,

    #[sea_orm(has_many)]
    pub blog_posts: HasMany<super::blog_post::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
