use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String, // rendered HTML
    pub short_description: String,
    #[sea_orm(unique)]
    pub slug: String,
    /// Symbolic glyph name resolved client-side.
    pub icon: String,
    /// Feature bullet points stored as a JSON array of strings.
    #[sea_orm(column_type = "JsonBinary")]
    pub features: Json,
    pub image_url: Option<String>,
    pub is_active: bool,

    #[sea_orm(has_many)]
    pub projects: HasMany<super::project::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
