use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub short_description: String,
    pub client: String,

    pub service_id: i32,
    #[sea_orm(belongs_to, from = "service_id", to = "id")]
    pub service: HasOne<super::service::Entity>,

    pub image_url: Option<String>,
    pub completed_at: Option<DateTimeUtc>,
    /// Free text, e.g. "8 months".
    pub duration: Option<String>,
    pub team_size: Option<i32>,
    /// Stored as a JSON array of strings.
    #[sea_orm(column_type = "JsonBinary")]
    pub technologies: Json,
    pub challenges: Option<String>,
    pub results: Option<String>,
    pub is_active: bool,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
