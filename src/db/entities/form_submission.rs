use content_entity_derive::content_entity;
use sea_orm::entity::prelude::*;

/// Captured payload from a public form. The payload stays opaque; only
/// `form_type` and `status` are interpreted server-side.
#[content_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "form_submissions")]
pub struct Model {
    #[sea_orm(indexed)]
    pub form_type: String,
    pub payload: Json,
    #[sea_orm(indexed)]
    pub status: String,
}

impl ActiveModelBehavior for ActiveModel {}
