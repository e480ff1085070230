use content_entity_derive::content_entity;
use sea_orm::entity::prelude::*;

/// Admin-authored content page. `layout` selects the render template,
/// `placement` decides whether the slug appears in header or footer nav.
#[content_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "dynamic_pages")]
pub struct Model {
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub layout: String,
    pub placement: String,
    pub content: Json,
    #[sea_orm(default_value = false)]
    pub published: bool,
}

impl ActiveModelBehavior for ActiveModel {}
