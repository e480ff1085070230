use content_entity_derive::content_entity;
use sea_orm::entity::prelude::*;

#[content_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "hero_slides")]
pub struct Model {
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub cta_label: Option<String>,
    pub cta_href: Option<String>,
    #[sea_orm(default_value = 0)]
    pub display_order: i32,
    #[sea_orm(default_value = true)]
    pub active: bool,
}

impl ActiveModelBehavior for ActiveModel {}
