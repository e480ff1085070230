use content_entity_derive::content_entity;
use sea_orm::entity::prelude::*;

#[content_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "testimonials")]
pub struct Model {
    pub author: String,
    pub location: Option<String>,
    pub quote: String,
    pub rating: i32,
    #[sea_orm(default_value = 0)]
    pub display_order: i32,
    #[sea_orm(default_value = true)]
    pub active: bool,
}

impl ActiveModelBehavior for ActiveModel {}
