use content_entity_derive::content_entity;
use sea_orm::entity::prelude::*;

/// Homepage counters ("45k+ vehicles on the road").
#[content_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "stats")]
pub struct Model {
    pub label: String,
    pub value: String,
    pub suffix: Option<String>,
    #[sea_orm(default_value = 0)]
    pub display_order: i32,
}

impl ActiveModelBehavior for ActiveModel {}
