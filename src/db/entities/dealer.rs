use content_entity_derive::content_entity;
use sea_orm::entity::prelude::*;

#[content_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "dealers")]
pub struct Model {
    pub name: String,
    #[sea_orm(indexed)]
    pub state: String,
    #[sea_orm(indexed)]
    pub district: String,
    pub city: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[sea_orm(default_value = true)]
    pub active: bool,
}

impl ActiveModelBehavior for ActiveModel {}
