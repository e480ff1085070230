use content_entity_derive::content_entity;
use sea_orm::entity::prelude::*;

#[content_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle_colors")]
pub struct Model {
    #[sea_orm(indexed)]
    pub vehicle_id: Uuid,
    pub name: String,
    pub hex_code: String,
    pub image_url: Option<String>,
    #[sea_orm(default_value = 0)]
    pub display_order: i32,
    #[sea_orm(belongs_to, from = "vehicle_id", to = "id", on_delete = "Cascade")]
    pub vehicle: HasOne<super::vehicle::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
