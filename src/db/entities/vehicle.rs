use content_entity_derive::content_entity;
use sea_orm::entity::prelude::*;

/// Catalog product. `category` and `status` hold the string form of
/// [`crate::services::vehicle_service::VehicleCategory`] /
/// [`crate::services::vehicle_service::VehicleStatus`].
#[content_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub tagline: String,
    pub description: String,
    pub category: String,
    pub status: String,
    #[sea_orm(default_value = 0)]
    pub display_order: i32,
    pub hero_image: Option<String>,
    #[sea_orm(has_many)]
    pub colors: HasMany<super::vehicle_color::Entity>,
    #[sea_orm(has_many)]
    pub specs: HasMany<super::vehicle_spec::Entity>,
    #[sea_orm(has_many)]
    pub features: HasMany<super::smart_feature::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
