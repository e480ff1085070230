use content_entity_derive::content_entity;
use sea_orm::entity::prelude::*;

#[content_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "faq_categories")]
pub struct Model {
    pub name: String,
    #[sea_orm(default_value = 0)]
    pub display_order: i32,
    #[sea_orm(has_many)]
    pub questions: HasMany<super::faq_question::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
