use content_entity_derive::content_entity;
use sea_orm::entity::prelude::*;

#[content_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "faq_questions")]
pub struct Model {
    #[sea_orm(indexed)]
    pub category_id: Uuid,
    pub question: String,
    pub answer: String,
    #[sea_orm(default_value = 0)]
    pub display_order: i32,
    #[sea_orm(belongs_to, from = "category_id", to = "id", on_delete = "Cascade")]
    pub category: HasOne<super::faq_category::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
