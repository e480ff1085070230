use content_entity_derive::content_entity;
use sea_orm::entity::prelude::*;

#[content_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "job_openings")]
pub struct Model {
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: String,
    pub description: String,
    pub status: String,
}

impl ActiveModelBehavior for ActiveModel {}
