use sea_orm::{ColumnTrait, DatabaseConnection, Order, QueryFilter};
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::prelude::{FaqCategory, FaqQuestion};
use crate::db::entities::{faq_category, faq_question};

#[derive(Clone)]
pub struct FaqCategoryDao {
    db: DatabaseConnection,
}

impl DaoBase for FaqCategoryDao {
    type Entity = FaqCategory;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl FaqCategoryDao {
    pub async fn list_ordered(&self) -> DaoResult<Vec<faq_category::Model>> {
        self.all(
            Some((faq_category::Column::DisplayOrder, Order::Asc)),
            |query| query,
        )
        .await
    }
}

#[derive(Clone)]
pub struct FaqQuestionDao {
    db: DatabaseConnection,
}

impl DaoBase for FaqQuestionDao {
    type Entity = FaqQuestion;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl FaqQuestionDao {
    pub async fn list_for_category(
        &self,
        category_id: &Uuid,
    ) -> DaoResult<Vec<faq_question::Model>> {
        let category_id = *category_id;
        self.all(
            Some((faq_question::Column::DisplayOrder, Order::Asc)),
            move |query| query.filter(faq_question::Column::CategoryId.eq(category_id)),
        )
        .await
    }
}
