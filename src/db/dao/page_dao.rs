use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter};

use super::{DaoBase, DaoResult};
use crate::db::entities::dynamic_page::{self, Entity as DynamicPage};

#[derive(Clone)]
pub struct DynamicPageDao {
    db: DatabaseConnection,
}

impl DaoBase for DynamicPageDao {
    type Entity = DynamicPage;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl DynamicPageDao {
    pub async fn find_by_slug(&self, slug: &str) -> DaoResult<Option<dynamic_page::Model>> {
        let slug = slug.to_string();
        self.find(1, 1, None, move |query| {
            query.filter(dynamic_page::Column::Slug.eq(slug))
        })
        .await
        .map(|response| response.data.into_iter().next())
    }

    pub async fn list_published(&self) -> DaoResult<Vec<dynamic_page::Model>> {
        self.all(None, |query| {
            query.filter(dynamic_page::Column::Published.eq(true))
        })
        .await
    }
}
