use sea_orm::{ColumnTrait, DatabaseConnection, Order, QueryFilter};

use super::{DaoBase, DaoResult};
use crate::db::entities::prelude::{JobOpening, PressArticle};
use crate::db::entities::{job_opening, press_article};

#[derive(Clone)]
pub struct JobOpeningDao {
    db: DatabaseConnection,
}

impl DaoBase for JobOpeningDao {
    type Entity = JobOpening;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl JobOpeningDao {
    pub async fn list_open(&self) -> DaoResult<Vec<job_opening::Model>> {
        self.all(None, |query| {
            query.filter(job_opening::Column::Status.eq("open"))
        })
        .await
    }
}

#[derive(Clone)]
pub struct PressArticleDao {
    db: DatabaseConnection,
}

impl DaoBase for PressArticleDao {
    type Entity = PressArticle;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl PressArticleDao {
    pub async fn list_newest_first(&self) -> DaoResult<Vec<press_article::Model>> {
        self.all(
            Some((press_article::Column::PublishedOn, Order::Desc)),
            |query| query,
        )
        .await
    }
}
