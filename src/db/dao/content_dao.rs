//! DAOs for the flat homepage content tables: hero slides, testimonials and
//! stats. These share the "ordered, optionally active-flagged rows" shape.

use sea_orm::{ColumnTrait, DatabaseConnection, Order, QueryFilter};

use super::{DaoBase, DaoResult};
use crate::db::entities::prelude::{HeroSlide, Stat, Testimonial};
use crate::db::entities::{hero_slide, stat, testimonial};

#[derive(Clone)]
pub struct HeroSlideDao {
    db: DatabaseConnection,
}

impl DaoBase for HeroSlideDao {
    type Entity = HeroSlide;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl HeroSlideDao {
    pub async fn list_active(&self) -> DaoResult<Vec<hero_slide::Model>> {
        self.all(
            Some((hero_slide::Column::DisplayOrder, Order::Asc)),
            |query| query.filter(hero_slide::Column::Active.eq(true)),
        )
        .await
    }
}

#[derive(Clone)]
pub struct TestimonialDao {
    db: DatabaseConnection,
}

impl DaoBase for TestimonialDao {
    type Entity = Testimonial;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl TestimonialDao {
    pub async fn list_active(&self) -> DaoResult<Vec<testimonial::Model>> {
        self.all(
            Some((testimonial::Column::DisplayOrder, Order::Asc)),
            |query| query.filter(testimonial::Column::Active.eq(true)),
        )
        .await
    }
}

#[derive(Clone)]
pub struct StatDao {
    db: DatabaseConnection,
}

impl DaoBase for StatDao {
    type Entity = Stat;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl StatDao {
    pub async fn list_ordered(&self) -> DaoResult<Vec<stat::Model>> {
        self.all(Some((stat::Column::DisplayOrder, Order::Asc)), |query| {
            query
        })
        .await
    }
}
