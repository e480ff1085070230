use sea_orm::DatabaseConnection;

pub mod base;
pub mod base_traits;
pub mod content_dao;
pub mod dealer_dao;
pub mod error;
pub mod faq_dao;
pub mod listing_dao;
pub mod page_dao;
pub mod session_dao;
pub mod submission_dao;
pub mod user_dao;
pub mod vehicle_dao;

pub use base::{ColumnFilter, DaoBase, PaginatedResponse};
pub use base_traits::{HasCreatedAtColumn, HasIdActiveModel, TimestampedActiveModel};
pub use content_dao::{HeroSlideDao, StatDao, TestimonialDao};
pub use dealer_dao::DealerDao;
pub use error::{DaoLayerError, DaoResult};
pub use faq_dao::{FaqCategoryDao, FaqQuestionDao};
pub use listing_dao::{JobOpeningDao, PressArticleDao};
pub use page_dao::DynamicPageDao;
pub use session_dao::SessionDao;
pub use submission_dao::FormSubmissionDao;
pub use user_dao::UserDao;
pub use vehicle_dao::{SmartFeatureDao, VehicleColorDao, VehicleDao, VehicleSpecDao};

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn user(&self) -> UserDao {
        DaoBase::new(&self.db)
    }

    pub fn session(&self) -> SessionDao {
        DaoBase::new(&self.db)
    }

    pub fn vehicle(&self) -> VehicleDao {
        DaoBase::new(&self.db)
    }

    pub fn vehicle_color(&self) -> VehicleColorDao {
        DaoBase::new(&self.db)
    }

    pub fn vehicle_spec(&self) -> VehicleSpecDao {
        DaoBase::new(&self.db)
    }

    pub fn smart_feature(&self) -> SmartFeatureDao {
        DaoBase::new(&self.db)
    }

    pub fn hero_slide(&self) -> HeroSlideDao {
        DaoBase::new(&self.db)
    }

    pub fn testimonial(&self) -> TestimonialDao {
        DaoBase::new(&self.db)
    }

    pub fn stat(&self) -> StatDao {
        DaoBase::new(&self.db)
    }

    pub fn dealer(&self) -> DealerDao {
        DaoBase::new(&self.db)
    }

    pub fn faq_category(&self) -> FaqCategoryDao {
        DaoBase::new(&self.db)
    }

    pub fn faq_question(&self) -> FaqQuestionDao {
        DaoBase::new(&self.db)
    }

    pub fn job_opening(&self) -> JobOpeningDao {
        DaoBase::new(&self.db)
    }

    pub fn press_article(&self) -> PressArticleDao {
        DaoBase::new(&self.db)
    }

    pub fn dynamic_page(&self) -> DynamicPageDao {
        DaoBase::new(&self.db)
    }

    pub fn form_submission(&self) -> FormSubmissionDao {
        DaoBase::new(&self.db)
    }
}
