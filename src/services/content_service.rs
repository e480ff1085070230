//! Services for the flat homepage content: hero slides, testimonials, stats.

use crate::{
    db::dao::{HeroSlideDao, StatDao, TestimonialDao},
    db::entities::{hero_slide, stat, testimonial},
    error::AppError,
    services::crud_service::CrudService,
};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(Clone)]
pub struct HeroSlideService {
    dao: HeroSlideDao,
}

impl HeroSlideService {
    pub fn new(dao: HeroSlideDao) -> Self {
        Self { dao }
    }

    pub async fn list_active(&self) -> Result<Vec<hero_slide::Model>, AppError> {
        Ok(self.dao.list_active().await?)
    }
}

impl CrudService for HeroSlideService {
    type Dao = HeroSlideDao;

    fn dao(&self) -> &Self::Dao {
        &self.dao
    }

    fn resource_name(&self) -> &'static str {
        "Hero slide"
    }
}

#[derive(Clone)]
pub struct TestimonialService {
    dao: TestimonialDao,
}

impl TestimonialService {
    pub fn new(dao: TestimonialDao) -> Self {
        Self { dao }
    }

    pub async fn list_active(&self) -> Result<Vec<testimonial::Model>, AppError> {
        Ok(self.dao.list_active().await?)
    }

    pub fn check_rating(rating: i32) -> Result<(), AppError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(AppError::bad_request(format!(
                "Rating must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }
        Ok(())
    }
}

impl CrudService for TestimonialService {
    type Dao = TestimonialDao;

    fn dao(&self) -> &Self::Dao {
        &self.dao
    }

    fn resource_name(&self) -> &'static str {
        "Testimonial"
    }
}

#[derive(Clone)]
pub struct StatService {
    dao: StatDao,
}

impl StatService {
    pub fn new(dao: StatDao) -> Self {
        Self { dao }
    }

    pub async fn list_ordered(&self) -> Result<Vec<stat::Model>, AppError> {
        Ok(self.dao.list_ordered().await?)
    }
}

impl CrudService for StatService {
    type Dao = StatDao;

    fn dao(&self) -> &Self::Dao {
        &self.dao
    }

    fn resource_name(&self) -> &'static str {
        "Stat"
    }
}

#[cfg(test)]
mod tests {
    use super::TestimonialService;

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(TestimonialService::check_rating(1).is_ok());
        assert!(TestimonialService::check_rating(5).is_ok());
        assert!(TestimonialService::check_rating(0).is_err());
        assert!(TestimonialService::check_rating(6).is_err());
    }
}
