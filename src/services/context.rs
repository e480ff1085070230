use sea_orm::DatabaseConnection;

use crate::{
    auth::jwt::JwtKeys,
    db::dao::DaoContext,
    services::{
        auth_service::AuthService,
        calculator::CalculatorService,
        content_service::{HeroSlideService, StatService, TestimonialService},
        dealer_service::DealerService,
        faq_service::{FaqCategoryService, FaqQuestionService},
        listing_service::{JobOpeningService, PressArticleService},
        page_service::DynamicPageService,
        submission_service::FormSubmissionService,
        user_service::UserService,
        vehicle_service::{
            SmartFeatureService, VehicleColorService, VehicleService, VehicleSpecService,
        },
    },
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn auth(&self, jwt: &JwtKeys) -> AuthService {
        AuthService::new(self.user(), self.daos.session(), jwt.clone())
    }

    pub fn user(&self) -> UserService {
        UserService::new(self.daos.user())
    }

    pub fn vehicle(&self) -> VehicleService {
        VehicleService::new(
            self.daos.vehicle(),
            self.daos.vehicle_color(),
            self.daos.vehicle_spec(),
            self.daos.smart_feature(),
        )
    }

    pub fn vehicle_color(&self) -> VehicleColorService {
        VehicleColorService::new(self.daos.vehicle_color())
    }

    pub fn vehicle_spec(&self) -> VehicleSpecService {
        VehicleSpecService::new(self.daos.vehicle_spec())
    }

    pub fn smart_feature(&self) -> SmartFeatureService {
        SmartFeatureService::new(self.daos.smart_feature())
    }

    pub fn hero_slide(&self) -> HeroSlideService {
        HeroSlideService::new(self.daos.hero_slide())
    }

    pub fn testimonial(&self) -> TestimonialService {
        TestimonialService::new(self.daos.testimonial())
    }

    pub fn stat(&self) -> StatService {
        StatService::new(self.daos.stat())
    }

    pub fn dealer(&self) -> DealerService {
        DealerService::new(self.daos.dealer())
    }

    pub fn faq_category(&self) -> FaqCategoryService {
        FaqCategoryService::new(self.daos.faq_category(), self.daos.faq_question())
    }

    pub fn faq_question(&self) -> FaqQuestionService {
        FaqQuestionService::new(self.daos.faq_question())
    }

    pub fn job_opening(&self) -> JobOpeningService {
        JobOpeningService::new(self.daos.job_opening())
    }

    pub fn press_article(&self) -> PressArticleService {
        PressArticleService::new(self.daos.press_article())
    }

    pub fn dynamic_page(&self) -> DynamicPageService {
        DynamicPageService::new(self.daos.dynamic_page())
    }

    pub fn form_submission(&self) -> FormSubmissionService {
        FormSubmissionService::new(self.daos.form_submission())
    }

    pub fn calculator(&self) -> CalculatorService {
        CalculatorService::new(self.vehicle())
    }
}
