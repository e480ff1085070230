#[allow(unused_imports)]
pub mod prelude {
    pub use super::dealer::Entity as Dealer;
    pub use super::dynamic_page::Entity as DynamicPage;
    pub use super::faq_category::Entity as FaqCategory;
    pub use super::faq_question::Entity as FaqQuestion;
    pub use super::form_submission::Entity as FormSubmission;
    pub use super::hero_slide::Entity as HeroSlide;
    pub use super::job_opening::Entity as JobOpening;
    pub use super::press_article::Entity as PressArticle;
    pub use super::session::Entity as Session;
    pub use super::smart_feature::Entity as SmartFeature;
    pub use super::stat::Entity as Stat;
    pub use super::testimonial::Entity as Testimonial;
    pub use super::user::Entity as User;
    pub use super::vehicle::Entity as Vehicle;
    pub use super::vehicle_color::Entity as VehicleColor;
    pub use super::vehicle_spec::Entity as VehicleSpec;
}

pub mod dealer;
pub mod dynamic_page;
pub mod faq_category;
pub mod faq_question;
pub mod form_submission;
pub mod hero_slide;
pub mod job_opening;
pub mod press_article;
pub mod session;
pub mod smart_feature;
pub mod stat;
pub mod testimonial;
pub mod user;
pub mod vehicle;
pub mod vehicle_color;
pub mod vehicle_spec;
