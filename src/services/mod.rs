pub mod auth_service;
pub mod calculator;
pub mod content_service;
pub mod context;
pub mod crud_service;
pub mod dealer_service;
pub mod faq_service;
pub mod listing_service;
pub mod page_service;
pub mod submission_service;
pub mod user_service;
pub mod vehicle_service;

pub use context::ServiceContext;
