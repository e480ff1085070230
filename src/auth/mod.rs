pub mod jwt;
pub mod password;
mod types;

pub use types::{Claims, RequiredRole, Role, SuperAdminRole, TokenBundle};
