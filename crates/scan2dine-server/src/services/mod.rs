pub mod auth_service;
pub mod menu_service;

pub use auth_service::AuthService;
pub use menu_service::MenuService;
