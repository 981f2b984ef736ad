//! 인증 서비스 모듈

pub mod token_service;
pub mod login_service;

pub use token_service::TokenService;
pub use login_service::{DefaultLoginService, LoginService};
