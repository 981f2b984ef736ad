//! HTTP 미들웨어 모듈
//!
//! - [`auth_middleware::AuthMiddleware`] - 인가 정책에 따라 Bearer 토큰을 검증하는 미들웨어

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
