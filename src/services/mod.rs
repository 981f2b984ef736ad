//! 비즈니스 로직 서비스 계층
//!
//! - [`users`] - 사용자 CRUD (`UserService`)
//! - [`auth`] - 토큰 발급/검증 (`TokenService`)과 로그인 (`LoginService`)

pub mod users;
pub mod auth;
