//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 받아 서비스 계층에 위임하고 결과를 응답으로 변환하는 핸들러 모음입니다.
//! 핸들러는 비즈니스 로직을 갖지 않으며, 서비스는 `web::Data<dyn Trait>`로 주입받습니다.
//!
//! ```text
//! Client ──> AuthMiddleware ──> Handlers ──> Services ──> Repositories ──> MongoDB
//! ```
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 CRUD (`/api/users`, Bearer 정책 적용)
//! - **`auth`**: 로그인 (`POST /api/login`, 익명 허용)
//! - **`docs`**: OpenAPI 문서 (`GET /swagger/v1/swagger.json`, 개발 환경 전용)

pub mod users;
pub mod auth;
pub mod docs;
