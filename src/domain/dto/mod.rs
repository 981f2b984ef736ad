//! # Data Transfer Objects
//!
//! HTTP 요청/응답 본문으로 오가는 데이터 형태입니다.
//! 모든 DTO는 camelCase JSON으로 직렬화되며, `utoipa::ToSchema`로
//! API 문서 스키마에 등록됩니다.

pub mod users;

pub use users::*;
