//! # Domain Layer Module
//!
//! 사용자 API의 도메인 계층입니다. 계층 간 데이터는 세 가지 형태로 이동합니다.
//!
//! ```text
//! HTTP 요청/응답 ── dto ──┐
//!                        ▼  (mappings::dto_to_model)
//!                     models ── 서비스 계층
//!                        ▼  (mappings::model_to_entity)
//!                    entities ── MongoDB 문서
//!                        ▼  (mappings::entity_to_dto)
//!                       dto
//! ```
//!
//! ## 모듈 구성
//!
//! - [`entities`] - MongoDB `users` 컬렉션과 1:1로 대응하는 영속 문서
//! - [`models`] - 서비스 계층 모델, 인증 주체/정책, JWT 클레임
//! - [`dto`] - API 계약(요청/응답) 데이터 형태

pub mod entities;
pub mod dto;
pub mod models;
