//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 영속 엔티티들을 정의합니다.
//! 엔티티는 `bson` 타입(`bson::Uuid`, `bson::DateTime`)을 사용하며,
//! API 바깥으로는 항상 DTO로 변환되어 노출됩니다.

pub mod users;
