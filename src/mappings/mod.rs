//! # Layer Mappings
//!
//! 계층 간 변환을 담당하는 순수 함수(`From` 구현) 모음입니다.
//! 방향별로 세 개의 프로파일로 나뉩니다.
//!
//! | 프로파일 | 변환 |
//! |----------|------|
//! | [`dto_to_model`] | `UserDtoCreate` / `UserDtoUpdate` → `UserModel` |
//! | [`model_to_entity`] | `UserModel` ↔ `UserEntity` |
//! | [`entity_to_dto`] | `UserEntity` → `UserDto` / `UserDtoCreateResult` / `UserDtoUpdateResult` |
//!
//! 변환은 값을 그대로 옮기기만 하며, 부족한 값을 임의로 채우지 않습니다.
//! (`UserModel`의 생성 시각 기본값만 예외이며 이는 모델 자체의 규칙입니다.)
//!
//! ```rust,ignore
//! let model = UserModel::from(dto);
//! let entity = UserEntity::from(model);
//! let stored = repository.insert(entity).await?;
//! let result = UserDtoCreateResult::from(stored);
//! ```

pub mod dto_to_model;
pub mod model_to_entity;
pub mod entity_to_dto;

use chrono::{DateTime, Utc};

/// `uuid::Uuid` → `bson::Uuid`
pub fn to_bson_uuid(id: uuid::Uuid) -> bson::Uuid {
    bson::Uuid::from_bytes(id.into_bytes())
}

/// `bson::Uuid` → `uuid::Uuid`
pub fn from_bson_uuid(id: bson::Uuid) -> uuid::Uuid {
    uuid::Uuid::from_bytes(id.bytes())
}

/// `chrono` 시각 → BSON 시각 (밀리초 정밀도)
pub fn to_bson_datetime(at: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_chrono(at)
}

/// BSON 시각 → `chrono` 시각
pub fn from_bson_datetime(at: bson::DateTime) -> DateTime<Utc> {
    at.to_chrono()
}
