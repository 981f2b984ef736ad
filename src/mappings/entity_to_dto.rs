//! 엔티티 → DTO 프로파일

use crate::domain::dto::users::{UserDto, UserDtoCreateResult, UserDtoUpdateResult};
use crate::domain::entities::users::UserEntity;
use crate::mappings::{from_bson_datetime, from_bson_uuid};

impl From<UserEntity> for UserDto {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: from_bson_uuid(entity.id),
            name: entity.name,
            email: entity.email,
            created_at: from_bson_datetime(entity.created_at),
            updated_at: entity.updated_at.map(from_bson_datetime),
        }
    }
}

/// 저장된 레코드의 네 필드를 그대로 복사합니다.
impl From<UserEntity> for UserDtoCreateResult {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: from_bson_uuid(entity.id),
            name: entity.name,
            email: entity.email,
            created_at: from_bson_datetime(entity.created_at),
        }
    }
}

impl From<UserEntity> for UserDtoUpdateResult {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: from_bson_uuid(entity.id),
            name: entity.name,
            email: entity.email,
            updated_at: entity.updated_at.map(from_bson_datetime),
        }
    }
}
