//! 모델 ↔ 엔티티 프로파일

use crate::domain::entities::users::UserEntity;
use crate::domain::models::UserModel;
use crate::mappings::{from_bson_datetime, from_bson_uuid, to_bson_datetime, to_bson_uuid};

impl From<UserModel> for UserEntity {
    fn from(model: UserModel) -> Self {
        Self {
            id: to_bson_uuid(model.id),
            created_at: to_bson_datetime(model.created_at()),
            updated_at: model.updated_at.map(to_bson_datetime),
            name: model.name,
            email: model.email,
        }
    }
}

impl From<UserEntity> for UserModel {
    fn from(entity: UserEntity) -> Self {
        UserModel::new(
            from_bson_uuid(entity.id),
            entity.name,
            entity.email,
            Some(from_bson_datetime(entity.created_at)),
            entity.updated_at.map(from_bson_datetime),
        )
    }
}
