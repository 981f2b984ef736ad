//! DTO → 모델 프로파일

use uuid::Uuid;
use crate::domain::dto::users::{UserDtoCreate, UserDtoUpdate};
use crate::domain::models::UserModel;

impl From<UserDtoCreate> for UserModel {
    fn from(dto: UserDtoCreate) -> Self {
        UserModel::new(Uuid::nil(), dto.name, dto.email, None, None)
    }
}

impl From<UserDtoUpdate> for UserModel {
    fn from(dto: UserDtoUpdate) -> Self {
        UserModel::new(dto.id, dto.name, dto.email, None, None)
    }
}
