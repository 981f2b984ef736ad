//! # User Service
//!
//! 사용자 CRUD 비즈니스 로직을 담당합니다.
//!
//! 쓰기 요청은 항상 DTO → `UserModel` → `UserEntity` 순서로 변환되어 저장소에 전달되고,
//! 저장소가 돌려준 엔티티는 다시 응답 DTO로 투영됩니다.
//! 투영할 엔티티가 없으면 부분적으로 채워진 응답 대신 `NotFound`를 반환합니다.

use std::sync::Arc;
use async_trait::async_trait;
use log::{debug, info};
use uuid::Uuid;
use validator::Validate;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::{
    UserDto, UserDtoCreate, UserDtoCreateResult, UserDtoUpdate, UserDtoUpdateResult,
};
use crate::domain::entities::users::UserEntity;
use crate::domain::models::UserModel;
use crate::mappings::from_bson_uuid;
use crate::repositories::UserRepository;

#[async_trait]
pub trait UserService: Send + Sync {
    async fn get(&self, id: Uuid) -> AppResult<UserDto>;

    async fn get_all(&self) -> AppResult<Vec<UserDto>>;

    /// 새 사용자를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 이름/이메일 검증 실패
    /// * `AppError::ConflictError` - 이미 등록된 이메일
    /// * `AppError::NotFound` - 저장 직후 다시 읽은 레코드가 없는 경우
    async fn post(&self, request: UserDtoCreate) -> AppResult<UserDtoCreateResult>;

    /// 기존 사용자를 갱신합니다. 생성 시각은 유지됩니다.
    async fn put(&self, request: UserDtoUpdate) -> AppResult<UserDtoUpdateResult>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct DefaultUserService {
    repository: Arc<dyn UserRepository>,
}

impl DefaultUserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    fn not_found(id: impl std::fmt::Display) -> AppError {
        AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id))
    }
}

#[async_trait]
impl UserService for DefaultUserService {
    async fn get(&self, id: Uuid) -> AppResult<UserDto> {
        self.repository
            .select(id)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| Self::not_found(id))
    }

    async fn get_all(&self) -> AppResult<Vec<UserDto>> {
        let users = self.repository.select_all().await?;
        debug!("사용자 {}명 조회", users.len());

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    async fn post(&self, request: UserDtoCreate) -> AppResult<UserDtoCreateResult> {
        request.validate()?;

        if self.repository.find_by_login(&request.email).await?.is_some() {
            return Err(AppError::ConflictError(format!(
                "이미 사용 중인 이메일입니다: {}", request.email
            )));
        }

        let model = UserModel::from(request);
        let entity = UserEntity::from(model);

        let stored = self.repository
            .insert(entity)
            .await?
            .ok_or_else(|| Self::not_found("생성된 사용자"))?;

        let result = UserDtoCreateResult::from(stored);
        info!("사용자 생성: {}", result.id);

        Ok(result)
    }

    async fn put(&self, request: UserDtoUpdate) -> AppResult<UserDtoUpdateResult> {
        request.validate()?;

        let id = request.id;
        if let Some(owner) = self.repository.find_by_login(&request.email).await? {
            if from_bson_uuid(owner.id) != id {
                return Err(AppError::ConflictError(format!(
                    "이미 사용 중인 이메일입니다: {}", request.email
                )));
            }
        }

        if !self.repository.exists(id).await? {
            return Err(Self::not_found(id));
        }

        let model = UserModel::from(request);
        let entity = UserEntity::from(model);

        let updated = self.repository
            .update(entity)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        info!("사용자 수정: {}", id);

        Ok(UserDtoUpdateResult::from(updated))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(Self::not_found(id));
        }

        info!("사용자 삭제: {}", id);
        Ok(())
    }
}
