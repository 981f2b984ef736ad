//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 구체 저장소가 아닌 [`UserRepository`] trait에만 의존합니다.
//! 기동 시 `AppContainer`가 MongoDB 구현을 주입하고,
//! 테스트에서는 메모리 구현을 주입합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::{UserRepository, users::MongoUserRepository};
//!
//! let repository: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(&database));
//! let user = repository.find_by_login("user@example.com").await?;
//! ```

pub mod users;

use async_trait::async_trait;
use uuid::Uuid;
use crate::core::errors::AppResult;
use crate::domain::entities::users::UserEntity;

/// 사용자 저장소 추상화
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 새 사용자를 저장하고, 저장된 레코드를 다시 읽어 반환합니다.
    ///
    /// ID가 nil이면 새 UUID를 할당하고 생성 시각을 현재 시각으로 고정합니다.
    /// 다시 읽은 레코드가 없으면 `None`을 반환합니다.
    async fn insert(&self, entity: UserEntity) -> AppResult<Option<UserEntity>>;

    /// 기존 사용자를 갱신합니다.
    ///
    /// 생성 시각은 저장된 값을 유지하고 수정 시각을 현재 시각으로 설정합니다.
    /// 대상이 없으면 `None`을 반환합니다.
    async fn update(&self, entity: UserEntity) -> AppResult<Option<UserEntity>>;

    /// 사용자를 삭제합니다. 삭제된 문서가 있으면 `true`.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    async fn select(&self, id: Uuid) -> AppResult<Option<UserEntity>>;

    async fn select_all(&self) -> AppResult<Vec<UserEntity>>;

    async fn exists(&self, id: Uuid) -> AppResult<bool>;

    /// 로그인 이메일로 사용자를 찾습니다.
    async fn find_by_login(&self, email: &str) -> AppResult<Option<UserEntity>>;
}
