//! 프로세스 메모리 사용자 저장소
//!
//! MongoDB 없이 서비스/핸들러를 구동할 때 사용합니다.
//! MongoDB 구현과 같은 규칙(ID 할당, 생성 시각 고정, 이메일 유일성)을 따릅니다.

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use bson::DateTime;
use uuid::Uuid;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::UserEntity;
use crate::mappings::{from_bson_uuid, to_bson_uuid};
use crate::repositories::UserRepository;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, UserEntity>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned<T>(_: T) -> AppError {
        AppError::InternalError("사용자 저장소 잠금이 손상되었습니다".to_string())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, mut entity: UserEntity) -> AppResult<Option<UserEntity>> {
        let mut users = self.users.write().map_err(Self::poisoned)?;

        if users.values().any(|u| u.email == entity.email) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        let mut id = from_bson_uuid(entity.id);
        if id.is_nil() {
            id = Uuid::new_v4();
            entity.id = to_bson_uuid(id);
        }
        entity.created_at = DateTime::now();
        entity.updated_at = None;

        users.insert(id, entity);

        Ok(users.get(&id).cloned())
    }

    async fn update(&self, mut entity: UserEntity) -> AppResult<Option<UserEntity>> {
        let mut users = self.users.write().map_err(Self::poisoned)?;
        let id = from_bson_uuid(entity.id);

        let Some(existing) = users.get(&id) else {
            return Ok(None);
        };

        if users.values().any(|u| u.email == entity.email && u.id != entity.id) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        entity.created_at = existing.created_at;
        entity.touch();
        users.insert(id, entity.clone());

        Ok(Some(entity))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut users = self.users.write().map_err(Self::poisoned)?;

        Ok(users.remove(&id).is_some())
    }

    async fn select(&self, id: Uuid) -> AppResult<Option<UserEntity>> {
        let users = self.users.read().map_err(Self::poisoned)?;

        Ok(users.get(&id).cloned())
    }

    async fn select_all(&self) -> AppResult<Vec<UserEntity>> {
        let users = self.users.read().map_err(Self::poisoned)?;
        let mut all: Vec<UserEntity> = users.values().cloned().collect();
        all.sort_by_key(|u| u.created_at);

        Ok(all)
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let users = self.users.read().map_err(Self::poisoned)?;

        Ok(users.contains_key(&id))
    }

    async fn find_by_login(&self, email: &str) -> AppResult<Option<UserEntity>> {
        let users = self.users.read().map_err(Self::poisoned)?;

        Ok(users.values().find(|u| u.email == email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_entity(email: &str) -> UserEntity {
        UserEntity {
            id: to_bson_uuid(Uuid::nil()),
            name: "Ada".to_string(),
            email: email.to_string(),
            created_at: DateTime::from_millis(0),
            updated_at: None,
        }
    }

    #[actix_web::test]
    async fn test_insert_assigns_id_and_creation_time() {
        let repository = InMemoryUserRepository::new();

        let stored = repository.insert(new_entity("ada@example.com")).await.unwrap().unwrap();

        assert!(!from_bson_uuid(stored.id).is_nil());
        assert!(stored.created_at.timestamp_millis() > 0);
        assert!(repository.exists(from_bson_uuid(stored.id)).await.unwrap());
    }

    #[actix_web::test]
    async fn test_duplicate_email_conflicts() {
        let repository = InMemoryUserRepository::new();
        repository.insert(new_entity("ada@example.com")).await.unwrap();

        let result = repository.insert(new_entity("ada@example.com")).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_update_keeps_created_at() {
        let repository = InMemoryUserRepository::new();
        let stored = repository.insert(new_entity("ada@example.com")).await.unwrap().unwrap();

        let mut changed = stored.clone();
        changed.name = "Ada Lovelace".to_string();
        changed.created_at = DateTime::from_millis(0);

        let updated = repository.update(changed).await.unwrap().unwrap();

        assert_eq!(updated.created_at, stored.created_at);
        assert_eq!(updated.name, "Ada Lovelace");
        assert!(updated.updated_at.is_some());
    }

    #[actix_web::test]
    async fn test_update_and_delete_missing_user() {
        let repository = InMemoryUserRepository::new();
        let mut missing = new_entity("ghost@example.com");
        missing.id = to_bson_uuid(Uuid::new_v4());

        assert!(repository.update(missing).await.unwrap().is_none());
        assert!(!repository.delete(Uuid::new_v4()).await.unwrap());
    }

    #[actix_web::test]
    async fn test_find_by_login() {
        let repository = InMemoryUserRepository::new();
        repository.insert(new_entity("ada@example.com")).await.unwrap();

        assert!(repository.find_by_login("ada@example.com").await.unwrap().is_some());
        assert!(repository.find_by_login("bob@example.com").await.unwrap().is_none());
    }
}
