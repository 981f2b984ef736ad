//! MongoDB 사용자 저장소
//!
//! `users` 컬렉션에 대한 CRUD를 제공합니다. 이메일 유니크 인덱스는
//! 마이그레이션(`create_users_email_unique_index`)으로 생성되며,
//! 중복 키 오류(11000)는 `ConflictError`로 변환됩니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, error::{ErrorKind, WriteFailure}, Collection};
use uuid::Uuid;
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::{UserEntity, USER_COLLECTION};
use crate::mappings::{from_bson_uuid, to_bson_uuid};
use crate::repositories::UserRepository;

/// MongoDB 중복 키 오류 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB 기반 사용자 저장소
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserEntity>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<UserEntity>(USER_COLLECTION),
        }
    }
}

/// 쓰기 오류를 AppError로 변환합니다. 중복 키는 409로 매핑됩니다.
fn map_write_error(error: mongodb::error::Error) -> AppError {
    if let ErrorKind::Write(WriteFailure::WriteError(ref write_error)) = *error.kind {
        if write_error.code == DUPLICATE_KEY_CODE {
            return AppError::ConflictError("이미 사용 중인 이메일입니다".to_string());
        }
    }

    AppError::DatabaseError(error.to_string())
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, mut entity: UserEntity) -> AppResult<Option<UserEntity>> {
        if from_bson_uuid(entity.id).is_nil() {
            entity.id = to_bson_uuid(Uuid::new_v4());
        }
        entity.created_at = mongodb::bson::DateTime::now();
        entity.updated_at = None;

        self.collection
            .insert_one(&entity)
            .await
            .map_err(map_write_error)?;

        log::debug!("사용자 문서 저장됨: {}", entity.id);

        Ok(self.collection.find_one(doc! { "_id": entity.id }).await?)
    }

    async fn update(&self, mut entity: UserEntity) -> AppResult<Option<UserEntity>> {
        let Some(existing) = self.collection.find_one(doc! { "_id": entity.id }).await? else {
            return Ok(None);
        };

        entity.created_at = existing.created_at;
        entity.touch();

        let result = self.collection
            .replace_one(doc! { "_id": entity.id }, &entity)
            .await
            .map_err(map_write_error)?;

        if result.matched_count == 0 {
            return Ok(None);
        }

        Ok(Some(entity))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = self.collection
            .delete_one(doc! { "_id": to_bson_uuid(id) })
            .await?;

        Ok(result.deleted_count > 0)
    }

    async fn select(&self, id: Uuid) -> AppResult<Option<UserEntity>> {
        Ok(self.collection.find_one(doc! { "_id": to_bson_uuid(id) }).await?)
    }

    async fn select_all(&self) -> AppResult<Vec<UserEntity>> {
        let cursor = self.collection.find(doc! {}).await?;

        Ok(cursor.try_collect().await?)
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let count = self.collection
            .count_documents(doc! { "_id": to_bson_uuid(id) })
            .await?;

        Ok(count > 0)
    }

    async fn find_by_login(&self, email: &str) -> AppResult<Option<UserEntity>> {
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }
}
