//! 등록된 스키마 마이그레이션
//!
//! 새 마이그레이션은 [`all`]에 추가합니다. ID는 시간순으로 정렬되어야 합니다.

use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, IndexModel};
use crate::core::errors::{AppError, AppResult};
use crate::db::migrations::Migration;
use crate::domain::entities::users::USER_COLLECTION;

/// 사용자 이메일 유니크 인덱스 이름
pub const USER_EMAIL_INDEX: &str = "email_unique";

/// 적용 순서대로 나열된 전체 마이그레이션
pub fn all() -> Vec<Box<dyn Migration>> {
    vec![
        Box::new(CreateUsersCollection),
        Box::new(CreateUsersEmailUniqueIndex),
    ]
}

/// `users` 컬렉션 생성
pub struct CreateUsersCollection;

#[async_trait]
impl Migration for CreateUsersCollection {
    fn id(&self) -> &'static str {
        "20240101000000_create_users_collection"
    }

    async fn up(&self, database: &mongodb::Database) -> AppResult<()> {
        let existing = database.list_collection_names().await?;

        if existing.iter().any(|name| name == USER_COLLECTION) {
            log::debug!("{} 컬렉션이 이미 존재합니다", USER_COLLECTION);
            return Ok(());
        }

        database.create_collection(USER_COLLECTION).await?;
        Ok(())
    }
}

/// `users.email` 유니크 인덱스 생성
pub struct CreateUsersEmailUniqueIndex;

#[async_trait]
impl Migration for CreateUsersEmailUniqueIndex {
    fn id(&self) -> &'static str {
        "20240101000100_create_users_email_unique_index"
    }

    async fn up(&self, database: &mongodb::Database) -> AppResult<()> {
        let options = IndexOptions::builder()
            .unique(true)
            .name(USER_EMAIL_INDEX.to_string())
            .build();

        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(options)
            .build();

        database
            .collection::<mongodb::bson::Document>(USER_COLLECTION)
            .create_index(index)
            .await
            .map_err(|e| AppError::DatabaseError(format!("이메일 인덱스 생성 실패: {}", e)))?;

        Ok(())
    }
}
