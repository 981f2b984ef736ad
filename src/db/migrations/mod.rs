//! # Schema Migrations
//!
//! 버전 관리되는 스키마 변경을 순서대로 적용하는 모듈입니다.
//! 적용된 마이그레이션 ID는 `__migrations_history` 컬렉션에 기록되며,
//! 이미 기록된 마이그레이션은 다시 실행되지 않습니다.
//!
//! ## 기동 시 적용
//!
//! `MIGRATION` 환경 변수가 `aplicar`(대소문자 무관)일 때만
//! HTTP 리스너가 바인딩되기 전에 대기 중인 마이그레이션을 적용합니다.
//! 적용에 실패하면 기동이 중단됩니다.
//!
//! ```bash
//! MIGRATION=aplicar cargo run
//! ```

pub mod versions;

use std::collections::HashSet;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{info, warn};
use mongodb::bson::{doc, DateTime, Document};
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;

/// 적용 이력 컬렉션 이름
pub const MIGRATIONS_HISTORY_COLLECTION: &str = "__migrations_history";

/// 마이그레이션을 활성화하는 `MIGRATION` 값
pub const APPLY_FLAG: &str = "aplicar";

/// 단일 스키마 변경
#[async_trait]
pub trait Migration: Send + Sync {
    /// 정렬 가능한 고유 ID (`yyyyMMddHHmmss_설명`)
    fn id(&self) -> &'static str;

    async fn up(&self, database: &mongodb::Database) -> AppResult<()>;
}

/// 대기 중인 마이그레이션 적용기
#[async_trait]
pub trait Migrator: Send + Sync {
    /// 아직 적용되지 않은 마이그레이션을 순서대로 적용하고, 적용된 ID를 반환합니다.
    async fn apply_pending(&self) -> AppResult<Vec<String>>;
}

/// `MIGRATION` 값이 `aplicar`와 대소문자 무관하게 일치하는지 확인합니다.
pub fn should_apply(flag: Option<&str>) -> bool {
    flag.is_some_and(|value| value.eq_ignore_ascii_case(APPLY_FLAG))
}

/// 전체 ID 목록에서 적용되지 않은 것만 정렬된 순서로 골라냅니다.
pub fn pending_ids<'a>(all: &[&'a str], applied: &HashSet<String>) -> Vec<&'a str> {
    let mut pending: Vec<&str> = all
        .iter()
        .copied()
        .filter(|id| !applied.contains(*id))
        .collect();
    pending.sort_unstable();
    pending
}

/// 기동 시 마이그레이션 훅
///
/// 플래그가 `aplicar`가 아니면 아무 것도 하지 않고 `Ok(false)`를 반환합니다.
///
/// # Errors
///
/// * `AppError::MigrationError` - 마이그레이션 적용 실패 (기동 중단 대상)
pub async fn run_startup_migrations(flag: Option<&str>, migrator: &dyn Migrator) -> AppResult<bool> {
    if !should_apply(flag) {
        info!("MIGRATION 플래그가 설정되지 않아 마이그레이션을 건너뜁니다");
        return Ok(false);
    }

    info!("🔧 대기 중인 마이그레이션 적용 시작");

    let applied = migrator.apply_pending().await.map_err(|e| match e {
        AppError::MigrationError(_) => e,
        other => AppError::MigrationError(other.to_string()),
    })?;

    if applied.is_empty() {
        info!("적용할 마이그레이션이 없습니다");
    } else {
        info!("✅ 마이그레이션 {}건 적용 완료: {:?}", applied.len(), applied);
    }

    Ok(true)
}

/// MongoDB 마이그레이션 적용기
pub struct MongoMigrator {
    database: mongodb::Database,
    migrations: Vec<Box<dyn Migration>>,
}

impl MongoMigrator {
    /// 애플리케이션에 등록된 전체 마이그레이션으로 적용기를 만듭니다.
    pub fn new(database: &Database) -> Self {
        Self::with_migrations(database, versions::all())
    }

    pub fn with_migrations(database: &Database, migrations: Vec<Box<dyn Migration>>) -> Self {
        Self {
            database: database.get_database(),
            migrations,
        }
    }

    async fn applied_ids(&self) -> AppResult<HashSet<String>> {
        let history = self.database.collection::<Document>(MIGRATIONS_HISTORY_COLLECTION);
        let records: Vec<Document> = history.find(doc! {}).await?.try_collect().await?;

        Ok(records
            .iter()
            .filter_map(|record| record.get_str("_id").ok().map(str::to_string))
            .collect())
    }
}

#[async_trait]
impl Migrator for MongoMigrator {
    async fn apply_pending(&self) -> AppResult<Vec<String>> {
        let applied = self.applied_ids().await?;
        let ids: Vec<&str> = self.migrations.iter().map(|m| m.id()).collect();
        let pending = pending_ids(&ids, &applied);

        let history = self.database.collection::<Document>(MIGRATIONS_HISTORY_COLLECTION);
        let mut newly_applied = Vec::with_capacity(pending.len());

        for id in pending {
            let Some(migration) = self.migrations.iter().find(|m| m.id() == id) else {
                continue;
            };

            info!("마이그레이션 적용 중: {}", id);

            migration.up(&self.database).await.map_err(|e| {
                warn!("마이그레이션 {} 실패: {}", id, e);
                AppError::MigrationError(format!("{}: {}", id, e))
            })?;

            history
                .insert_one(doc! { "_id": id, "applied_at": DateTime::now() })
                .await
                .map_err(|e| AppError::MigrationError(format!("{} 이력 기록 실패: {}", id, e)))?;

            newly_applied.push(id.to_string());
        }

        Ok(newly_applied)
    }
}
