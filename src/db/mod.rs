//! MongoDB 연결과 스키마 마이그레이션 모듈
//!
//! - [`Database`] - 클라이언트 연결과 데이터베이스 핸들
//! - [`migrations`] - 버전 관리되는 스키마 변경과 기동 시 적용 훅

pub mod migrations;

use mongodb::{Client, options::ClientOptions};
use log::info;
use crate::config::DatabaseConfig;
use crate::core::errors::{AppError, AppResult};

/// MongoDB 클라이언트 애플리케이션 이름
const APP_NAME: &str = "user_api";

/// MongoDB 연결 래퍼
///
/// `Client`는 내부적으로 커넥션 풀을 공유하므로 복제 비용이 작습니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 설정된 URI로 연결하고 `ping`으로 연결을 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - URI 파싱 실패, 연결 실패
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB URI 파싱 실패: {}", e)))?;

        client_options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&config.database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
