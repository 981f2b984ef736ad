//! # Application Error Handling System
//!
//! 사용자 API 전역에서 사용하는 통합 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 핸들러에서 `?`로 전파된 에러가 곧바로 일관된 JSON 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | DTO 검증 실패 |
//! | `AuthenticationError` | 401 Unauthorized | 토큰 없음, 서명/발급자/대상/만료 불일치 |
//! | `AuthorizationError` | 403 Forbidden | 정책 위반 |
//! | `NotFound` | 404 Not Found | 사용자 없음, 생성 결과 조회 실패 |
//! | `ConflictError` | 409 Conflict | 중복 이메일 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `MigrationError` | 500 Internal Server Error | 스키마 마이그레이션 실패 (기동 중단) |
//! | `ConfigurationError` | 500 Internal Server Error | 필수 설정 누락/오류 (기동 중단) |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn get(&self, id: Uuid) -> AppResult<UserDto> {
//!     let entity = self.repository.select(id).await?
//!         .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;
//!     Ok(UserDto::from(entity))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 모든 계층(설정, 저장소, 서비스, 핸들러)이 같은 타입을 반환하므로
/// 계층 간 변환 없이 `?`로 전파할 수 있습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 스키마 마이그레이션 에러 (500, 기동 시에는 프로세스 종료)
    #[error("Migration error: {0}")]
    MigrationError(String),

    /// 설정 로드 에러 (500, 기동 시에는 프로세스 종료)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    ///
    /// 토큰이 없거나, 서명/발급자/대상/만료 검증 중 하나라도 실패한 경우입니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        self.status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 `{"error": "..."}` 형식을 따릅니다.
    /// 401 응답에는 Bearer 스킴 챌린지 헤더가 함께 실립니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let mut builder = actix_web::HttpResponse::build(self.status());

        if matches!(self, AppError::AuthenticationError(_)) {
            builder.insert_header((actix_web::http::header::WWW_AUTHENTICATE, "Bearer"));
        }

        builder.json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 하위 계층 에러에 설명을 붙여 `InternalError`로 감싸는 확장 trait
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
