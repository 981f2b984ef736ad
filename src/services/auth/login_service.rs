//! 로그인 서비스
//!
//! 등록된 이메일로 로그인하면 `TokenService`로 액세스 토큰을 발급합니다.

use std::sync::Arc;
use async_trait::async_trait;
use log::{info, warn};
use validator::Validate;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::dto::users::{LoginDto, LoginResponse};
use crate::mappings::from_bson_uuid;
use crate::repositories::UserRepository;
use crate::services::auth::TokenService;

#[async_trait]
pub trait LoginService: Send + Sync {
    /// 이메일로 사용자를 찾아 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 이메일 형식 오류
    /// * `AppError::AuthenticationError` - 등록되지 않은 이메일
    async fn login(&self, request: LoginDto) -> AppResult<LoginResponse>;
}

pub struct DefaultLoginService {
    repository: Arc<dyn UserRepository>,
    token_service: Arc<TokenService>,
}

impl DefaultLoginService {
    pub fn new(repository: Arc<dyn UserRepository>, token_service: Arc<TokenService>) -> Self {
        Self { repository, token_service }
    }
}

#[async_trait]
impl LoginService for DefaultLoginService {
    async fn login(&self, request: LoginDto) -> AppResult<LoginResponse> {
        request.validate()?;

        let Some(user) = self.repository.find_by_login(&request.email).await? else {
            warn!("로그인 실패: 등록되지 않은 이메일");
            return Err(AppError::AuthenticationError("이메일 또는 자격 증명이 올바르지 않습니다".to_string()));
        };

        let user_id = from_bson_uuid(user.id);
        let issued = self.token_service
            .issue_token(&user_id, &user.email)
            .context("토큰 발급 실패")?;

        info!("사용자 로그인: {}", user_id);

        Ok(LoginResponse::authenticated(issued, user.email))
    }
}
