use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use crate::domain::models::token::IssuedToken;

/// 로그인 성공 메시지
pub const LOGIN_SUCCESS_MESSAGE: &str = "사용자가 성공적으로 로그인했습니다";

/// 로그인 응답 DTO (JWT 토큰 포함)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub authenticated: bool,
    pub created: DateTime<Utc>,
    pub expiration: DateTime<Utc>,
    pub access_token: String,
    /// 로그인한 사용자의 이메일
    pub user_name: String,
    pub message: String,
}

impl LoginResponse {
    /// 발급된 토큰으로 로그인 성공 응답을 만듭니다.
    pub fn authenticated(token: IssuedToken, user_name: String) -> Self {
        Self {
            authenticated: true,
            created: token.created,
            expiration: token.expiration,
            access_token: token.access_token,
            user_name,
            message: LOGIN_SUCCESS_MESSAGE.to_string(),
        }
    }
}
