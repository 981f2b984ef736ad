use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;

/// JWT 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (`sub`)
    pub user_id: String,

    /// 로그인에 사용된 이메일 (`unique_name`)
    pub email: String,

    /// 토큰 고유 ID (`jti`)
    pub token_id: String,
}

/// ActixWeb FromRequest trait 구현
///
/// 인증 미들웨어가 Request Extensions에 넣어 둔 사용자를 꺼냅니다.
/// 정책 밖의 라우트에서 사용하면 401을 반환합니다.
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string()
            ))),
        }
    }
}
