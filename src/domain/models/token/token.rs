//! JWT 인증 토큰 클레임과 발급 결과
//!
//! RFC 7519 등록 클레임(`sub`, `jti`, `iss`, `aud`, `iat`, `nbf`, `exp`)과
//! 로그인 이메일을 담는 `unique_name`으로 구성됩니다.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    /// 로그인 이메일
    pub unique_name: String,
    /// 토큰 고유 ID
    pub jti: String,
    /// 발급자
    pub iss: String,
    /// 대상
    pub aud: String,
    /// 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 이 시각 이전에는 사용할 수 없음 (Unix timestamp)
    pub nbf: i64,
    /// 만료 시간 (Unix timestamp)
    pub exp: i64,
}

/// 발급된 액세스 토큰과 유효 구간
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub created: DateTime<Utc>,
    pub expiration: DateTime<Utc>,
}
