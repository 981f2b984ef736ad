//! 인가 정책과 요청별 인증 상태

use crate::domain::models::auth::AuthenticatedUser;

/// 인증 스킴
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Bearer {jwt}`
    Bearer,
}

impl AuthScheme {
    /// `WWW-Authenticate` 챌린지 및 헤더 접두사에 쓰이는 스킴 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthScheme::Bearer => "Bearer",
        }
    }
}

/// 이름이 붙은 인가 정책
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationPolicy {
    pub name: &'static str,
    pub scheme: AuthScheme,
    pub require_authenticated_user: bool,
}

impl AuthorizationPolicy {
    /// 주어진 인증 상태로 요청을 통과시킬 수 있는지 판단합니다.
    pub fn permits(&self, state: &AuthState) -> bool {
        !self.require_authenticated_user || state.is_authenticated()
    }
}

/// Bearer 스킴으로 인증된 사용자만 허용하는 정책
pub const BEARER_POLICY: AuthorizationPolicy = AuthorizationPolicy {
    name: "Bearer",
    scheme: AuthScheme::Bearer,
    require_authenticated_user: true,
};

/// 요청별 인증 상태
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    /// 토큰이 없거나 검증에 실패함 (사유 포함)
    Unauthenticated(String),
    /// 토큰 검증에 성공함
    Authenticated(AuthenticatedUser),
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }
}
