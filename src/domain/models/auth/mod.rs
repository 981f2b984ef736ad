//! 인증/인가 도메인 모델
//!
//! 요청마다 `Unauthenticated`에서 시작해 토큰 검증에 성공하면
//! `Authenticated`로 한 번 전이하며, 요청이 끝날 때까지 되돌아가지 않습니다.

pub mod authenticated_user;
pub mod authorization_policy;

pub use authenticated_user::AuthenticatedUser;
pub use authorization_policy::{AuthState, AuthScheme, AuthorizationPolicy, BEARER_POLICY};
