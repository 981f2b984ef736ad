//! # Domain Models Module
//!
//! 서비스 계층에서 사용하는 모델과 인증 관련 값 객체를 정의합니다.
//!
//! - [`user_model`] - 서비스 계층의 사용자 모델
//! - [`auth`] - 인증 주체, 요청별 인증 상태, 인가 정책
//! - [`token`] - JWT 클레임과 발급 결과

pub mod user_model;
pub mod auth;
pub mod token;

pub use user_model::UserModel;
