//! # Configuration Module
//!
//! 사용자 API의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수(및 `PROFILE`별 `.env` 파일)에서 값을 읽어
//! 기동 시 한 번 불변 구조체로 구성하고, 이후에는 참조로만 전달합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스, Rate Limiting 설정
//! - [`auth_config`] - JWT 서명키와 토큰 정책(`TokenConfigurations`)
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 실행 프로필 (dev = API 문서 노출)
//! export PROFILE="dev"
//!
//! # 토큰 정책
//! export TokenConfigurations__Issuer="ExemploIssuer"
//! export TokenConfigurations__Audience="ExemploAudience"
//! export TokenConfigurations__Seconds="3600"
//! export JWT_SECRET="your-super-secret-256-bit-key-generated-securely"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_api_dev"
//!
//! # 기동 시 마이그레이션 적용
//! export MIGRATION="aplicar"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
