//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 기반 타입을 제공합니다.
//!
//! - [`errors`] - 통합 에러 타입 `AppError`와 `AppResult`
//! - [`container`] - 서비스 인스턴스를 생성자 주입으로 조립하는 `AppContainer`

pub mod errors;
pub mod container;

pub use errors::*;
pub use container::AppContainer;
