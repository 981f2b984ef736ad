//! 사용자 요청 DTO 모듈
//!
//! 모든 요청 DTO는 `validator::Validate`를 구현하며,
//! 핸들러에서 서비스 호출 전에 검증됩니다.

pub mod user_request;
pub mod login_request;

pub use user_request::{UserDtoCreate, UserDtoUpdate};
pub use login_request::LoginDto;
