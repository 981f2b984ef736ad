//! 사용자 응답 DTO 모듈

pub mod user_response;
pub mod login_response;

pub use user_response::{UserDto, UserDtoCreateResult, UserDtoUpdateResult};
pub use login_response::LoginResponse;
