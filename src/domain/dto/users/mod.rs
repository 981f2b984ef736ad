//! 사용자 관련 DTO
//!
//! - [`request`] - `UserDtoCreate`, `UserDtoUpdate`, `LoginDto`
//! - [`response`] - `UserDto`, `UserDtoCreateResult`, `UserDtoUpdateResult`, `LoginResponse`

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
