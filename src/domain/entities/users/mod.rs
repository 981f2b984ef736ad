//! Users Entity Module
//!
//! `users` 컬렉션에 저장되는 [`UserEntity`](user::UserEntity)를 정의합니다.

pub mod user;

pub use user::{UserEntity, USER_COLLECTION};
