//! 사용자 저장소 구현 모듈
//!
//! - [`user_repo::MongoUserRepository`] - MongoDB `users` 컬렉션 구현
//! - [`memory_repo::InMemoryUserRepository`] - 프로세스 메모리 구현 (테스트/로컬 실행)

pub mod user_repo;
pub mod memory_repo;

pub use user_repo::MongoUserRepository;
pub use memory_repo::InMemoryUserRepository;
