//! JWT 클레임과 발급 결과

pub mod token;

pub use token::{IssuedToken, TokenClaims};
