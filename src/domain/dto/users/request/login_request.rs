//! 로그인 요청 DTO
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 이메일 기반 로그인 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    /// 로그인 이메일
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    #[validate(length(max = 100, message = "이메일은 최대 100자까지 가능합니다"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
}
