//! 사용자 생성/수정 요청 DTO
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// 사용자 생성 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDtoCreate {
    /// 사용자 이름 (1-60자)
    #[validate(length(min = 1, max = 60, message = "이름은 1-60자 사이여야 합니다"))]
    #[schema(example = "Ada")]
    pub name: String,

    /// 사용자 이메일 (최대 100자)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    #[validate(length(max = 100, message = "이메일은 최대 100자까지 가능합니다"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
}

/// 사용자 수정 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDtoUpdate {
    /// 수정할 사용자 ID
    pub id: Uuid,

    #[validate(length(min = 1, max = 60, message = "이름은 1-60자 사이여야 합니다"))]
    pub name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    #[validate(length(max = 100, message = "이메일은 최대 100자까지 가능합니다"))]
    pub email: String,
}
