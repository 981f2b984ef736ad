//! # OpenAPI Document
//!
//! 사용자 API의 OpenAPI 문서를 조립합니다.
//! 문서 엔드포인트는 개발 환경에서만 라우팅에 등록됩니다.
//!
//! 모든 작업에 `Bearer` 보안 요구사항이 전역으로 선언되며,
//! 스킴은 `Authorization` 헤더에 `Bearer {token}` 형식으로 전달하는 API Key입니다.

use actix_web::{get, HttpResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};
use crate::domain::dto::users::{
    LoginDto, LoginResponse, UserDto, UserDtoCreate, UserDtoCreateResult, UserDtoUpdate,
    UserDtoUpdateResult,
};
use crate::handlers::{auth, users};

/// 문서 JSON 경로
pub const OPENAPI_JSON_PATH: &str = "/swagger/v1/swagger.json";

/// 보안 스킴 이름
pub const BEARER_SCHEME: &str = "Bearer";

/// `Bearer` 보안 스킴을 문서에 추가합니다.
struct BearerSecurityAddon;

impl Modify for BearerSecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                BEARER_SCHEME,
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "Authorization",
                    "JWT 토큰을 입력하세요. 예: \"Bearer {token}\"",
                ))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User API",
        version = "v1",
        description = "JWT Bearer 인증 기반 사용자 관리 API",
    ),
    paths(
        users::get_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        auth::login,
    ),
    components(schemas(
        UserDto,
        UserDtoCreate,
        UserDtoCreateResult,
        UserDtoUpdate,
        UserDtoUpdateResult,
        LoginDto,
        LoginResponse,
    )),
    modifiers(&BearerSecurityAddon),
    security(("Bearer" = [])),
    tags(
        (name = "users", description = "사용자 관리"),
        (name = "login", description = "토큰 발급"),
    )
)]
pub struct ApiDoc;

#[get("/swagger/v1/swagger.json")]
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_declares_bearer_scheme_globally() {
        let doc = ApiDoc::openapi();

        let components = doc.components.as_ref().unwrap();
        assert!(components.security_schemes.contains_key(BEARER_SCHEME));

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["security"][0]["Bearer"], serde_json::json!([]));
        assert_eq!(
            json["components"]["securitySchemes"]["Bearer"]["name"],
            "Authorization"
        );
        assert_eq!(json["components"]["securitySchemes"]["Bearer"]["in"], "header");
    }

    #[test]
    fn test_document_lists_user_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/users"));
        assert!(doc.paths.paths.contains_key("/api/users/{id}"));
        assert!(doc.paths.paths.contains_key("/api/login"));
    }
}
