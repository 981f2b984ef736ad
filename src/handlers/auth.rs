//! 로그인 핸들러

use actix_web::{post, web, HttpResponse};
use crate::core::errors::AppError;
use crate::domain::dto::users::{LoginDto, LoginResponse};
use crate::services::auth::LoginService;

/// 이메일로 로그인하여 Bearer 액세스 토큰을 발급받습니다.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginDto,
    responses(
        (status = 200, description = "토큰 발급됨", body = LoginResponse),
        (status = 400, description = "입력값 검증 실패"),
        (status = 401, description = "등록되지 않은 사용자"),
    ),
    security(()),
    tag = "login"
)]
#[post("")]
pub async fn login(
    payload: web::Json<LoginDto>,
    service: web::Data<dyn LoginService>,
) -> Result<HttpResponse, AppError> {
    let response = service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
