//! # User Management HTTP Handlers
//!
//! 사용자 CRUD 엔드포인트입니다. 모든 엔드포인트는 `Bearer` 인가 정책 뒤에 있습니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/users` | 전체 사용자 조회 | 200 OK |
//! | `GET` | `/api/users/{id}` | 사용자 조회 | 200 OK / 404 |
//! | `POST` | `/api/users` | 사용자 생성 | 201 Created / 409 |
//! | `PUT` | `/api/users` | 사용자 수정 | 200 OK / 404 |
//! | `DELETE` | `/api/users/{id}` | 사용자 삭제 | 204 No Content / 404 |

use actix_web::{delete, get, http::header, post, put, web, HttpResponse};
use uuid::Uuid;
use crate::core::errors::AppError;
use crate::domain::dto::users::{
    UserDto, UserDtoCreate, UserDtoCreateResult, UserDtoUpdate, UserDtoUpdateResult,
};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::users::UserService;

/// 사용자 리소스 기본 경로
pub const USERS_PATH: &str = "/api/users";

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "사용자 목록", body = Vec<UserDto>),
        (status = 401, description = "인증 필요"),
    ),
    tag = "users"
)]
#[get("")]
pub async fn get_users(
    service: web::Data<dyn UserService>,
) -> Result<HttpResponse, AppError> {
    let users = service.get_all().await?;

    Ok(HttpResponse::Ok().json(users))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "사용자 ID")),
    responses(
        (status = 200, description = "사용자 정보", body = UserDto),
        (status = 401, description = "인증 필요"),
        (status = 404, description = "사용자 없음"),
    ),
    tag = "users"
)]
#[get("/{id}")]
pub async fn get_user(
    id: web::Path<Uuid>,
    service: web::Data<dyn UserService>,
) -> Result<HttpResponse, AppError> {
    let user = service.get(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자를 생성하고 `Location` 헤더에 새 리소스 경로를 담아 201로 응답합니다.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserDtoCreate,
    responses(
        (status = 201, description = "사용자 생성됨", body = UserDtoCreateResult),
        (status = 400, description = "입력값 검증 실패"),
        (status = 401, description = "인증 필요"),
        (status = 409, description = "이미 사용 중인 이메일"),
    ),
    tag = "users"
)]
#[post("")]
pub async fn create_user(
    payload: web::Json<UserDtoCreate>,
    service: web::Data<dyn UserService>,
    caller: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let created = service.post(payload.into_inner()).await?;
    log::debug!("사용자 {} 생성 요청자: {}", created.id, caller.user_id);

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("{}/{}", USERS_PATH, created.id)))
        .json(created))
}

#[utoipa::path(
    put,
    path = "/api/users",
    request_body = UserDtoUpdate,
    responses(
        (status = 200, description = "사용자 수정됨", body = UserDtoUpdateResult),
        (status = 400, description = "입력값 검증 실패"),
        (status = 401, description = "인증 필요"),
        (status = 404, description = "사용자 없음"),
    ),
    tag = "users"
)]
#[put("")]
pub async fn update_user(
    payload: web::Json<UserDtoUpdate>,
    service: web::Data<dyn UserService>,
) -> Result<HttpResponse, AppError> {
    let updated = service.put(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "사용자 ID")),
    responses(
        (status = 204, description = "사용자 삭제됨"),
        (status = 401, description = "인증 필요"),
        (status = 404, description = "사용자 없음"),
    ),
    tag = "users"
)]
#[delete("/{id}")]
pub async fn delete_user(
    id: web::Path<Uuid>,
    service: web::Data<dyn UserService>,
) -> Result<HttpResponse, AppError> {
    service.delete(id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
