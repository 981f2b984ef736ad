//! API 라우트 설정 모듈
//!
//! 엔드포인트를 기능별 스코프로 묶고, 인가 정책과 서비스 의존성을 연결합니다.
//!
//! | 스코프 | 정책 | 핸들러 |
//! |--------|------|--------|
//! | `/health` | 없음 | 헬스체크 |
//! | `/api/login` | 없음 | 로그인 |
//! | `/api/users` | `Bearer` | 사용자 CRUD |
//! | `/swagger/v1/swagger.json` | 없음 (개발 환경 전용) | OpenAPI 문서 |
//!
//! # Examples
//!
//! ```rust,ignore
//! App::new().configure(|cfg| configure_all_routes(cfg, &container, Environment::Development))
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;
use crate::config::Environment;
use crate::core::AppContainer;
use crate::domain::models::auth::BEARER_POLICY;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

pub fn configure_all_routes(
    cfg: &mut web::ServiceConfig,
    container: &AppContainer,
    environment: Environment,
) {
    cfg.app_data(web::Data::from(container.user_service.clone()))
        .app_data(web::Data::from(container.login_service.clone()));

    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_user_routes(cfg, container);

    if environment.is_development() {
        log::info!("개발 환경: API 문서 노출 ({})", handlers::docs::OPENAPI_JSON_PATH);
        cfg.service(handlers::docs::openapi_json);
    }
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/login")
            .service(handlers::auth::login)
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig, container: &AppContainer) {
    cfg.service(
        web::scope(handlers::users::USERS_PATH)
            .wrap(AuthMiddleware::new(BEARER_POLICY, container.token_service.clone()))
            .service(handlers::users::get_users)
            .service(handlers::users::get_user)
            .service(handlers::users::create_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user)
    );
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use actix_web::{http::{header, StatusCode}, test, App};
    use serde_json::Value;
    use crate::config::{SigningConfiguration, TokenConfiguration};
    use crate::repositories::users::InMemoryUserRepository;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn container_with(secret: &str) -> AppContainer {
        AppContainer::new(
            Arc::new(InMemoryUserRepository::new()),
            SigningConfiguration::from_secret(secret).unwrap(),
            TokenConfiguration::new("ExemploIssuer", "ExemploAudience", 3600).unwrap(),
        )
    }

    fn container() -> AppContainer {
        container_with(SECRET)
    }

    fn bearer(container: &AppContainer) -> String {
        let issued = container
            .token_service
            .issue_token(&uuid::Uuid::new_v4(), "admin@example.com")
            .unwrap();
        format!("Bearer {}", issued.access_token)
    }

    macro_rules! app {
        ($container:expr, $env:expr) => {{
            let container = $container.clone();
            test::init_service(
                App::new().configure(move |cfg| configure_all_routes(cfg, &container, $env)),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = app!(container(), Environment::Production);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_users_require_token() {
        let app = app!(container(), Environment::Development);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/users").to_request()).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(resp.headers().get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");
    }

    #[actix_web::test]
    async fn test_token_signed_with_other_key_is_unauthorized() {
        let forged = bearer(&container_with("fedcba9876543210fedcba9876543210"));
        let app = app!(container(), Environment::Development);

        let req = test::TestRequest::get()
            .uri("/api/users")
            .insert_header((header::AUTHORIZATION, forged))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_create_user_returns_location_and_projection() {
        let container = container();
        let token = bearer(&container);
        let app = app!(container, Environment::Development);

        let req = test::TestRequest::post()
            .uri("/api/users")
            .insert_header((header::AUTHORIZATION, token.clone()))
            .set_json(serde_json::json!({ "name": "Ada", "email": "ada@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let location = resp.headers().get(header::LOCATION).unwrap().to_str().unwrap().to_string();

        let body: Value = test::read_body_json(resp).await;
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert_eq!(body["name"], "Ada");
        assert_eq!(body["email"], "ada@example.com");
        assert!(body["createdAt"].is_string());
        assert_eq!(location, format!("/api/users/{}", body["id"].as_str().unwrap()));

        let req = test::TestRequest::get()
            .uri(&location)
            .insert_header((header::AUTHORIZATION, token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_duplicate_email_conflicts() {
        let container = container();
        let token = bearer(&container);
        let app = app!(container, Environment::Production);

        for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
            let req = test::TestRequest::post()
                .uri("/api/users")
                .insert_header((header::AUTHORIZATION, token.clone()))
                .set_json(serde_json::json!({ "name": "Ada", "email": "ada@example.com" }))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), expected);
        }
    }

    #[actix_web::test]
    async fn test_update_and_delete_missing_user() {
        let container = container();
        let token = bearer(&container);
        let app = app!(container, Environment::Production);
        let id = uuid::Uuid::new_v4();

        let req = test::TestRequest::put()
            .uri("/api/users")
            .insert_header((header::AUTHORIZATION, token.clone()))
            .set_json(serde_json::json!({ "id": id, "name": "Ghost", "email": "ghost@example.com" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/users/{}", id))
            .insert_header((header::AUTHORIZATION, token))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_login_issues_usable_token() {
        let container = container();
        let admin = bearer(&container);
        let app = app!(container, Environment::Production);

        let req = test::TestRequest::post()
            .uri("/api/users")
            .insert_header((header::AUTHORIZATION, admin))
            .set_json(serde_json::json!({ "name": "Ada", "email": "ada@example.com" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(serde_json::json!({ "email": "ada@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["authenticated"], true);
        assert_eq!(body["userName"], "ada@example.com");
        let token = body["accessToken"].as_str().unwrap();

        let req = test::TestRequest::get()
            .uri("/api/users")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let users: Value = test::read_body_json(resp).await;
        assert_eq!(users.as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_login_unknown_email_is_unauthorized() {
        let app = app!(container(), Environment::Production);

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(serde_json::json!({ "email": "nobody@example.com" }))
            .to_request();

        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_docs_only_in_development() {
        let dev = app!(container(), Environment::Development);
        let resp = test::call_service(
            &dev,
            test::TestRequest::get().uri("/swagger/v1/swagger.json").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let prod = app!(container(), Environment::Production);
        let resp = test::call_service(
            &prod,
            test::TestRequest::get().uri("/swagger/v1/swagger.json").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
