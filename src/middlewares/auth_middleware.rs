//! # Authentication Middleware
//!
//! 스코프 단위로 인가 정책을 적용하는 Actix Web 미들웨어입니다.
//!
//! 요청마다 `Authorization: Bearer <token>` 헤더를 `TokenService`로 검증해
//! 인증 상태(`AuthState`)를 결정하고, 정책이 허용하지 않으면
//! 핸들러를 호출하지 않고 401 응답(`WWW-Authenticate: Bearer`)을 반환합니다.
//! 인증에 성공하면 `AuthenticatedUser`가 요청 확장에 저장되어
//! 핸들러에서 추출자로 꺼낼 수 있습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::models::auth::BEARER_POLICY;
//! use crate::middlewares::AuthMiddleware;
//!
//! cfg.service(
//!     web::scope("/api/users")
//!         .wrap(AuthMiddleware::new(BEARER_POLICY, container.token_service.clone()))
//!         .service(get_users)
//! );
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use crate::domain::models::auth::AuthorizationPolicy;
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenService;

/// 인가 정책 미들웨어 팩토리
pub struct AuthMiddleware {
    policy: AuthorizationPolicy,
    token_service: Arc<TokenService>,
}

impl AuthMiddleware {
    pub fn new(policy: AuthorizationPolicy, token_service: Arc<TokenService>) -> Self {
        Self { policy, token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            policy: self.policy.clone(),
            token_service: self.token_service.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::{header, StatusCode}, test, App, HttpResponse, Responder};
    use uuid::Uuid;
    use crate::config::{SigningConfiguration, TokenConfiguration};
    use crate::domain::models::auth::{AuthenticatedUser, BEARER_POLICY};

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn token_service(secret: &str) -> Arc<TokenService> {
        Arc::new(TokenService::new(
            SigningConfiguration::from_secret(secret).unwrap(),
            TokenConfiguration::new("ExemploIssuer", "ExemploAudience", 60).unwrap(),
        ))
    }

    #[get("/me")]
    async fn me(user: AuthenticatedUser) -> impl Responder {
        HttpResponse::Ok().body(user.email)
    }

    #[actix_web::test]
    async fn test_missing_token_is_challenged() {
        let app = test::init_service(
            App::new().service(
                actix_web::web::scope("")
                    .wrap(AuthMiddleware::new(BEARER_POLICY, token_service(SECRET)))
                    .service(me),
            ),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/me").to_request()).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(resp.headers().get(header::WWW_AUTHENTICATE).unwrap(), BEARER_POLICY.scheme.as_str());
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler() {
        let tokens = token_service(SECRET);
        let issued = tokens.issue_token(&Uuid::new_v4(), "ada@example.com").unwrap();
        let app = test::init_service(
            App::new().service(
                actix_web::web::scope("")
                    .wrap(AuthMiddleware::new(BEARER_POLICY, tokens))
                    .service(me),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", issued.access_token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, actix_web::web::Bytes::from_static(b"ada@example.com"));
    }

    #[actix_web::test]
    async fn test_token_from_other_key_is_rejected() {
        let forged = token_service("fedcba9876543210fedcba9876543210")
            .issue_token(&Uuid::new_v4(), "ada@example.com")
            .unwrap();
        let app = test::init_service(
            App::new().service(
                actix_web::web::scope("")
                    .wrap(AuthMiddleware::new(BEARER_POLICY, token_service(SECRET)))
                    .service(me),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", forged.access_token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
