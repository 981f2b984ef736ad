use std::rc::Rc;
use std::sync::Arc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::core::errors::AppError;
use crate::domain::models::auth::{AuthState, AuthorizationPolicy};
use crate::services::auth::TokenService;

/// 요청별 인증 처리 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub policy: AuthorizationPolicy,
    pub token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let policy = self.policy.clone();
        let token_service = self.token_service.clone();

        Box::pin(async move {
            let auth_header = req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok());

            let state = token_service.authenticate(auth_header);

            if !policy.permits(&state) {
                let reason = match state {
                    AuthState::Unauthenticated(reason) => reason,
                    AuthState::Authenticated(_) => "정책 요구사항을 만족하지 않습니다".to_string(),
                };
                log::warn!("{} 정책 거부: {} {} ({})", policy.name, req.method(), req.path(), reason);

                let mut response = AppError::AuthenticationError(
                    "유효한 인증 토큰이 필요합니다".to_string()
                ).error_response();
                response.headers_mut().insert(
                    header::WWW_AUTHENTICATE,
                    header::HeaderValue::from_static(policy.scheme.as_str()),
                );
                let (req, _) = req.into_parts();
                return Ok(ServiceResponse::new(req, response).map_into_right_body());
            }

            if let AuthState::Authenticated(user) = state {
                log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                req.extensions_mut().insert(user);
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
