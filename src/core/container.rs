//! 의존성 조립
//!
//! 모든 서비스는 기동 시 한 번 생성되어 `Arc`로 공유됩니다.
//! 전역 레지스트리 없이 생성자 인자로만 의존성을 전달하므로
//! 테스트에서는 저장소 구현만 바꿔 같은 그래프를 구성할 수 있습니다.
//!
//! ```text
//! UserRepository ─┬─> DefaultUserService
//!                 └─> DefaultLoginService <── TokenService <── SigningConfiguration
//!                                                          <── TokenConfiguration
//! ```

use std::sync::Arc;
use crate::config::{SigningConfiguration, TokenConfiguration};
use crate::repositories::UserRepository;
use crate::services::auth::{DefaultLoginService, LoginService, TokenService};
use crate::services::users::{DefaultUserService, UserService};

/// 조립된 서비스 묶음
#[derive(Clone)]
pub struct AppContainer {
    pub token_service: Arc<TokenService>,
    pub user_service: Arc<dyn UserService>,
    pub login_service: Arc<dyn LoginService>,
}

impl AppContainer {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        signing: SigningConfiguration,
        token: TokenConfiguration,
    ) -> Self {
        let token_service = Arc::new(TokenService::new(signing, token));

        let user_service: Arc<dyn UserService> =
            Arc::new(DefaultUserService::new(repository.clone()));
        let login_service: Arc<dyn LoginService> =
            Arc::new(DefaultLoginService::new(repository, token_service.clone()));

        log::info!("서비스 조립 완료: TokenService, UserService, LoginService");

        Self {
            token_service,
            user_service,
            login_service,
        }
    }
}
