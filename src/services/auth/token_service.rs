//! # JWT Token Service
//!
//! HS256 대칭키로 액세스 토큰을 발급하고 검증하는 서비스입니다.
//!
//! ## 검증 규칙
//!
//! 토큰이 유효하려면 아래 조건을 모두 만족해야 합니다.
//!
//! 1. `SigningConfiguration`의 키로 서명되었을 것
//! 2. `iss`가 설정된 발급자와 정확히 일치할 것
//! 3. `aud`가 설정된 대상과 정확히 일치할 것
//! 4. 현재 시각이 `exp`를 지나지 않았을 것 (허용 오차 없음, 밀리초 단위 비교)
//!
//! 하나라도 어긋나면 `AppError::AuthenticationError`가 반환됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let token_service = TokenService::new(signing, token_config);
//!
//! let issued = token_service.issue_token(&user_id, "ada@example.com")?;
//! let claims = token_service.verify_token(&issued.access_token)?;
//! assert_eq!(claims.unique_name, "ada@example.com");
//! ```

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use log::{debug, warn};
use uuid::Uuid;
use crate::config::{SigningConfiguration, TokenConfiguration};
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::auth::{AuthState, AuthenticatedUser};
use crate::domain::models::token::{IssuedToken, TokenClaims};

/// Authorization 헤더의 인증 스킴 이름 (대소문자 무관)
const BEARER_SCHEME: &str = "Bearer";

/// 토큰 발급/검증 서비스
///
/// 서명키와 토큰 정책은 생성 시 고정되며 이후 변경되지 않습니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    config: TokenConfiguration,
}

impl TokenService {
    pub fn new(signing: SigningConfiguration, config: TokenConfiguration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        // exp/nbf는 밀리초 단위로 직접 비교한다
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.set_issuer(&[config.issuer()]);
        validation.set_audience(&[config.audience()]);
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);

        Self {
            encoding_key: EncodingKey::from_secret(signing.key()),
            decoding_key: DecodingKey::from_secret(signing.key()),
            validation,
            config,
        }
    }

    /// 현재 시각 기준으로 액세스 토큰을 발급합니다.
    pub fn issue_token(&self, user_id: &Uuid, email: &str) -> AppResult<IssuedToken> {
        self.issue_token_at(user_id, email, Utc::now())
    }

    /// 주어진 시각을 발급 시각으로 하여 액세스 토큰을 발급합니다.
    ///
    /// `iat`와 `nbf`는 발급 시각, `exp`는 발급 시각 + `seconds`입니다.
    pub fn issue_token_at(&self, user_id: &Uuid, email: &str, now: DateTime<Utc>) -> AppResult<IssuedToken> {
        let issued_at = now.timestamp();
        let lifetime = Duration::try_seconds(self.config.seconds())
            .ok_or_else(|| AppError::InternalError("토큰 유효 기간이 범위를 벗어났습니다".to_string()))?;
        let expires_at = issued_at
            .checked_add(self.config.seconds())
            .ok_or_else(|| AppError::InternalError("토큰 만료 시각 계산 실패".to_string()))?;

        let claims = TokenClaims {
            sub: user_id.to_string(),
            unique_name: email.to_string(),
            jti: Uuid::new_v4().to_string(),
            iss: self.config.issuer().to_string(),
            aud: self.config.audience().to_string(),
            iat: issued_at,
            nbf: issued_at,
            exp: expires_at,
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))?;

        let created = timestamp_to_datetime(issued_at)?;
        let expiration = created
            .checked_add_signed(lifetime)
            .ok_or_else(|| AppError::InternalError("토큰 만료 시각 계산 실패".to_string()))?;

        Ok(IssuedToken {
            access_token,
            created,
            expiration,
        })
    }

    /// 현재 시각 기준으로 토큰을 검증합니다.
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        self.verify_token_at(token, Utc::now())
    }

    /// 주어진 시각 기준으로 토큰을 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 서명, 발급자, 대상, 만료, 사용 시작 시각 중 하나라도 불일치
    pub fn verify_token_at(&self, token: &str, now: DateTime<Utc>) -> AppResult<TokenClaims> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)))?;

        let now_ms = now.timestamp_millis();

        if now_ms > claims.exp.saturating_mul(1000) {
            return Err(AppError::AuthenticationError("토큰이 만료되었습니다".to_string()));
        }

        if claims.nbf.saturating_mul(1000) > now_ms {
            return Err(AppError::AuthenticationError("아직 사용할 수 없는 토큰입니다".to_string()));
        }

        Ok(claims)
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 추출합니다.
    ///
    /// 스킴 이름은 대소문자를 구분하지 않습니다 (`bearer <token>`도 허용).
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header
            .trim_start()
            .split_once(' ')
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case(BEARER_SCHEME))
            .map(|(_, token)| token.trim())
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
    }

    /// `Authorization` 헤더로 요청의 인증 상태를 결정합니다.
    pub fn authenticate(&self, auth_header: Option<&str>) -> AuthState {
        self.authenticate_at(auth_header, Utc::now())
    }

    pub fn authenticate_at(&self, auth_header: Option<&str>, now: DateTime<Utc>) -> AuthState {
        let Some(header) = auth_header else {
            return AuthState::Unauthenticated("Authorization 헤더가 없습니다".to_string());
        };

        let claims = match self
            .extract_bearer_token(header)
            .and_then(|token| self.verify_token_at(token, now))
        {
            Ok(claims) => claims,
            Err(e) => {
                warn!("토큰 인증 실패: {}", e);
                return AuthState::Unauthenticated(e.to_string());
            }
        };

        debug!("토큰 인증 성공: {}", claims.sub);

        AuthState::Authenticated(AuthenticatedUser {
            user_id: claims.sub,
            email: claims.unique_name,
            token_id: claims.jti,
        })
    }
}

fn timestamp_to_datetime(seconds: i64) -> AppResult<DateTime<Utc>> {
    Utc.timestamp_opt(seconds, 0)
        .single()
        .ok_or_else(|| AppError::InternalError(format!("잘못된 타임스탬프: {}", seconds)))
}
