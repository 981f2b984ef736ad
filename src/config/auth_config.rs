//! # Authentication Configuration Module
//!
//! JWT 서명키와 토큰 발급 정책(발급자, 대상, 유효 기간)을 관리하는 모듈입니다.
//! 두 설정 모두 기동 시 한 번 로드되어 불변 값으로 고정되며,
//! 토큰 발급과 검증은 프로세스 수명 동안 항상 같은 값을 사용합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### 토큰 정책 (`TokenConfigurations` 섹션)
//! ```bash
//! export TokenConfigurations__Issuer="ExemploIssuer"
//! export TokenConfigurations__Audience="ExemploAudience"
//! export TokenConfigurations__Seconds="3600"
//! ```
//!
//! ### 서명키
//! ```bash
//! # 최소 32바이트. 설정하지 않으면 프로세스마다 임의의 키가 생성됩니다.
//! export JWT_SECRET="your-super-secret-256-bit-key-generated-securely"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{SigningConfiguration, TokenConfiguration};
//!
//! let signing = SigningConfiguration::from_secret("0123456789abcdef0123456789abcdef")?;
//! let token = TokenConfiguration::new("issuer", "audience", 3600)?;
//! let token_service = TokenService::new(signing, token);
//! ```

use std::fmt;
use std::sync::Arc;
use rand::RngCore;
use crate::core::errors::{AppError, AppResult};

/// 토큰 정책 설정 섹션 이름
pub const TOKEN_CONFIGURATION_SECTION: &str = "TokenConfigurations";

/// 서명키 최소 길이 (바이트, HS256)
pub const MIN_SECRET_LENGTH: usize = 32;

/// 서명키가 설정되지 않았을 때 생성하는 임의 키 길이 (바이트)
const GENERATED_SECRET_LENGTH: usize = 64;

/// 기본 토큰 유효 기간 (초)
const DEFAULT_TOKEN_SECONDS: i64 = 3600;

/// 허용하는 최대 토큰 유효 기간 (초, 10년)
pub const MAX_TOKEN_SECONDS: i64 = 10 * 365 * 24 * 60 * 60;

/// JWT 서명에 사용하는 대칭키 설정
///
/// 키 바이트는 `Arc`로 공유되어 복제 비용 없이 여러 컴포넌트에 전달됩니다.
/// `Debug` 출력에는 키 값이 노출되지 않습니다.
#[derive(Clone)]
pub struct SigningConfiguration {
    key: Arc<[u8]>,
}

impl SigningConfiguration {
    /// 주어진 비밀 문자열로 서명 설정을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 비밀키가 32바이트보다 짧은 경우
    pub fn from_secret(secret: &str) -> AppResult<Self> {
        if secret.len() < MIN_SECRET_LENGTH {
            return Err(AppError::ConfigurationError(format!(
                "JWT_SECRET은 최소 {}바이트 이상이어야 합니다",
                MIN_SECRET_LENGTH
            )));
        }

        Ok(Self {
            key: Arc::from(secret.as_bytes()),
        })
    }

    /// 프로세스 수명 동안만 유효한 임의의 서명키를 생성합니다.
    ///
    /// 재기동하면 이전에 발급된 토큰은 모두 검증에 실패합니다.
    pub fn generate() -> Self {
        let mut key = vec![0u8; GENERATED_SECRET_LENGTH];
        rand::thread_rng().fill_bytes(&mut key);

        Self { key: Arc::from(key) }
    }

    /// `JWT_SECRET` 값으로 서명 설정을 구성합니다.
    pub fn from_lookup<F>(lookup: &F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup("JWT_SECRET") {
            Some(secret) => Self::from_secret(&secret),
            None => {
                log::warn!("JWT_SECRET not set, generating a per-process signing key");
                Ok(Self::generate())
            }
        }
    }

    /// 서명키 바이트
    pub fn key(&self) -> &[u8] {
        &self.key
    }
}

impl fmt::Debug for SigningConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningConfiguration")
            .field("key", &"<redacted>")
            .field("key_len", &self.key.len())
            .finish()
    }
}

/// 토큰 발급/검증 정책
///
/// 발급자(`iss`)와 대상(`aud`)은 검증 시 정확히 일치해야 하며,
/// `seconds`는 로그인 시 발급되는 토큰의 유효 기간입니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenConfiguration {
    issuer: String,
    audience: String,
    seconds: i64,
}

impl TokenConfiguration {
    /// 토큰 정책을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 발급자/대상이 비어 있거나 유효 기간이 0 이하 또는 10년 초과인 경우
    pub fn new(issuer: impl Into<String>, audience: impl Into<String>, seconds: i64) -> AppResult<Self> {
        let issuer = issuer.into();
        let audience = audience.into();

        if issuer.trim().is_empty() {
            return Err(AppError::ConfigurationError(format!(
                "{}:Issuer 값이 필요합니다", TOKEN_CONFIGURATION_SECTION
            )));
        }
        if audience.trim().is_empty() {
            return Err(AppError::ConfigurationError(format!(
                "{}:Audience 값이 필요합니다", TOKEN_CONFIGURATION_SECTION
            )));
        }
        if seconds <= 0 {
            return Err(AppError::ConfigurationError(format!(
                "{}:Seconds 값은 양수여야 합니다", TOKEN_CONFIGURATION_SECTION
            )));
        }
        if seconds > MAX_TOKEN_SECONDS {
            return Err(AppError::ConfigurationError(format!(
                "{}:Seconds 값은 {} 이하여야 합니다", TOKEN_CONFIGURATION_SECTION, MAX_TOKEN_SECONDS
            )));
        }

        Ok(Self { issuer, audience, seconds })
    }

    /// `TokenConfigurations__*` 환경 변수에서 정책을 구성합니다.
    pub fn from_lookup<F>(lookup: &F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = |name: &str| format!("{}__{}", TOKEN_CONFIGURATION_SECTION, name);

        let issuer = lookup(&key("Issuer")).unwrap_or_default();
        let audience = lookup(&key("Audience")).unwrap_or_default();
        let seconds = match lookup(&key("Seconds")) {
            Some(raw) => raw.parse::<i64>().map_err(|e| {
                AppError::ConfigurationError(format!(
                    "{}:Seconds 파싱 실패: {}", TOKEN_CONFIGURATION_SECTION, e
                ))
            })?,
            None => DEFAULT_TOKEN_SECONDS,
        };

        Self::new(issuer, audience, seconds)
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_secret_is_rejected() {
        assert!(SigningConfiguration::from_secret("short").is_err());
        assert!(SigningConfiguration::from_secret("0123456789abcdef0123456789abcdef").is_ok());
    }

    #[test]
    fn test_generated_keys_differ() {
        let first = SigningConfiguration::generate();
        let second = SigningConfiguration::generate();

        assert_eq!(first.key().len(), 64);
        assert_ne!(first.key(), second.key());
    }

    #[test]
    fn test_debug_output_redacts_key() {
        let signing = SigningConfiguration::from_secret("0123456789abcdef0123456789abcdef").unwrap();
        let debug = format!("{:?}", signing);

        assert!(!debug.contains("0123456789abcdef"));
        assert!(debug.contains("redacted"));
    }

    #[test]
    fn test_token_configuration_validation() {
        assert!(TokenConfiguration::new("issuer", "audience", 60).is_ok());
        assert!(TokenConfiguration::new("", "audience", 60).is_err());
        assert!(TokenConfiguration::new("issuer", " ", 60).is_err());
        assert!(TokenConfiguration::new("issuer", "audience", 0).is_err());
    }

    #[test]
    fn test_token_configuration_from_section() {
        let lookup = |key: &str| match key {
            "TokenConfigurations__Issuer" => Some("ExemploIssuer".to_string()),
            "TokenConfigurations__Audience" => Some("ExemploAudience".to_string()),
            _ => None,
        };

        let config = TokenConfiguration::from_lookup(&lookup).unwrap();
        assert_eq!(config.issuer(), "ExemploIssuer");
        assert_eq!(config.audience(), "ExemploAudience");
        assert_eq!(config.seconds(), 3600);
    }

    #[test]
    fn test_token_lifetime_upper_bound() {
        assert!(TokenConfiguration::new("issuer", "audience", MAX_TOKEN_SECONDS).is_ok());
        assert!(matches!(
            TokenConfiguration::new("issuer", "audience", MAX_TOKEN_SECONDS + 1),
            Err(AppError::ConfigurationError(_))
        ));

        let lookup = |key: &str| match key {
            "TokenConfigurations__Issuer" => Some("ExemploIssuer".to_string()),
            "TokenConfigurations__Audience" => Some("ExemploAudience".to_string()),
            "TokenConfigurations__Seconds" => Some(i64::MAX.to_string()),
            _ => None,
        };
        assert!(matches!(
            TokenConfiguration::from_lookup(&lookup),
            Err(AppError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_token_configuration_rejects_bad_seconds() {
        let lookup = |key: &str| match key {
            "TokenConfigurations__Issuer" => Some("i".to_string()),
            "TokenConfigurations__Audience" => Some("a".to_string()),
            "TokenConfigurations__Seconds" => Some("soon".to_string()),
            _ => None,
        };

        assert!(matches!(
            TokenConfiguration::from_lookup(&lookup),
            Err(AppError::ConfigurationError(_))
        ));
    }
}
