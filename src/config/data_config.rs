//! 실행 환경, 서버, 데이터베이스 설정 관리 모듈
//!
//! 모든 설정은 기동 시 한 번 읽혀 불변 구조체로 고정됩니다.
//! 환경 변수 조회는 `lookup` 클로저로 추상화되어 있어
//! 테스트에서 프로세스 환경을 건드리지 않고 설정을 구성할 수 있습니다.

use std::env;
use log::error;
use crate::config::auth_config::{SigningConfiguration, TokenConfiguration};
use crate::core::errors::AppResult;

/// 애플리케이션 실행 환경
///
/// `PROFILE` 환경 변수로 결정되며, API 문서 노출 여부를 가릅니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - API 문서 엔드포인트 노출
    Development,
    /// 운영 환경
    Production,
}

impl Environment {
    /// 프로필 이름에서 Environment를 생성합니다.
    ///
    /// `dev`, `development`(대소문자 무관)만 개발 환경이며 나머지는 운영 환경입니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Environment::Development,
            _ => Environment::Production,
        }
    }

    /// 개발 환경 여부
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 바인딩 주소 (`SERVER_ADDRESS`, 기본값 127.0.0.1:8080)
    pub bind_address: String,
    /// 워커 스레드 수 (`SERVER_WORKERS`, 기본값 4)
    pub workers: usize,
}

impl ServerConfig {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address = lookup("SERVER_ADDRESS")
            .unwrap_or_else(|| "127.0.0.1:8080".to_string());

        let workers = lookup("SERVER_WORKERS")
            .map(|raw| {
                raw.parse::<usize>().unwrap_or_else(|e| {
                    error!("SERVER_WORKERS 파싱 실패: {}. 기본값 4 사용", e);
                    4
                })
            })
            .unwrap_or(4);

        Self { bind_address, workers }
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// MongoDB 연결 URI (`MONGODB_URI`)
    pub uri: String,
    /// 사용할 데이터베이스 이름 (`DATABASE_NAME`)
    pub database_name: String,
}

impl DatabaseConfig {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            uri: lookup("MONGODB_URI")
                .unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            database_name: lookup("DATABASE_NAME")
                .unwrap_or_else(|| "user_api_dev".to_string()),
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// 초당 허용 요청 수 (`RATE_LIMIT_PER_SECOND`, 기본값 100)
    pub per_second: u64,
    /// 버스트 허용량 (`RATE_LIMIT_BURST_SIZE`, 기본값 200)
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let per_second = lookup("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = lookup("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self { per_second, burst_size }
    }
}

/// 기동 시 한 번 구성되는 전체 애플리케이션 설정
///
/// 서명/토큰 설정을 포함한 모든 값은 이후 읽기 전용으로만 사용됩니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub rate_limit: RateLimitConfig,
    pub signing: SigningConfiguration,
    pub token: TokenConfiguration,
    /// `MIGRATION` 환경 변수 원본 값
    pub migration_flag: Option<String>,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 로드합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 토큰 발급자/대상 누락, 잘못된 서명키 등
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키 조회 함수로 설정을 구성합니다.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_str(
            &lookup("PROFILE").unwrap_or_else(|| "dev".to_string()),
        );

        Ok(Self {
            environment,
            server: ServerConfig::from_lookup(&lookup),
            database: DatabaseConfig::from_lookup(&lookup),
            rate_limit: RateLimitConfig::from_lookup(&lookup),
            signing: SigningConfiguration::from_lookup(&lookup)?,
            token: TokenConfiguration::from_lookup(&lookup)?,
            migration_flag: lookup("MIGRATION"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("dev"), Environment::Development);
        assert_eq!(Environment::from_str("Development"), Environment::Development);
        assert_eq!(Environment::from_str("prod"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_defaults_when_unset() {
        let lookup = lookup_from(&[]);

        let server = ServerConfig::from_lookup(&lookup);
        assert_eq!(server.bind_address, "127.0.0.1:8080");
        assert_eq!(server.workers, 4);

        let rate = RateLimitConfig::from_lookup(&lookup);
        assert_eq!(rate.per_second, 100);
        assert_eq!(rate.burst_size, 200);
    }

    #[test]
    fn test_invalid_numbers_fall_back_to_defaults() {
        let lookup = lookup_from(&[
            ("SERVER_WORKERS", "many"),
            ("RATE_LIMIT_PER_SECOND", "-1"),
        ]);

        assert_eq!(ServerConfig::from_lookup(&lookup).workers, 4);
        assert_eq!(RateLimitConfig::from_lookup(&lookup).per_second, 100);
    }

    #[test]
    fn test_app_config_reads_token_section_and_migration_flag() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PROFILE", "prod"),
            ("TokenConfigurations__Issuer", "ExemploIssuer"),
            ("TokenConfigurations__Audience", "ExemploAudience"),
            ("JWT_SECRET", "0123456789abcdef0123456789abcdef"),
            ("MIGRATION", "APLICAR"),
        ]))
        .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.token.issuer(), "ExemploIssuer");
        assert_eq!(config.token.audience(), "ExemploAudience");
        assert_eq!(config.migration_flag.as_deref(), Some("APLICAR"));
    }

    #[test]
    fn test_app_config_fails_without_token_section() {
        let result = AppConfig::from_lookup(lookup_from(&[("PROFILE", "dev")]));

        assert!(result.is_err());
    }
}
