//! 서비스 계층 사용자 모델
//!
//! DTO와 엔티티 사이에서 비즈니스 규칙(생성 시각 기본값 등)을 적용하는 중간 형태입니다.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 사용자 모델
#[derive(Debug, Clone, PartialEq)]
pub struct UserModel {
    /// 사용자 ID (신규 사용자는 `Uuid::nil()`)
    pub id: Uuid,
    pub name: String,
    pub email: String,
    created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserModel {
    /// 새 모델을 생성합니다.
    ///
    /// `created_at`이 주어지지 않으면 현재 시각을 사용합니다.
    pub fn new(
        id: Uuid,
        name: String,
        email: String,
        created_at: Option<DateTime<Utc>>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            created_at: created_at.unwrap_or_else(Utc::now),
            updated_at,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// 아직 저장되지 않은(ID가 할당되지 않은) 모델인지 확인
    pub fn is_transient(&self) -> bool {
        self.id.is_nil()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_missing_created_at_defaults_to_now() {
        let before = Utc::now();
        let model = UserModel::new(Uuid::nil(), "Ada".into(), "ada@example.com".into(), None, None);

        assert!(model.created_at() >= before);
        assert!(model.is_transient());
    }

    #[test]
    fn test_explicit_created_at_is_kept() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let model = UserModel::new(Uuid::new_v4(), "Ada".into(), "ada@example.com".into(), Some(created), None);

        assert_eq!(model.created_at(), created);
        assert!(!model.is_transient());
    }
}
