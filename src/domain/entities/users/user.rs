//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 문서입니다.

use bson::{DateTime, Uuid};
use serde::{Deserialize, Serialize};

/// 사용자 문서가 저장되는 컬렉션 이름
pub const USER_COLLECTION: &str = "users";

/// 사용자 엔티티
///
/// `_id`는 UUID(바이너리 subtype 4)로 저장되며, 이메일은 마이그레이션으로
/// 생성되는 유니크 인덱스에 의해 컬렉션 전체에서 고유합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEntity {
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// 사용자 이름
    pub name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간 (한 번도 수정되지 않았으면 None)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

impl UserEntity {
    /// 수정 시각을 현재 시각으로 갱신합니다.
    pub fn touch(&mut self) {
        self.updated_at = Some(DateTime::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bson_document_uses_underscore_id() {
        let entity = UserEntity {
            id: Uuid::new(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            created_at: DateTime::now(),
            updated_at: None,
        };

        let document = bson::to_document(&entity).unwrap();

        assert!(document.contains_key("_id"));
        assert!(!document.contains_key("updated_at"));
        assert_eq!(document.get_str("email").unwrap(), "ada@example.com");
    }

    #[test]
    fn test_touch_sets_updated_at() {
        let mut entity = UserEntity {
            id: Uuid::new(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            created_at: DateTime::now(),
            updated_at: None,
        };

        entity.touch();

        assert!(entity.updated_at.is_some());
    }
}
