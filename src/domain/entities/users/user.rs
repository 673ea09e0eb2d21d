//! User Entity Implementation
//!
//! 사용자 디렉터리의 핵심 엔티티입니다.
//! 연락처 필드(phone, department, 주소 구성요소)는 모두 선택 항목입니다.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::dto::users::request::UserRequest;

/// 사용자 계정 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    /// 저장소와 응답에서 사용하는 문자열 표현
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Inactive => "INACTIVE",
            UserStatus::Suspended => "SUSPENDED",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 사용자 엔티티
///
/// 저장소가 영속 인스턴스를 소유하며, 서비스 계층은 요청 단위의 복사본만 다룹니다.
/// `id`는 저장 시점에 저장소가 할당하고 이후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 사용자 이메일 (대소문자 무시 unique)
    pub email: String,
    /// 표시 이름
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default)]
    pub status: UserStatus,
    /// 생성 시간 (불변, BSON Date로 저장)
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    /// 수정 시간 (모든 변경 시 갱신)
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 필수 필드만으로 새 사용자 생성
    pub fn new(email: String, name: String) -> Self {
        let now = Utc::now();

        Self {
            id: None,
            email,
            name,
            phone: None,
            department: None,
            address: None,
            city: None,
            state: None,
            zip_code: None,
            country: None,
            status: UserStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// 요청 DTO로부터 새 사용자 생성
    ///
    /// 이름과 이메일은 앞뒤 공백을 제거하여 저장합니다.
    pub fn from_request(request: UserRequest) -> Self {
        let mut user = Self::new(String::new(), String::new());
        user.overwrite_with(request);
        user.updated_at = user.created_at;
        user
    }

    /// 전체 레코드 갱신
    ///
    /// `id`와 `created_at`을 제외한 모든 변경 가능한 필드를 요청 값으로 덮어쓰고
    /// `updated_at`을 갱신합니다. 요청에 없는 선택 필드는 비워집니다.
    pub fn apply_update(&mut self, request: UserRequest) {
        self.overwrite_with(request);
        self.updated_at = Utc::now();
    }

    fn overwrite_with(&mut self, request: UserRequest) {
        let UserRequest {
            name,
            email,
            phone,
            department,
            address,
            city,
            state,
            zip_code,
            country,
            status,
        } = request;

        self.name = name.trim().to_string();
        self.email = email.trim().to_string();
        self.phone = phone;
        self.department = department;
        self.address = address;
        self.city = city;
        self.state = state;
        self.zip_code = zip_code;
        self.country = country;
        self.status = status;
    }

    /// 이메일 대소문자 무시 일치 여부
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }

    /// 이름 부분 문자열 포함 여부 (대소문자 무시)
    pub fn name_contains(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use bson::Bson;

    use super::*;

    fn request(name: &str, email: &str) -> UserRequest {
        UserRequest {
            name: name.to_string(),
            email: email.to_string(),
            phone: Some("+1234567890".to_string()),
            department: None,
            address: Some("123 Test Street".to_string()),
            city: Some("Test City".to_string()),
            state: None,
            zip_code: None,
            country: Some("Test Country".to_string()),
            status: UserStatus::Active,
        }
    }

    #[test]
    fn test_from_request_trims_and_sets_timestamps() {
        let user = User::from_request(request("  Test User ", " test@example.com "));

        assert_eq!(user.id, None);
        assert_eq!(user.name, "Test User");
        assert_eq!(user.email, "test@example.com");
        assert_eq!(user.city.as_deref(), Some("Test City"));
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_apply_update_replaces_every_mutable_field() {
        let mut user = User::from_request(request("Test User", "test@example.com"));
        user.id = Some(3);
        let created_at = user.created_at;

        let mut update = request("Renamed", "renamed@example.com");
        update.phone = None;
        update.status = UserStatus::Suspended;
        user.apply_update(update);

        assert_eq!(user.id, Some(3));
        assert_eq!(user.created_at, created_at);
        assert!(user.updated_at >= created_at);
        assert_eq!(user.name, "Renamed");
        assert_eq!(user.phone, None);
        assert_eq!(user.status, UserStatus::Suspended);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let user = User::new("Test@Example.com".to_string(), "Jane Doe".to_string());

        assert!(user.email_matches("TEST@EXAMPLE.COM"));
        assert!(!user.email_matches("other@example.com"));
        assert!(user.name_contains("jane"));
        assert!(user.name_contains("E D"));
        assert!(!user.name_contains("john"));
    }

    #[test]
    fn test_status_serializes_as_screaming_case() {
        assert_eq!(serde_json::to_string(&UserStatus::Suspended).unwrap(), "\"SUSPENDED\"");
        let status: UserStatus = serde_json::from_str("\"INACTIVE\"").unwrap();
        assert_eq!(status, UserStatus::Inactive);
    }

    #[test]
    fn test_timestamps_are_stored_as_bson_dates() {
        let mut user = User::from_request(request("Test User", "test@example.com"));
        user.id = Some(7);

        let document = bson::to_document(&user).unwrap();

        assert_eq!(document.get_i64("_id").unwrap(), 7);
        assert!(matches!(document.get("created_at"), Some(Bson::DateTime(_))));
        assert!(matches!(document.get("updated_at"), Some(Bson::DateTime(_))));

        let restored: User = bson::from_document(document).unwrap();
        assert_eq!(
            restored.created_at.timestamp_millis(),
            user.created_at.timestamp_millis()
        );
        assert_eq!(restored.email, "test@example.com");
    }
}
