use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::{User, UserStatus};

/// 사용자 응답 DTO
///
/// 외부에 노출해도 되는 필드만 담은 User의 투영입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub status: UserStatus,

    #[serde(with = "crate::utils::date_format")]
    pub created_at: DateTime<Utc>,

    #[serde(with = "crate::utils::date_format")]
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            name,
            phone,
            department,
            address,
            city,
            state,
            zip_code,
            country,
            status,
            created_at,
            updated_at,
        } = user;

        Self {
            id: id.unwrap_or_default(),
            email,
            name,
            phone,
            department,
            address,
            city,
            state,
            zip_code,
            country,
            status,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_json_shape() {
        let mut user = User::new("test@example.com".to_string(), "Test User".to_string());
        user.id = Some(1);
        user.zip_code = Some("12345".to_string());

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["email"], "test@example.com");
        assert_eq!(json["name"], "Test User");
        assert_eq!(json["zipCode"], "12345");
        assert_eq!(json["status"], "ACTIVE");
        assert!(json["phone"].is_null());
        assert_eq!(json["createdAt"].as_str().unwrap().len(), "2024-01-01T00:00:00".len());
    }
}
