//! 사용자 생성/수정 요청 DTO
//!
//! `POST /api/v1/users`와 `PUT /api/v1/users/{id}`가 같은 본문 형식을 사용합니다.
//! 수정은 전체 레코드 교체이므로 생략된 선택 필드는 비워집니다.
//!
//! ## 검증 규칙
//!
//! - `name`: 공백 제외 1-100자
//! - `email`: 서비스 공통 이메일 문법 (`utils::email_validator`)
//! - 연락처 필드: 각각 길이 상한, 빈 문자열은 `None`으로 정리
//! - `status`: `ACTIVE | INACTIVE | SUSPENDED`, 생략 시 `ACTIVE`
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "name": "Test User",
//!   "email": "test@example.com",
//!   "phone": "+1234567890",
//!   "city": "Test City",
//!   "zipCode": "12345",
//!   "status": "ACTIVE"
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::users::UserStatus;
use crate::utils::email_validator::validate_email_format;
use crate::utils::string_utils::deserialize_optional_string;

/// 이름 최대 길이 (문자 수)
pub const NAME_MAX_LENGTH: usize = 100;

/// 사용자 생성/수정 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[validate(custom(function = "validate_email_format"))]
    pub email: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 30, message = "Phone must not exceed 30 characters"))]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 100, message = "Department must not exceed 100 characters"))]
    pub department: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 255, message = "Address must not exceed 255 characters"))]
    pub address: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 100, message = "City must not exceed 100 characters"))]
    pub city: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 100, message = "State must not exceed 100 characters"))]
    pub state: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 20, message = "Zip code must not exceed 20 characters"))]
    pub zip_code: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 100, message = "Country must not exceed 100 characters"))]
    pub country: Option<String>,

    #[serde(default)]
    pub status: UserStatus,
}

/// 이름 검증: 공백만 있는 값은 거부하고, 공백 제거 후 길이를 검사합니다.
fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::new("blank_name")
            .with_message("Name is required".into()));
    }

    if trimmed.chars().count() > NAME_MAX_LENGTH {
        return Err(ValidationError::new("name_too_long")
            .with_message("Name must be between 1 and 100 characters".into()));
    }

    Ok(())
}
