//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use serde::Deserialize;
use crate::errors::AppError;

/// 필수 문자열 입력 검증 및 정리
///
/// 값이 없거나 빈 문자열/공백만 있는 경우 `message`를 담은 InvalidInput을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 슬라이스를 반환합니다.
///
/// # 인자
/// * `value` - 검증할 문자열 (쿼리 파라미터 누락 시 None)
/// * `message` - 실패 시 에러 메시지
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::require_trimmed;
///
/// assert_eq!(require_trimmed(Some("  Hello  "), "required").unwrap(), "Hello");
/// assert!(require_trimmed(Some("   "), "required").is_err());
/// assert!(require_trimmed(None, "required").is_err());
/// ```
pub fn require_trimmed<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, AppError> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed),
        _ => Err(AppError::invalid_input(message)),
    }
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// JSON 역직렬화 시 빈 문자열이나 공백만 있는 문자열을 자동으로 None으로 변환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 후 Some으로 반환합니다.
/// 필드가 아예 없는 경우를 위해 `#[serde(default)]`와 함께 사용합니다.
///
/// # 예제
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct UserRequest {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     phone: Option<String>,
/// }
///
/// // JSON: {"phone": "  010-1234  "} → Some("010-1234")
/// // JSON: {"phone": ""} → None
/// // JSON: {} → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_trimmed() {
        assert_eq!(require_trimmed(Some("Hello"), "name").unwrap(), "Hello");
        assert_eq!(require_trimmed(Some("  World  "), "name").unwrap(), "World");

        assert!(require_trimmed(Some(""), "name").is_err());
        assert!(require_trimmed(Some("   "), "name").is_err());
        assert!(require_trimmed(Some("\t\n"), "name").is_err());

        match require_trimmed(None, "Name cannot be blank or null") {
            Err(AppError::InvalidInput { message, .. }) => {
                assert_eq!(message, "Name cannot be blank or null")
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        // 유효한 문자열 - 공백이 제거되고 Some 반환
        let json = r#"{"optional_field": "  Hello World  "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, Some("Hello World".to_string()));

        // 공백만 있는 문자열 - None 반환
        let json = r#"{"optional_field": " \t "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);

        // null 값 - None 반환
        let json = r#"{"optional_field": null}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);

        // 필드가 없는 경우 - default
        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(result.optional_field, None);

        // 한글 문자열
        let json = r#"{"optional_field": "  서울시 강남구  "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, Some("서울시 강남구".to_string()));
    }
}
