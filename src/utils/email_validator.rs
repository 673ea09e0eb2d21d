//! # 이메일 형식 검증
//!
//! 서비스 전체에서 하나의 이메일 문법만 사용합니다.
//!
//! ```text
//! ^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$
//! ```
//!
//! - 로컬 파트: 영문, 숫자, `+ _ . -` 1자 이상
//! - 도메인: 영문, 숫자, `. -` 1자 이상
//! - 최상위 도메인: 영문 2자 이상 (길이 상한 없음)
//!
//! 정규식은 최초 사용 시 한 번만 컴파일됩니다.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    // 상수 패턴이므로 컴파일 실패는 테스트에서 검출됨
    Regex::new(EMAIL_PATTERN).unwrap_or_else(|e| panic!("invalid email pattern: {}", e))
});

/// 이메일 형식이 유효한지 확인합니다.
///
/// 빈 문자열이나 공백만 있는 경우 `false`를 반환하고,
/// 그 외에는 앞뒤 공백을 제거한 뒤 정규식과 전체 일치하는지 검사합니다.
///
/// # 예제
///
/// ```rust
/// use user_directory_service::utils::email_validator::is_valid_email;
///
/// assert!(is_valid_email("test@example.com"));
/// assert!(is_valid_email("  TEST@EXAMPLE.COM "));
/// assert!(!is_valid_email("invalid-email"));
/// assert!(!is_valid_email("   "));
/// ```
pub fn is_valid_email(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return false;
    }
    EMAIL_REGEX.is_match(trimmed)
}

/// `validator` 커스텀 규칙
///
/// 요청 DTO에서 `#[validate(custom(function = "validate_email_format"))]`로 사용합니다.
pub fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    if !is_valid_email(email) {
        return Err(ValidationError::new("invalid_email")
            .with_message("Email should be valid".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for email in [
            "test@example.com",
            "TEST@EXAMPLE.COM",
            "first.last@sub.domain.org",
            "user+tag@example.co",
            "under_score-dash@my-host.io",
            "a@b.photography",
        ] {
            assert!(is_valid_email(email), "expected valid: {}", email);
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "   ",
            "invalid-email",
            "no-at-sign.com",
            "user@",
            "@example.com",
            "user@example",
            "user@example.c",
            "user@example.c0m",
            "user name@example.com",
            "user@exa mple.com",
            "user@@example.com",
        ] {
            assert!(!is_valid_email(email), "expected invalid: {:?}", email);
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert!(is_valid_email("  test@example.com\t"));
    }

    #[test]
    fn test_validate_email_format() {
        assert!(validate_email_format("test@example.com").is_ok());

        let error = validate_email_format("nope").unwrap_err();
        assert_eq!(error.code, "invalid_email");
    }
}
