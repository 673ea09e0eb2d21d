//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`email_validator`] - 이메일 형식 검증 (단일 정규식)
//! - [`string_utils`] - 문자열 검증, 정리 유틸리티
//! - [`date_format`] - 응답 시각 직렬화 형식
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::email_validator::is_valid_email;
//! use crate::utils::string_utils::require_trimmed;
//!
//! assert!(is_valid_email("user@example.com"));
//! let name = require_trimmed(Some("  John  "), "Name cannot be blank or null")?;
//! ```

pub mod date_format;
pub mod email_validator;
pub mod string_utils;
