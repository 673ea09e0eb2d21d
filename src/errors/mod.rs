//! 에러 타입과 HTTP 에러 변환
//!
//! - [`AppError`]: 서비스/저장소 계층의 도메인 에러 분류
//! - [`ApiError`]: 요청 경로와 시각이 결합된 HTTP 경계 에러

pub mod errors;

pub use errors::{ApiError, AppError, AppResult, AtPath, ErrorContext, GENERIC_ERROR_MESSAGE};
