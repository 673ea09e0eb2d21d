//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 사용자 디렉터리 서비스를 위한 통합 에러 처리 시스템입니다.
//! 서비스 계층은 [`AppError`]만 알고, HTTP 경계에서 [`ApiError`]가
//! 요청 경로와 발생 시각을 덧붙여 [`ErrorResponse`] 본문으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `InvalidEmail` | 400 Bad Request | 이메일 형식 오류 |
//! | `InvalidInput` | 400 Bad Request | ID, 검색어, 요청 본문 검증 실패 |
//! | `UserNotFound` | 404 Not Found | 사용자 없음 |
//! | `RouteNotFound` | 404 Not Found | 등록되지 않은 경로 |
//! | `DuplicateEmail` | 409 Conflict | 저장소의 이메일 유니크 제약 위반 |
//! | `DatabaseError` | 500 Internal Server Error | 데이터베이스 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AtPath};
//!
//! async fn get_user(req: HttpRequest, id: web::Path<i64>) -> Result<HttpResponse, ApiError> {
//!     let user = service.get_user_by_id(Some(*id)).await.at(&req)?;
//!     Ok(HttpResponse::Ok().json(user))
//! }
//! ```

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::dto::common::ErrorResponse;

/// 500 응답에 사용하는 고정 메시지. 내부 원인은 로그에만 남깁니다.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// 애플리케이션 전역 에러 타입
///
/// 서비스와 저장소에서 발생할 수 있는 모든 실패를 분류합니다.
/// 분류된 도메인 에러(4xx)와 분류되지 않은 장애(5xx)를 구분합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 이메일 형식 오류 (400 Bad Request)
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// `details`에는 다중 필드 검증 실패 시 필드별 메시지가 모두 담깁니다.
    #[error("{message}")]
    InvalidInput {
        message: String,
        details: Vec<String>,
    },

    /// 사용자 없음 (404 Not Found)
    #[error("User not found with {field}: {value}")]
    UserNotFound { field: &'static str, value: String },

    /// 등록되지 않은 경로 (404 Not Found)
    #[error("No route for {method} {path}")]
    RouteNotFound { method: String, path: String },

    /// 이메일 중복 (409 Conflict)
    #[error("User already exists with email: {0}")]
    DuplicateEmail(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 단일 메시지 입력값 에러를 생성합니다.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        AppError::InvalidInput {
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn user_not_found_by_id(id: i64) -> Self {
        AppError::UserNotFound {
            field: "ID",
            value: id.to_string(),
        }
    }

    pub fn user_not_found_by_email(email: &str) -> Self {
        AppError::UserNotFound {
            field: "email",
            value: email.to_string(),
        }
    }

    /// 에러에 대응하는 HTTP 상태 코드
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidEmail(_) | AppError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            AppError::UserNotFound { .. } | AppError::RouteNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            AppError::DuplicateEmail(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 클라이언트에게 노출할 메시지
    ///
    /// 5xx 에러는 내부 정보를 숨기고 고정 메시지를 반환합니다.
    pub fn client_message(&self) -> String {
        if self.status_code().is_server_error() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }

    /// 필드별 상세 메시지 목록
    pub fn details(&self) -> Vec<String> {
        match self {
            AppError::InvalidInput { details, .. } => details.clone(),
            _ => Vec::new(),
        }
    }
}

impl From<ValidationErrors> for AppError {
    /// `validator` 검증 결과를 필드별 메시지 목록으로 변환합니다.
    ///
    /// 메시지는 필드명 순으로 정렬되며, 첫 번째 메시지가 대표 메시지가 됩니다.
    fn from(errors: ValidationErrors) -> Self {
        let mut details: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |error| match &error.message {
                    Some(message) => format!("{}: {}", field, message),
                    None => format!("{}: {}", field, error.code),
                })
            })
            .collect();
        details.sort();

        let message = details
            .first()
            .cloned()
            .unwrap_or_else(|| "Validation error".to_string());

        AppError::InvalidInput { message, details }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

/// HTTP 경계에서 사용하는 에러
///
/// [`AppError`]에 요청 경로와 실패 시각을 결합합니다.
/// `actix_web::ResponseError`를 구현하여 [`ErrorResponse`] JSON으로 응답합니다.
#[derive(Debug)]
pub struct ApiError {
    error: AppError,
    path: String,
    timestamp: DateTime<Utc>,
}

impl ApiError {
    pub fn new(error: AppError, path: impl Into<String>) -> Self {
        Self {
            error,
            path: path.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn from_request(error: AppError, req: &HttpRequest) -> Self {
        Self::new(error, req.path())
    }

    /// 응답 본문을 생성합니다.
    pub fn to_error_response(&self) -> ErrorResponse {
        let status = self.error.status_code();

        ErrorResponse::new(
            status,
            self.error.client_message(),
            self.error.details(),
            self.path.clone(),
            self.timestamp,
        )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.error, self.path)
    }
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.error.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.error.status_code();

        if status.is_server_error() {
            log::error!("{} {}: {}", status.as_u16(), self.path, self.error);
        } else {
            log::warn!("{} {}: {}", status.as_u16(), self.path, self.error);
        }

        HttpResponse::build(status).json(self.to_error_response())
    }
}

/// `AppResult`에 요청 경로를 붙여 핸들러 반환 타입으로 바꾸는 확장 trait
pub trait AtPath<T> {
    fn at(self, req: &HttpRequest) -> Result<T, ApiError>;
}

impl<T> AtPath<T> for AppResult<T> {
    fn at(self, req: &HttpRequest) -> Result<T, ApiError> {
        self.map_err(|error| ApiError::from_request(error, req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;
    use validator::Validate;

    #[test]
    fn test_invalid_email_maps_to_bad_request() {
        let error = AppError::InvalidEmail("invalid-email".to_string());

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "Invalid email format: invalid-email");
    }

    #[test]
    fn test_user_not_found_message() {
        let error = AppError::user_not_found_by_id(42);

        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(error.to_string(), "User not found with ID: 42");

        let error = AppError::user_not_found_by_email("a@b.com");
        assert_eq!(error.to_string(), "User not found with email: a@b.com");
    }

    #[test]
    fn test_duplicate_email_maps_to_conflict() {
        let error = AppError::DuplicateEmail("a@b.com".to_string());
        assert_eq!(error.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_server_errors_hide_internal_message() {
        let error = AppError::DatabaseError("connection refused at 10.0.0.3".to_string());

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.client_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_validation_errors_keep_every_field_message() {
        #[derive(Validate)]
        struct Sample {
            #[validate(length(min = 1, message = "Name is required"))]
            name: String,
            #[validate(range(min = 1, message = "Age must be positive"))]
            age: i32,
        }

        let errors = Sample {
            name: String::new(),
            age: 0,
        }
        .validate()
        .unwrap_err();

        let error = AppError::from(errors);
        assert_eq!(
            error.details(),
            vec![
                "age: Age must be positive".to_string(),
                "name: Name is required".to_string(),
            ]
        );
        assert_eq!(error.to_string(), "age: Age must be positive");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }

    #[actix_web::test]
    async fn test_api_error_response_body() {
        let error = ApiError::new(AppError::user_not_found_by_id(7), "/api/v1/users/7");
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["status"], 404);
        assert_eq!(json["error"], "Not Found");
        assert_eq!(json["message"], "User not found with ID: 7");
        assert_eq!(json["path"], "/api/v1/users/7");
        assert!(json["errors"].as_array().unwrap().is_empty());
        assert!(json["timestamp"].is_string());
    }
}
