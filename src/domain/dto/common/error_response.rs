//! 에러 응답 DTO

use actix_web::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 모든 실패 응답의 본문
///
/// ```json
/// {
///   "status": 400,
///   "error": "Bad Request",
///   "message": "name: Name is required",
///   "errors": ["email: Email should be valid", "name: Name is required"],
///   "path": "/api/v1/users",
///   "timestamp": "2024-01-01T12:00:00"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub error: String,
    pub message: String,
    #[serde(default)]
    pub errors: Vec<String>,
    pub path: String,
    #[serde(with = "crate::utils::date_format")]
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(
        status: StatusCode,
        message: String,
        errors: Vec<String>,
        path: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            status: status.as_u16(),
            error: status
                .canonical_reason()
                .unwrap_or("Unknown Error")
                .to_string(),
            message,
            errors,
            path,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_follows_status() {
        let response = ErrorResponse::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "boom".to_string(),
            Vec::new(),
            "/api/v1/users".to_string(),
            Utc::now(),
        );

        assert_eq!(response.status, 500);
        assert_eq!(response.error, "Internal Server Error");
    }
}
