//! # User Directory HTTP Handlers
//!
//! 사용자 디렉터리 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 핸들러는 파라미터 추출과 응답 직렬화만 담당하고,
//! 검증과 조회는 모두 [`UserService`]에 위임합니다.
//!
//! ## RESTful API
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/v1/users/health` | 헬스체크 (text/plain) | 200 |
//! | `GET` | `/api/v1/users/search?name=` | 이름 검색 | 200, 400 |
//! | `GET` | `/api/v1/users/search/active?name=` | 활성 사용자 이름 검색 | 200, 400 |
//! | `GET` | `/api/v1/users/email/{email}` | 이메일 조회 | 200, 400, 404 |
//! | `GET` | `/api/v1/users?email=` | 이메일 조회 (쿼리) | 200, 400, 404 |
//! | `GET` | `/api/v1/users` | 전체 목록 | 200 |
//! | `GET` | `/api/v1/users/{id}` | ID 조회 | 200, 400, 404 |
//! | `POST` | `/api/v1/users` | 사용자 생성 | 201, 400, 409 |
//! | `PUT` | `/api/v1/users/{id}` | 사용자 전체 수정 | 200, 400, 404, 409 |
//! | `DELETE` | `/api/v1/users/{id}` | 사용자 삭제 | 204, 400, 404 |
//!
//! ## 에러 응답
//!
//! 모든 실패는 [`ApiError`]를 통해 동일한 JSON 본문으로 응답합니다.
//!
//! ```json
//! {
//!   "status": 400,
//!   "error": "Bad Request",
//!   "message": "Invalid email format: invalid-email",
//!   "errors": [],
//!   "path": "/api/v1/users/email/invalid-email",
//!   "timestamp": "2024-01-01T12:00:00"
//! }
//! ```

use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use serde::Deserialize;

use crate::domain::dto::users::request::UserRequest;
use crate::errors::{ApiError, AppError, AtPath};
use crate::services::users::UserService;

/// `?email=` 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

/// `?name=` 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: Option<String>,
}

/// 서비스 상태 확인
///
/// ```bash
/// curl http://localhost:8080/api/v1/users/health
/// # User Service is running
/// ```
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("User Service is running")
}

/// 이름 검색
///
/// 이름에 검색어가 포함된 사용자 목록을 반환합니다 (대소문자 무시).
/// 결과가 없으면 빈 배열을 반환합니다.
///
/// ```bash
/// curl "http://localhost:8080/api/v1/users/search?name=john"
/// ```
#[get("/search")]
pub async fn search_users(
    req: HttpRequest,
    service: web::Data<UserService>,
    query: web::Query<NameQuery>,
) -> Result<HttpResponse, ApiError> {
    let users = service
        .find_users_by_name(query.name.as_deref())
        .await
        .at(&req)?;

    Ok(HttpResponse::Ok().json(users))
}

/// 활성 사용자 이름 검색
#[get("/search/active")]
pub async fn search_active_users(
    req: HttpRequest,
    service: web::Data<UserService>,
    query: web::Query<NameQuery>,
) -> Result<HttpResponse, ApiError> {
    let users = service
        .find_active_users_by_name(query.name.as_deref())
        .await
        .at(&req)?;

    Ok(HttpResponse::Ok().json(users))
}

/// 경로 파라미터로 이메일 조회
///
/// ```bash
/// curl http://localhost:8080/api/v1/users/email/TEST@EXAMPLE.COM
/// ```
#[get("/email/{email}")]
pub async fn get_user_by_email_path(
    req: HttpRequest,
    service: web::Data<UserService>,
    email: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user = service
        .get_user_by_email(Some(email.as_str()))
        .await
        .at(&req)?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 목록 또는 쿼리 이메일 조회
///
/// `email` 키가 있으면 이메일 조회를, 없으면 전체 목록을 반환합니다.
/// `?email=`처럼 값이 비어 있으면 400입니다.
#[get("")]
pub async fn list_or_find_by_email(
    req: HttpRequest,
    service: web::Data<UserService>,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse, ApiError> {
    match query.email.as_deref() {
        Some(email) => {
            let user = service.get_user_by_email(Some(email)).await.at(&req)?;
            Ok(HttpResponse::Ok().json(user))
        }
        None => {
            let users = service.get_all_users().await.at(&req)?;
            Ok(HttpResponse::Ok().json(users))
        }
    }
}

/// ID로 사용자 조회
#[get("/{id}")]
pub async fn get_user(
    req: HttpRequest,
    service: web::Data<UserService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user = service.get_user_by_id(Some(*id)).await.at(&req)?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 생성 핸들러
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "Test User",
///   "email": "test@example.com",
///   "phone": "+1234567890",
///   "status": "ACTIVE"
/// }
/// ```
///
/// # 응답
///
/// * `201 Created` - 생성된 사용자 (`id`, `createdAt`, `updatedAt` 포함)
/// * `400 Bad Request` - 검증 실패 (`errors`에 필드별 메시지)
/// * `409 Conflict` - 이메일 중복
#[post("")]
pub async fn create_user(
    req: HttpRequest,
    service: web::Data<UserService>,
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, ApiError> {
    let user = service
        .create_user(payload.into_inner())
        .await
        .at(&req)?;

    Ok(HttpResponse::Created().json(user))
}

/// 사용자 전체 정보 수정
///
/// 요청에 없는 선택 필드는 비워집니다.
#[put("/{id}")]
pub async fn update_user(
    req: HttpRequest,
    service: web::Data<UserService>,
    id: web::Path<i64>,
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, ApiError> {
    let user = service
        .update_user(*id, payload.into_inner())
        .await
        .at(&req)?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 삭제
///
/// * `204 No Content` - 삭제 완료
/// * `404 Not Found` - 해당 ID의 사용자 없음
#[delete("/{id}")]
pub async fn delete_user(
    req: HttpRequest,
    service: web::Data<UserService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();

    if service.delete_user(id).await.at(&req)? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(ApiError::from_request(AppError::user_not_found_by_id(id), &req))
    }
}

/// 등록되지 않은 경로에 대한 기본 핸들러
pub async fn route_not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::from_request(
        AppError::RouteNotFound {
            method: req.method().to_string(),
            path: req.path().to_string(),
        },
        &req,
    ))
}
