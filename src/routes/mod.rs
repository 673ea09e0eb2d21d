//! API 라우트 설정 모듈
//!
//! 사용자 디렉터리 엔드포인트와 추출기(Query/Path/Json) 에러 처리를 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{HttpRequest, error, web};

use crate::errors::{ApiError, AppError};
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 추출기 에러 핸들러, 사용자 라우트, 기본 404 핸들러를 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);
    configure_user_routes(cfg);

    cfg.default_service(web::to(handlers::users::route_not_found));
}

/// 추출 실패를 [`ApiError`] JSON 응답으로 변환하도록 설정합니다
///
/// - 쿼리 파싱 실패: `Invalid query parameters`
/// - 경로 타입 불일치: `Invalid parameter type for 'id'`
/// - JSON 본문 오류: `Malformed request body`
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, req| {
        extractor_error("Invalid query parameters", err.to_string(), req)
    }))
    .app_data(web::PathConfig::default().error_handler(|err, req| {
        extractor_error("Invalid parameter type for 'id'", err.to_string(), req)
    }))
    .app_data(web::JsonConfig::default().error_handler(|err, req| {
        extractor_error("Malformed request body", err.to_string(), req)
    }));
}

fn extractor_error(message: &str, cause: String, req: &HttpRequest) -> error::Error {
    log::debug!("요청 파라미터 추출 실패 ({}): {}", req.path(), cause);

    ApiError::from_request(AppError::invalid_input(message), req).into()
}

/// 사용자 관련 라우트를 설정합니다
///
/// 고정 경로(`/health`, `/search`, `/email/{email}`)를 `/{id}`보다 먼저 등록해야
/// 정수 경로 파라미터로 잘못 매칭되지 않습니다.
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Test User","email":"test@example.com"}'
///
/// curl "http://localhost:8080/api/v1/users?email=TEST@EXAMPLE.COM"
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::health)
            .service(handlers::users::search_active_users)
            .service(handlers::users::search_users)
            .service(handlers::users::get_user_by_email_path)
            .service(handlers::users::list_or_find_by_email)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}
