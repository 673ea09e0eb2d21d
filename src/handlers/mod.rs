//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근 (UserStore)          ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities - 도메인 모델                         ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, ApiError>`를 반환합니다.
//! 서비스의 `AppResult`는 `.at(&req)`로 요청 경로를 붙여 변환합니다.
//!
//! ```rust,ignore
//! #[get("/{id}")]
//! pub async fn get_user(
//!     req: HttpRequest,
//!     service: web::Data<UserService>,
//!     id: web::Path<i64>,
//! ) -> Result<HttpResponse, ApiError> {
//!     let user = service.get_user_by_id(Some(*id)).await.at(&req)?;
//!     Ok(HttpResponse::Ok().json(user))
//! }
//! ```

pub mod users;
