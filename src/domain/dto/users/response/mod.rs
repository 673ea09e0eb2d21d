//! # 사용자 관련 응답 DTO 모듈
//!
//! 비즈니스 로직 처리 결과를 클라이언트에게 일관된 형태로 전달합니다.
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "id": 1,
//!   "email": "test@example.com",
//!   "name": "Test User",
//!   "phone": "+1234567890",
//!   "department": null,
//!   "address": "123 Test Street",
//!   "city": "Test City",
//!   "state": null,
//!   "zipCode": null,
//!   "country": "Test Country",
//!   "status": "ACTIVE",
//!   "createdAt": "2024-01-01T10:00:00",
//!   "updatedAt": "2024-01-01T10:00:00"
//! }
//! ```

pub mod user_response;

pub use user_response::UserResponse;
