//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! MongoDB 문서와 직접 매핑되는 데이터 구조체들을 포함합니다.
//!
//! ## 저장 형태
//!
//! ```json
//! {
//!   "_id": 1,
//!   "email": "test@example.com",
//!   "name": "Test User",
//!   "phone": "+1234567890",
//!   "city": "Test City",
//!   "status": "ACTIVE",
//!   "created_at": "2024-01-01T00:00:00Z",
//!   "updated_at": "2024-01-01T00:00:00Z"
//! }
//! ```
//!
//! - `_id`는 `counters` 컬렉션의 시퀀스로 발급되는 양의 정수입니다.
//! - 값이 없는 선택 필드는 저장하지 않습니다.

pub mod users;
