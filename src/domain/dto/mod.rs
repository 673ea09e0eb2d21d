//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 설계 원칙
//!
//! - **명시적 인터페이스**: 요청/응답 JSON은 camelCase 필드명을 사용
//! - **유효성 검증 내장**: `validator` derive 규칙으로 필드별 검증
//! - **내부 표현과 분리**: Entity의 저장소 전용 필드(`_id` 등)는 노출하지 않음
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── users/
//! │   ├── request/        # UserRequest (생성/수정)
//! │   └── response/       # UserResponse
//! └── common/
//!     └── error_response.rs
//! ```

pub mod common;
pub mod users;
