//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 사용자 디렉터리의 데이터 모델을 담당합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities     - 저장소와 매핑되는 User 엔티티
//! └── dto          - 요청/응답/에러 본문
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! 엔티티는 저장소가 소유하고, 서비스는 요청 단위 복사본을
//! [`dto::users::UserResponse`]로 투영하여 반환합니다.

pub mod dto;
pub mod entities;
