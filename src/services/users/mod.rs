//! 사용자 관리 서비스 모듈
//!
//! 사용자 디렉터리의 비즈니스 로직을 담당합니다.
//!
//! # Features
//!
//! - 이메일 형식 검증 후 대소문자 무시 조회
//! - 이름 부분 검색 (전체 / 활성 사용자)
//! - 사용자 생성, 전체 수정, 삭제
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(store);
//! let users = user_service.find_users_by_name(Some("john")).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
