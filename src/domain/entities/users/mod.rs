//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{User, UserStatus};
//!
//! let mut user = User::new("user@example.com".to_string(), "Display Name".to_string());
//! assert_eq!(user.status, UserStatus::Active);
//! ```

pub mod user;

pub use user::{User, UserStatus};
