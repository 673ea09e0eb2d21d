//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserStore`] trait 뒤에 두 가지 구현체를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserRepository::new());
//! let user = store.find_by_email_ignore_case("user@example.com").await?;
//! ```

pub mod memory_repo;
pub mod user_repo;
pub mod user_store;

pub use memory_repo::InMemoryUserRepository;
pub use user_repo::UserRepository;
pub use user_store::UserStore;

#[cfg(test)]
pub use user_store::MockUserStore;
