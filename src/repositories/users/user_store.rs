//! 사용자 저장소 추상화
//!
//! 서비스 계층은 이 trait에만 의존하며, 실제 저장소는 실행 시점에 선택됩니다.
//!
//! - [`UserRepository`](super::user_repo::UserRepository): MongoDB `users` 컬렉션
//! - [`InMemoryUserRepository`](super::memory_repo::InMemoryUserRepository): 프로세스 메모리

use async_trait::async_trait;

use crate::domain::entities::users::{User, UserStatus};
use crate::errors::AppResult;

/// 사용자 영속성 계약
///
/// 모든 구현체는 다음을 보장해야 합니다.
///
/// - `insert`는 1부터 시작하는 단조 증가 ID를 할당합니다.
/// - 이메일은 대소문자 구분 없이 유일합니다. 위반 시 `AppError::DuplicateEmail`.
/// - 목록 조회 결과는 ID 오름차순입니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// 대소문자를 무시하고 이메일 전체가 일치하는 사용자를 찾습니다.
    async fn find_by_email_ignore_case(&self, email: &str) -> AppResult<Option<User>>;

    /// 이름에 `name`이 포함된 사용자 목록 (대소문자 무시)
    ///
    /// `status`가 주어지면 해당 상태의 사용자만 반환합니다.
    async fn find_by_name_containing(
        &self,
        name: &str,
        status: Option<UserStatus>,
    ) -> AppResult<Vec<User>>;

    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// 새 사용자를 저장하고 ID가 할당된 사용자를 반환합니다.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// 기존 레코드를 교체합니다. 해당 ID가 없으면 `None`.
    async fn update(&self, user: User) -> AppResult<Option<User>>;

    /// 삭제 여부를 반환합니다.
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;

    async fn exists_by_id(&self, id: i64) -> AppResult<bool>;
}
