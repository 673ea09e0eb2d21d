//! 메모리 기반 사용자 저장소
//!
//! 외부 데이터베이스 없이 동작하는 [`UserStore`] 구현체입니다.
//! 통합 테스트와 `STORAGE_BACKEND=memory` 실행 모드에서 사용합니다.
//! 프로세스가 종료되면 모든 데이터가 사라집니다.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use log::debug;

use crate::domain::entities::users::{User, UserStatus};
use crate::errors::{AppError, AppResult};
use crate::repositories::users::user_store::UserStore;

/// ID 순으로 정렬된 맵에 사용자를 보관하는 저장소
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<i64, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, BTreeMap<i64, User>>> {
        self.users
            .read()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금 실패".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, BTreeMap<i64, User>>> {
        self.users
            .write()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금 실패".to_string()))
    }

    fn email_taken(users: &BTreeMap<i64, User>, email: &str, except: Option<i64>) -> bool {
        users
            .values()
            .any(|user| user.id != except && user.email_matches(email))
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn find_by_email_ignore_case(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .read()?
            .values()
            .find(|user| user.email_matches(email))
            .cloned())
    }

    async fn find_by_name_containing(
        &self,
        name: &str,
        status: Option<UserStatus>,
    ) -> AppResult<Vec<User>> {
        Ok(self
            .read()?
            .values()
            .filter(|user| user.name_contains(name))
            .filter(|user| status.is_none_or(|status| user.status == status))
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let mut users = self.write()?;

        if Self::email_taken(&users, &user.email, None) {
            return Err(AppError::DuplicateEmail(user.email));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        user.id = Some(id);
        users.insert(id, user.clone());

        debug!("메모리 저장소 사용자 추가: {}", id);
        Ok(user)
    }

    async fn update(&self, user: User) -> AppResult<Option<User>> {
        let Some(id) = user.id else {
            return Ok(None);
        };

        let mut users = self.write()?;

        if !users.contains_key(&id) {
            return Ok(None);
        }

        if Self::email_taken(&users, &user.email, Some(id)) {
            return Err(AppError::DuplicateEmail(user.email));
        }

        users.insert(id, user.clone());
        Ok(Some(user))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.write()?.remove(&id).is_some())
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.read()?.contains_key(&id))
    }
}
