//! # 사용자 관리 서비스 구현
//!
//! 사용자 디렉터리의 조회, 검색, 생성, 수정, 삭제 비즈니스 로직을 구현합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         UserService                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │   User Query    │  │   Name Search   │  │    Mutation     │  │
//! │  │ • By ID/Email   │  │ • Blank Check   │  │ • DTO Validate  │  │
//! │  │ • Email Format  │  │ • Length Limit  │  │ • Full Replace  │  │
//! │  │ • Entity to DTO │  │ • Active Filter │  │ • Delete by ID  │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                 │
//!                                 ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Arc<dyn UserStore>                          │
//! │ • UserRepository (MongoDB)                                      │
//! │ • InMemoryUserRepository                                        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 입력 검증 원칙
//!
//! - 형식이 잘못된 입력은 저장소에 도달하지 않습니다.
//! - 이메일 중복 검사는 저장소의 유니크 제약이 담당합니다.
//! - "찾을 수 없음"은 항상 `AppError::UserNotFound`로 표현합니다.

use std::sync::Arc;

use log::{error, info, warn};
use validator::Validate;

use crate::domain::dto::users::request::{NAME_MAX_LENGTH, UserRequest};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::{User, UserStatus};
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserStore;
use crate::utils::email_validator::is_valid_email;
use crate::utils::string_utils::require_trimmed;

const INVALID_ID_MESSAGE: &str = "User ID must be a positive number";
const BLANK_NAME_MESSAGE: &str = "Name cannot be blank or null";
const NAME_TOO_LONG_MESSAGE: &str = "Name must not exceed 100 characters";

/// 사용자 관리 비즈니스 로직 서비스
///
/// `actix_web::web::Data`로 감싸 모든 워커가 하나의 인스턴스를 공유합니다.
/// 저장소는 생성 시점에 주입되며, 서비스 자체는 상태를 갖지 않습니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use crate::repositories::users::InMemoryUserRepository;
/// use crate::services::users::UserService;
///
/// let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
/// let user = service.get_user_by_email(Some("TEST@EXAMPLE.COM")).await?;
/// ```
pub struct UserService {
    /// 사용자 저장소 (MongoDB 또는 메모리)
    user_store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Self { user_store }
    }

    /// 이메일로 사용자 조회
    ///
    /// 앞뒤 공백을 제거한 이메일을 대소문자 구분 없이 비교합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidEmail` - 값이 없거나 이메일 형식이 아닌 경우 (저장소 미조회)
    /// * `AppError::UserNotFound` - 일치하는 사용자가 없는 경우
    pub async fn get_user_by_email(&self, raw: Option<&str>) -> AppResult<UserResponse> {
        let email = match raw {
            Some(raw) if is_valid_email(raw) => raw.trim(),
            Some(raw) => {
                warn!("⚠️ 잘못된 이메일 형식: {}", raw);
                return Err(AppError::InvalidEmail(raw.to_string()));
            }
            None => {
                warn!("⚠️ 이메일 파라미터 누락");
                return Err(AppError::InvalidEmail(String::new()));
            }
        };

        info!("이메일로 사용자 조회: {}", email);

        let user = self
            .user_store
            .find_by_email_ignore_case(email)
            .await?
            .ok_or_else(|| AppError::user_not_found_by_email(email))?;

        Ok(UserResponse::from(user))
    }

    /// ID로 사용자 조회
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidInput` - ID가 없거나 0 이하인 경우
    /// * `AppError::UserNotFound` - 해당 ID의 사용자가 없는 경우
    pub async fn get_user_by_id(&self, id: Option<i64>) -> AppResult<UserResponse> {
        let id = Self::require_positive_id(id)?;

        info!("ID로 사용자 조회: {}", id);

        let user = self
            .user_store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::user_not_found_by_id(id))?;

        Ok(UserResponse::from(user))
    }

    /// 이름에 검색어가 포함된 사용자 목록 (대소문자 무시)
    ///
    /// 결과가 없으면 빈 목록을 반환합니다.
    pub async fn find_users_by_name(&self, query: Option<&str>) -> AppResult<Vec<UserResponse>> {
        let name = Self::require_name_query(query)?;

        info!("이름으로 사용자 검색: {}", name);

        let users = self.user_store.find_by_name_containing(name, None).await?;
        Ok(Self::to_responses(users))
    }

    /// 활성 사용자 중 이름 검색
    pub async fn find_active_users_by_name(
        &self,
        query: Option<&str>,
    ) -> AppResult<Vec<UserResponse>> {
        let name = Self::require_name_query(query)?;

        info!("이름으로 활성 사용자 검색: {}", name);

        let users = self
            .user_store
            .find_by_name_containing(name, Some(UserStatus::Active))
            .await?;
        Ok(Self::to_responses(users))
    }

    pub async fn get_all_users(&self) -> AppResult<Vec<UserResponse>> {
        info!("전체 사용자 조회");

        let users = self.user_store.find_all().await?;
        Ok(Self::to_responses(users))
    }

    /// 새 사용자 생성
    ///
    /// # 처리 과정
    ///
    /// 1. **입력 검증**: 실패한 모든 필드 메시지를 `InvalidInput`에 담아 반환
    /// 2. **엔티티 생성**: 이름/이메일 공백 제거, 상태 기본값 `ACTIVE`
    /// 3. **영구 저장**: 저장소가 ID를 할당
    ///
    /// 이메일 중복은 저장소가 `AppError::DuplicateEmail`로 보고합니다.
    pub async fn create_user(&self, request: UserRequest) -> AppResult<UserResponse> {
        request.validate()?;

        info!("사용자 생성 요청: {}", request.email.trim());

        let created = self
            .user_store
            .insert(User::from_request(request))
            .await
            .inspect_err(|e| error!("❌ 사용자 생성 실패: {}", e))?;

        info!("✅ 사용자 생성 완료: ID {:?}", created.id);
        Ok(UserResponse::from(created))
    }

    /// 사용자 전체 정보 수정
    ///
    /// `id`와 `created_at`을 제외한 모든 필드를 요청 값으로 교체하고
    /// `updated_at`을 갱신합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidInput` - 잘못된 ID 또는 요청 검증 실패
    /// * `AppError::UserNotFound` - 해당 ID의 사용자가 없는 경우
    /// * `AppError::DuplicateEmail` - 다른 사용자가 같은 이메일을 사용 중인 경우
    pub async fn update_user(&self, id: i64, request: UserRequest) -> AppResult<UserResponse> {
        let id = Self::require_positive_id(Some(id))?;
        request.validate()?;

        info!("사용자 수정 요청: {}", id);

        let mut user = self
            .user_store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::user_not_found_by_id(id))?;

        user.apply_update(request);

        let updated = self
            .user_store
            .update(user)
            .await
            .inspect_err(|e| error!("❌ 사용자 수정 실패 (ID {}): {}", id, e))?
            .ok_or_else(|| AppError::user_not_found_by_id(id))?;

        info!("✅ 사용자 수정 완료: {}", id);
        Ok(UserResponse::from(updated))
    }

    /// 사용자 삭제
    ///
    /// * `Ok(true)` - 삭제됨
    /// * `Ok(false)` - 해당 ID의 사용자가 없음
    pub async fn delete_user(&self, id: i64) -> AppResult<bool> {
        let id = Self::require_positive_id(Some(id))?;

        if !self.user_store.exists_by_id(id).await? {
            warn!("⚠️ 삭제할 사용자 없음: {}", id);
            return Ok(false);
        }

        let deleted = self.user_store.delete_by_id(id).await?;

        if deleted {
            info!("🗑️ 사용자 삭제 완료: {}", id);
        }

        Ok(deleted)
    }

    fn require_positive_id(id: Option<i64>) -> AppResult<i64> {
        match id {
            Some(id) if id > 0 => Ok(id),
            _ => Err(AppError::invalid_input(INVALID_ID_MESSAGE)),
        }
    }

    fn require_name_query(query: Option<&str>) -> AppResult<&str> {
        let name = require_trimmed(query, BLANK_NAME_MESSAGE)?;

        if name.chars().count() > NAME_MAX_LENGTH {
            return Err(AppError::invalid_input(NAME_TOO_LONG_MESSAGE));
        }

        Ok(name)
    }

    fn to_responses(users: Vec<User>) -> Vec<UserResponse> {
        users.into_iter().map(UserResponse::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::{InMemoryUserRepository, MockUserStore};

    fn request(name: &str, email: &str) -> UserRequest {
        UserRequest {
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            department: None,
            address: None,
            city: None,
            state: None,
            zip_code: None,
            country: None,
            status: UserStatus::Active,
        }
    }

    fn in_memory_service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::new()))
    }

    /// 저장소가 한 번도 호출되지 않아야 하는 서비스
    fn untouched_store_service() -> UserService {
        let mut store = MockUserStore::new();
        store.expect_find_by_email_ignore_case().never();
        store.expect_find_by_id().never();
        store.expect_find_by_name_containing().never();
        store.expect_insert().never();
        store.expect_update().never();
        store.expect_delete_by_id().never();
        store.expect_exists_by_id().never();
        UserService::new(Arc::new(store))
    }

    #[actix_web::test]
    async fn test_invalid_email_never_reaches_store() {
        let service = untouched_store_service();

        for raw in [None, Some(""), Some("   "), Some("invalid-email"), Some("a@b")] {
            let result = service.get_user_by_email(raw).await;
            assert!(
                matches!(result, Err(AppError::InvalidEmail(_))),
                "expected InvalidEmail for {:?}",
                raw
            );
        }
    }

    #[actix_web::test]
    async fn test_email_lookup_trims_and_forwards_to_store() {
        let mut store = MockUserStore::new();
        store
            .expect_find_by_email_ignore_case()
            .withf(|email| email.to_string() == "TEST@EXAMPLE.COM")
            .times(1)
            .returning(|_| {
                let mut user = User::new("test@example.com".to_string(), "Test User".to_string());
                user.id = Some(1);
                Ok(Some(user))
            });

        let service = UserService::new(Arc::new(store));
        let response = service
            .get_user_by_email(Some("  TEST@EXAMPLE.COM  "))
            .await
            .unwrap();

        assert_eq!(response.id, 1);
        assert_eq!(response.email, "test@example.com");
    }

    #[actix_web::test]
    async fn test_email_not_found() {
        let service = in_memory_service();

        let error = service
            .get_user_by_email(Some("notfound@example.com"))
            .await
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "User not found with email: notfound@example.com"
        );
    }

    #[actix_web::test]
    async fn test_invalid_ids_are_rejected_before_store() {
        let service = untouched_store_service();

        for id in [None, Some(0), Some(-1)] {
            let error = service.get_user_by_id(id).await.unwrap_err();
            assert_eq!(error.to_string(), INVALID_ID_MESSAGE);
        }

        assert!(service.delete_user(0).await.is_err());
        assert!(service.update_user(-5, request("A", "a@b.com")).await.is_err());
    }

    #[actix_web::test]
    async fn test_name_search_validation() {
        let service = untouched_store_service();

        let error = service.find_users_by_name(None).await.unwrap_err();
        assert_eq!(error.to_string(), BLANK_NAME_MESSAGE);

        let error = service.find_active_users_by_name(Some("  ")).await.unwrap_err();
        assert_eq!(error.to_string(), BLANK_NAME_MESSAGE);

        let too_long = "a".repeat(NAME_MAX_LENGTH + 1);
        let error = service.find_users_by_name(Some(&too_long)).await.unwrap_err();
        assert_eq!(error.to_string(), NAME_TOO_LONG_MESSAGE);
    }

    #[actix_web::test]
    async fn test_invalid_request_never_reaches_store() {
        let service = untouched_store_service();

        let error = service
            .create_user(request("   ", "invalid-email"))
            .await
            .unwrap_err();

        assert_eq!(error.details().len(), 2);
    }

    #[actix_web::test]
    async fn test_create_search_and_list() {
        let service = in_memory_service();

        let first = service
            .create_user(request("  John Smith ", "john@example.com"))
            .await
            .unwrap();
        let mut inactive = request("Johnny Bravo", "johnny@example.com");
        inactive.status = UserStatus::Inactive;
        let second = service.create_user(inactive).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.name, "John Smith");
        assert_eq!(first.created_at, first.updated_at);

        assert_eq!(service.find_users_by_name(Some(" JOHN ")).await.unwrap().len(), 2);

        let active = service.find_active_users_by_name(Some("john")).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, 1);

        assert!(service.find_users_by_name(Some("zzz")).await.unwrap().is_empty());
        assert_eq!(service.get_all_users().await.unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_duplicate_email_surfaces_from_store() {
        let service = in_memory_service();
        service
            .create_user(request("Test User", "test@example.com"))
            .await
            .unwrap();

        let error = service
            .create_user(request("Other", "TEST@EXAMPLE.COM"))
            .await
            .unwrap_err();

        assert!(matches!(error, AppError::DuplicateEmail(_)));
    }

    #[actix_web::test]
    async fn test_update_replaces_fields_and_keeps_identity() {
        let service = in_memory_service();
        let created = service
            .create_user(request("Test User", "test@example.com"))
            .await
            .unwrap();

        let mut update = request("Updated User", "updated@example.com");
        update.city = Some("Seoul".to_string());
        let updated = service.update_user(created.id, update).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "Updated User");
        assert_eq!(updated.city.as_deref(), Some("Seoul"));

        let error = service
            .update_user(999, request("Nobody", "nobody@example.com"))
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "User not found with ID: 999");
    }

    #[actix_web::test]
    async fn test_delete_reports_whether_user_existed() {
        let service = in_memory_service();
        let created = service
            .create_user(request("Test User", "test@example.com"))
            .await
            .unwrap();

        assert!(service.delete_user(created.id).await.unwrap());
        assert!(!service.delete_user(created.id).await.unwrap());
        assert!(service.get_user_by_id(Some(created.id)).await.is_err());
    }
}
