//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 MongoDB 데이터 액세스 계층입니다.
//!
//! ## 특징
//!
//! - **정수 ID**: `counters` 컬렉션의 원자적 증가로 1부터 순차 할당
//! - **대소문자 무시 유니크 이메일**: collation(strength 2) 유니크 인덱스
//! - **부분 문자열 검색**: 이스케이프된 정규식으로 이름 검색

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, info};
use mongodb::{
    Collection, IndexModel,
    bson::{Bson, Document, doc},
    error::{ErrorKind, WriteFailure},
    options::{
        Collation, CollationStrength, FindOneAndUpdateOptions, IndexOptions, ReturnDocument,
    },
};

use crate::db::Database;
use crate::domain::entities::users::{User, UserStatus};
use crate::errors::{AppError, AppResult};
use crate::repositories::users::user_store::UserStore;

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

const USERS_COLLECTION: &str = "users";
const COUNTERS_COLLECTION: &str = "counters";

/// 사용자 데이터 액세스 리포지토리
///
/// ## 저장 구조
///
/// - **컬렉션명**: `users`
/// - **문서 `_id`**: `i64` 사용자 ID
/// - **인덱스**: email(unique, case-insensitive), name
///
/// ## 에러 처리
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **DuplicateEmail**: 이메일 유니크 인덱스 위반 (E11000)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let database = Arc::new(Database::new().await?);
/// let repo = UserRepository::new(database);
/// repo.create_indexes().await?;
///
/// let created = repo.insert(User::new("john@example.com".into(), "John".into())).await?;
/// let found = repo.find_by_email_ignore_case("JOHN@EXAMPLE.COM").await?;
/// ```
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(USERS_COLLECTION)
    }

    /// 다음 사용자 ID를 원자적으로 할당합니다.
    ///
    /// `counters` 컬렉션의 `{ _id: "users" }` 문서를 `$inc`하며,
    /// 문서가 없으면 upsert로 생성되어 첫 ID는 1이 됩니다.
    async fn next_id(&self) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .db
            .get_database()
            .collection::<Document>(COUNTERS_COLLECTION)
            .find_one_and_update(
                doc! { "_id": USERS_COLLECTION },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(|| AppError::DatabaseError("사용자 ID 카운터 생성 실패".to_string()))?;

        match counter.get("seq") {
            Some(Bson::Int64(seq)) => Ok(*seq),
            Some(Bson::Int32(seq)) => Ok(i64::from(*seq)),
            other => Err(AppError::DatabaseError(format!(
                "잘못된 사용자 ID 카운터 값: {:?}",
                other
            ))),
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 1. **이메일 유니크 인덱스**: collation `en`/strength 2로 대소문자 무시
    /// 2. **이름 인덱스**: 이름 검색 보조
    ///
    /// 이미 대소문자만 다른 중복 이메일이 존재하면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let collection = self.collection();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique_ci".to_string())
                    .collation(email_collation())
                    .build(),
            )
            .build();

        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder().name("name_asc".to_string()).build())
            .build();

        collection
            .create_indexes([email_index, name_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ users 컬렉션 인덱스 준비 완료");
        Ok(())
    }

    async fn find_many(&self, filter: Document) -> AppResult<Vec<User>> {
        self.collection()
            .find(filter)
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

/// 중복 키 에러는 `DuplicateEmail`로, 나머지는 `DatabaseError`로 변환합니다.
fn map_write_error(error: mongodb::error::Error, email: &str) -> AppError {
    if is_duplicate_key(&error) {
        AppError::DuplicateEmail(email.to_string())
    } else {
        AppError::DatabaseError(error.to_string())
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

/// 이메일 유니크 인덱스와 조회가 공유하는 collation (대소문자 무시)
fn email_collation() -> Collation {
    Collation::builder()
        .locale("en".to_string())
        .strength(CollationStrength::Secondary)
        .build()
}

/// `email_collation`과 함께 실행해야 인덱스를 타고 대소문자를 무시합니다.
fn email_filter(email: &str) -> Document {
    doc! { "email": email }
}

fn name_filter(name: &str, status: Option<UserStatus>) -> Document {
    let mut filter = doc! {
        "name": {
            "$regex": regex::escape(name),
            "$options": "i",
        }
    };

    if let Some(status) = status {
        filter.insert("status", status.as_str());
    }

    filter
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email_ignore_case(&self, email: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(email_filter(email))
            .collation(email_collation())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_name_containing(
        &self,
        name: &str,
        status: Option<UserStatus>,
    ) -> AppResult<Vec<User>> {
        self.find_many(name_filter(name, status)).await
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.find_many(doc! {}).await
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let id = self.next_id().await?;
        user.id = Some(id);

        self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| map_write_error(e, &user.email))?;

        debug!("사용자 문서 저장: {}", id);
        Ok(user)
    }

    async fn update(&self, user: User) -> AppResult<Option<User>> {
        let Some(id) = user.id else {
            return Ok(None);
        };

        let result = self
            .collection()
            .replace_one(doc! { "_id": id }, &user)
            .await
            .map_err(|e| map_write_error(e, &user.email))?;

        if result.matched_count == 0 {
            Ok(None)
        } else {
            Ok(Some(user))
        }
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        let count = self
            .collection()
            .count_documents(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_lookup_is_exact_match_under_index_collation() {
        let filter = email_filter("A.b+c@Example.com");
        assert_eq!(filter, doc! { "email": "A.b+c@Example.com" });

        let collation = email_collation();
        assert_eq!(collation.locale, "en");
        assert!(matches!(
            collation.strength,
            Some(CollationStrength::Secondary)
        ));
    }

    #[test]
    fn test_name_filter_adds_status_only_when_requested() {
        let filter = name_filter("Jo(hn", None);
        assert_eq!(
            filter.get_document("name").unwrap().get_str("$regex").unwrap(),
            r"Jo\(hn"
        );
        assert!(!filter.contains_key("status"));

        let filter = name_filter("john", Some(UserStatus::Active));
        assert_eq!(filter.get_str("status").unwrap(), "ACTIVE");
    }
}
