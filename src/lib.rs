//! 사용자 디렉터리 서비스 백엔드
//!
//! 사용자 레코드를 조회, 검색, 생성, 수정, 삭제하는 REST API 서비스입니다.
//! 이메일 형식 검증과 대소문자를 무시하는 이메일 조회, 그리고
//! 도메인 에러를 일관된 HTTP 에러 본문으로 변환하는 파이프라인이 핵심입니다.
//!
//! # Features
//!
//! - **사용자 조회**: ID, 이메일(경로/쿼리), 전체 목록
//! - **이름 검색**: 부분 문자열, 대소문자 무시, 활성 사용자 필터
//! - **사용자 관리**: 생성, 전체 수정, 삭제
//! - **MongoDB**: 사용자 데이터 영구 저장 (메모리 저장소 선택 가능)
//! - **에러 응답**: 상태 코드, 메시지, 필드별 상세, 요청 경로, 시각
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 (/api/v1/users)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, ApiError 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증 및 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore trait
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB / Memory│ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_directory_service::repositories::users::InMemoryUserRepository;
//! use user_directory_service::services::users::UserService;
//!
//! let user_service = UserService::new(Arc::new(InMemoryUserRepository::new()));
//! let user = user_service.get_user_by_email(Some("test@example.com")).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
