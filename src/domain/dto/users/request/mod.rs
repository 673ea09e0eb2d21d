//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! `validator` 크레이트로 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (실패 시 400 "Malformed request body")
//! 2. **형식 검증**: 이메일, 길이 등 필드 규칙 (실패 시 400 + 필드별 메시지 목록)
//! 3. **저장소 제약**: 이메일 중복 (실패 시 409)

pub mod user_request;

pub use user_request::{UserRequest, NAME_MAX_LENGTH};
