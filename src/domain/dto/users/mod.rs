//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   └── user_request.rs    # 생성/수정 공통 요청
//! └── response/
//!     └── user_response.rs   # 사용자 투영
//! ```

pub mod request;
pub mod response;

pub use request::UserRequest;
pub use response::UserResponse;
