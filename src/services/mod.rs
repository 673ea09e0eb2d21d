//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 trait 객체를 주입받아 생성되며, 핸들러에는
//! `actix_web::web::Data`로 공유됩니다.

pub mod users;
