//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용하며, 테스트와 로컬 실행을 위한
//! 메모리 저장소를 함께 제공합니다. 서비스는 `Arc<dyn UserStore>`로 주입받습니다.

pub mod users;
