//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 타입이 있는 접근자로 중앙집중식으로 관리합니다.
//! `.env` 파일은 `main`에서 `PROFILE`에 따라 로드됩니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # 저장소
//! export STORAGE_BACKEND="mongodb"         # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_directory"
//!
//! # 요청 제한 / CORS
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,http://localhost:8080"
//!
//! # 실행 환경
//! export ENVIRONMENT="production"  # development, test, staging, production
//! ```

pub mod data_config;

pub use data_config::*;
