//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 저장소 백엔드, 서버, 요청 제한 관련 설정을 관리합니다.

use std::env;

use log::warn;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 프로덕션 환경 (스테이징 포함)
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::parse(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            _ => Environment::Production,
        }
    }

    /// 환경별 기본 저장소 백엔드
    ///
    /// 테스트 환경은 외부 의존성 없이 동작하도록 메모리 저장소를 사용합니다.
    pub fn default_storage_backend(&self) -> StorageBackend {
        match self {
            Environment::Test => StorageBackend::Memory,
            _ => StorageBackend::MongoDb,
        }
    }

    /// `CORS_ALLOWED_ORIGINS` 미설정 시 허용할 Origin 목록
    ///
    /// 프로덕션은 명시적으로 설정된 Origin만 허용합니다.
    pub fn default_cors_origins(&self) -> Vec<String> {
        match self {
            Environment::Production => Vec::new(),
            Environment::Development | Environment::Test => vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:8080".to_string(),
                "http://127.0.0.1:8080".to_string(),
            ],
        }
    }
}

/// 사용자 저장소 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// MongoDB `users` 컬렉션
    MongoDb,
    /// 프로세스 메모리 (재시작 시 초기화)
    Memory,
}

impl StorageBackend {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mongodb" | "mongo" => Some(StorageBackend::MongoDb),
            "memory" | "in-memory" | "inmemory" => Some(StorageBackend::Memory),
            _ => None,
        }
    }
}

/// 저장소 선택 설정
pub struct StorageConfig;

impl StorageConfig {
    /// 사용할 저장소 백엔드를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `STORAGE_BACKEND`: `mongodb` | `memory` (미설정 시 환경별 기본값)
    pub fn backend() -> StorageBackend {
        match env::var("STORAGE_BACKEND") {
            Ok(raw) => StorageBackend::parse(&raw).unwrap_or_else(|| {
                warn!("알 수 없는 STORAGE_BACKEND 값: {}. 환경 기본값 사용", raw);
                Environment::current().default_storage_backend()
            }),
            Err(_) => Environment::current().default_storage_backend(),
        }
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URI. 기본값: `mongodb://localhost:27017`
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 데이터베이스 이름. 기본값: `user_directory_dev`
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "user_directory_dev".to_string())
    }

    /// MongoDB 클라이언트 애플리케이션 이름 (모니터링 및 로깅용)
    pub fn app_name() -> String {
        env::var("MONGODB_APP_NAME").unwrap_or_else(|_| "user_directory".to_string())
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "127.0.0.1")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 워커 스레드 수 (기본값: 4)
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|workers| *workers > 0)
            .unwrap_or(4)
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    /// CORS 허용 Origin 목록
    ///
    /// - `CORS_ALLOWED_ORIGINS`: 쉼표로 구분된 Origin 목록 (미설정 시 환경별 기본값)
    pub fn cors_allowed_origins() -> Vec<String> {
        match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(raw) => parse_origins(&raw),
            Err(_) => Environment::current().default_cors_origins(),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// ```bash
    /// # .env.dev
    /// RATE_LIMIT_PER_SECOND=20
    /// RATE_LIMIT_BURST_SIZE=40
    /// ```
    pub fn load() -> Self {
        Self::from_values(
            env::var("RATE_LIMIT_PER_SECOND").ok().as_deref(),
            env::var("RATE_LIMIT_BURST_SIZE").ok().as_deref(),
        )
    }

    /// 원시 문자열 값에서 설정을 만듭니다. 파싱 실패나 0은 기본값으로 대체됩니다.
    pub fn from_values(per_second: Option<&str>, burst_size: Option<&str>) -> Self {
        let per_second = match per_second.map(str::parse::<u64>) {
            Some(Ok(value)) if value > 0 => value,
            Some(_) => {
                warn!("RATE_LIMIT_PER_SECOND 파싱 실패. 기본값 100 사용");
                100
            }
            None => 100,
        };

        let burst_size = match burst_size.map(str::parse::<u32>) {
            Some(Ok(value)) if value > 0 => value,
            Some(_) => {
                warn!("RATE_LIMIT_BURST_SIZE 파싱 실패. 기본값 200 사용");
                200
            }
            None => 200,
        };

        Self {
            per_second,
            burst_size,
        }
    }
}
