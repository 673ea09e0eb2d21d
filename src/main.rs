//! 사용자 디렉터리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 사용자 저장소와 서비스를 초기화합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use user_directory_service::config::{
    RateLimitConfig, ServerConfig, StorageBackend, StorageConfig,
};
use user_directory_service::db::Database;
use user_directory_service::errors::AppResult;
use user_directory_service::repositories::users::{
    InMemoryUserRepository, UserRepository, UserStore,
};
use user_directory_service::routes::configure_all_routes;
use user_directory_service::services::users::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화 (RUST_LOG는 환경 파일에서 올 수 있음)
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    let env_file = load_env_file(&profile);
    init_logging();

    match env_file {
        Ok(file) => info!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => warn!("[{}] 환경 파일 로드 실패: {}", profile, e),
    }

    info!("🚀 사용자 디렉터리 서비스 시작중...");

    let user_store = initialize_user_store().await.map_err(|e| {
        error!("❌ 저장소 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    let user_service = web::Data::new(UserService::new(user_store));

    info!("✅ 사용자 서비스 초기화 완료");

    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(user_service: web::Data<UserService>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();
    let allowed_origins = ServerConfig::cors_allowed_origins();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/api/v1/users/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("잘못된 Rate Limiting 설정"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_service.clone())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드하고 로드된 파일 이름을 반환합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file(profile: &str) -> Result<&'static str, dotenv::Error> {
    match profile {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=user_directory_service::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 설정된 백엔드에 맞는 사용자 저장소를 생성합니다
///
/// MongoDB 백엔드는 연결 확인과 인덱스 생성까지 마친 뒤 반환합니다.
async fn initialize_user_store() -> AppResult<Arc<dyn UserStore>> {
    match StorageConfig::backend() {
        StorageBackend::Memory => {
            info!("💾 메모리 사용자 저장소 사용 (재시작 시 데이터 초기화)");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Arc::new(Database::new().await?);
            let repository = UserRepository::new(database);
            repository.create_indexes().await?;

            Ok(Arc::new(repository))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`에 지정된 Origin만 허용합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_profile_file_is_reported() {
        assert!(load_env_file("prod").is_err());
    }
}
