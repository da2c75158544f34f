//! 계정 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다. MongoDB 연결을 설정하고
//! 컨트롤러를 조립한 뒤 회원가입/로그인 API를 제공합니다.

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::info;
use account_service_backend::config::{DatabaseConfig, ServerConfig};
use account_service_backend::core::AppControllers;
use account_service_backend::db::Database;
use account_service_backend::repositories::AccountMongoRepository;
use account_service_backend::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 계정 서비스 시작중...");

    let database = initialize_database().await;

    let controllers = AppControllers::new(&database);

    info!("✅ 모든 컨트롤러가 성공적으로 조립되었습니다!");

    let result = start_http_server(controllers).await;

    database.shutdown().await;

    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(controllers: AppControllers) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/signup, http://{}/api/login", bind_address, bind_address);

    let controllers = web::Data::new(controllers);

    HttpServer::new(move || {
        App::new()
            .app_data(controllers.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));

    info!("Current profile: {}", std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string()));
}

/// MongoDB 연결과 인덱스를 초기화합니다
///
/// # Panics
///
/// * MongoDB 연결 실패 시
/// * `email_unique` 인덱스 생성 실패 시 (예: 기존 데이터의 중복 이메일)
async fn initialize_database() -> Database {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::connect(&DatabaseConfig::uri(), &DatabaseConfig::database_name())
        .await
        .expect("데이터베이스 연결 실패");

    // 이메일 유니크 인덱스 없이 가입을 받지 않는다
    AccountMongoRepository::new(&database)
        .create_indexes()
        .await
        .expect("accounts 인덱스 생성 실패");

    database
}
