//! 계정 서비스 백엔드
//!
//! Rust 기반의 계정 가입 및 로그인 서비스입니다.
//! 비밀번호는 bcrypt로 해싱되어 MongoDB에 저장되며,
//! 로그인에 성공하면 HS256 JWT 액세스 토큰을 발급합니다.
//!
//! # Features
//!
//! - **회원가입**: 필드 검증, 비밀번호 확인, 이메일 문법 검증 후 계정 생성
//! - **로그인**: 자격 증명 검증 후 액세스 토큰 발급 및 기록
//! - **에러 로그**: 5xx 응답의 원인을 `errors` 컬렉션에 기록
//! - **명시적 DI**: 팩토리 함수에서 생성자 주입으로 조립
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, actix 어댑터
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Middlewares   │ ← 에러 로그 데코레이터
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 컨트롤러 (입력 검증, 상태 코드)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 유스케이스 (계정 생성, 인증)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use account_service_backend::core::AppControllers;
//! use account_service_backend::routes::configure_all_routes;
//!
//! let controllers = web::Data::new(AppControllers::new(&database));
//! let app = App::new().app_data(controllers).configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
