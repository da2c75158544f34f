//! 미들웨어 모듈
//!
//! 컨트롤러 파이프라인의 횡단 관심사를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### LogControllerDecorator
//! - 컨트롤러를 감싸 동일한 `Controller` 계약을 제공
//! - 5xx 응답의 원인 스택을 에러 로그 저장소(`errors` 컬렉션)에 기록
//! - 로그 저장 실패는 경고로만 남기고 응답은 그대로 반환
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::middlewares::LogControllerDecorator;
//!
//! let controller: Arc<dyn Controller> = Arc::new(LogControllerDecorator::new(
//!     Arc::new(signup_controller),
//!     Arc::new(LogMongoRepository::new(database.clone())),
//! ));
//! ```

pub mod log_controller_decorator;

pub use log_controller_decorator::LogControllerDecorator;
