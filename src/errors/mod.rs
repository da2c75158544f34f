//! 애플리케이션 에러 모듈
//!
//! - [`errors`] - 협력 객체/유스케이스 실패 (`AppError`)
//! - [`http_errors`] - 컨트롤러 응답용 에러 종류 (`HttpError`)

#[allow(clippy::module_inception)]
pub mod errors;
pub mod http_errors;

pub use errors::*;
pub use http_errors::*;
