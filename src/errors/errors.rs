//! 협력 객체(collaborator)와 유스케이스에서 사용하는 에러 시스템
//!
//! 해싱, 토큰 발급, MongoDB 영속화처럼 컨트롤러 아래 계층에서 발생하는
//! 실패를 표현합니다. 유스케이스는 이 에러를 그대로 전파하고,
//! HTTP 응답으로의 변환은 컨트롤러만 담당합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, ErrorContext};
//!
//! async fn encrypt(&self, value: &str) -> AppResult<String> {
//!     bcrypt::hash(value, self.cost).context("비밀번호 해싱 실패")
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 컨트롤러 경계에 도달하면 모두 `HttpError::Server`로 변환되어
/// 500 응답이 됩니다. 변형(variant)의 구분은 로깅과 테스트를 위한 것입니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (잘못된 ObjectId 형식 등)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 충돌/중복 에러 (유니크 인덱스 위반)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
