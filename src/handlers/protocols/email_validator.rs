//! 이메일 문법 검증 계약

use crate::errors::AppResult;

/// 이메일 문자열의 문법적 유효성을 확인합니다.
///
/// 구현체의 실패(`Err`)는 컨트롤러에서 500 응답으로 변환됩니다.
#[cfg_attr(test, mockall::automock)]
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> AppResult<bool>;
}
