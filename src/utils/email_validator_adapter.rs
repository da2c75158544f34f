//! # 이메일 검증 어댑터
//!
//! `validator` 크레이트의 이메일 문법 검사(HTML5 / RFC 5322 기반)를
//! `EmailValidator` 계약에 맞게 감쌉니다.

use validator::ValidateEmail;
use crate::{errors::AppResult, handlers::protocols::EmailValidator};

/// `validator` 크레이트 기반 이메일 검증기
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailValidatorAdapter;

impl EmailValidatorAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> AppResult<bool> {
        Ok(email.validate_email())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_true_for_valid_email() {
        let sut = EmailValidatorAdapter::new();

        assert!(sut.is_valid("valid_email@email.com").unwrap());
        assert!(sut.is_valid("joabe.simao@gmail.com").unwrap());
    }

    #[test]
    fn test_returns_false_for_invalid_email() {
        let sut = EmailValidatorAdapter::new();

        assert!(!sut.is_valid("invalid_email").unwrap());
        assert!(!sut.is_valid("invalid@").unwrap());
        assert!(!sut.is_valid("@email.com").unwrap());
        assert!(!sut.is_valid("").unwrap());
    }
}
