//! # bcrypt 해싱 어댑터
//!
//! 회원가입 시 비밀번호 해싱(`Encrypter`)과 로그인 시 해시 비교(`HashComparer`)를
//! 같은 cost 설정으로 제공합니다.
//!
//! | 환경 | 권장 cost |
//! |------|-----------|
//! | Development / Test | 4 |
//! | Production | 12 |
//!
//! cost는 `PasswordConfig::bcrypt_cost()`에서 결정됩니다.

use async_trait::async_trait;
use crate::{
    errors::{AppResult, ErrorContext},
    services::protocols::{Encrypter, HashComparer},
};

/// bcrypt 기반 해싱 어댑터
#[derive(Debug, Clone, Copy)]
pub struct BcryptAdapter {
    cost: u32,
}

impl BcryptAdapter {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

#[async_trait]
impl Encrypter for BcryptAdapter {
    async fn encrypt(&self, value: &str) -> AppResult<String> {
        bcrypt::hash(value, self.cost).context("비밀번호 해싱 실패")
    }
}

#[async_trait]
impl HashComparer for BcryptAdapter {
    async fn compare(&self, value: &str, hash: &str) -> AppResult<bool> {
        bcrypt::verify(value, hash).context("비밀번호 검증 실패")
    }
}
