//! 암호화 관련 협력 객체 계약

use async_trait::async_trait;
use crate::errors::AppResult;

/// 평문 값을 되돌릴 수 없게 해싱합니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Encrypter: Send + Sync {
    async fn encrypt(&self, value: &str) -> AppResult<String>;
}

/// 평문 값과 저장된 해시가 일치하는지 확인합니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HashComparer: Send + Sync {
    async fn compare(&self, value: &str, hash: &str) -> AppResult<bool>;
}

/// 인증된 계정 식별자로 액세스 토큰을 발급합니다.
#[cfg_attr(test, mockall::automock)]
pub trait TokenGenerator: Send + Sync {
    fn generate(&self, account_id: &str) -> AppResult<String>;
}
