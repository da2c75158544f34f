//! 저장소 계약
//!
//! 계정 저장소는 용도별로 나뉘어 있으며, MongoDB 구현체 하나가
//! 세 계약을 모두 구현합니다.

use async_trait::async_trait;
use crate::{
    domain::{Account, AddAccountModel},
    errors::AppResult,
};

/// 새 계정을 저장합니다.
///
/// 이메일 유일성은 저장소의 유니크 인덱스가 보장하며,
/// 중복 삽입은 `AppError::ConflictError`로 실패합니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddAccountRepository: Send + Sync {
    async fn add(&self, account: AddAccountModel) -> AppResult<Account>;
}

/// 이메일로 계정을 조회합니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoadAccountByEmailRepository: Send + Sync {
    async fn load_by_email(&self, email: &str) -> AppResult<Option<Account>>;
}

/// 마지막으로 발급된 액세스 토큰을 계정에 기록합니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpdateAccessTokenRepository: Send + Sync {
    async fn update_access_token(&self, id: &str, token: &str) -> AppResult<()>;
}

/// 서버 에러의 원인 정보를 기록합니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogErrorRepository: Send + Sync {
    async fn log_error(&self, stack: &str) -> AppResult<()>;
}
