//! # 계정 생성 유스케이스
//!
//! 비밀번호 해싱과 영속화를 순서대로 조율합니다.
//!
//! ```text
//! AddAccountModel ──▶ Encrypter.encrypt(password) ──▶ AddAccountRepository.add(hashed) ──▶ Account
//! ```
//!
//! ## 보장 사항
//!
//! - 평문 비밀번호는 저장소로 전달되지 않습니다.
//! - 호출당 `encrypt` 1회, `add` 1회만 수행합니다.
//! - 두 협력 객체의 실패는 재시도 없이 그대로 호출자에게 전파됩니다.

use std::sync::Arc;
use async_trait::async_trait;
use crate::{
    domain::{Account, AddAccountModel},
    errors::AppResult,
    services::protocols::{AddAccountRepository, Encrypter},
};

/// 계정 생성 유스케이스 계약
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddAccount: Send + Sync {
    async fn add(&self, account: AddAccountModel) -> AppResult<Account>;
}

/// 저장소 기반 계정 생성 유스케이스
pub struct DbAddAccount {
    encrypter: Arc<dyn Encrypter>,
    add_account_repository: Arc<dyn AddAccountRepository>,
}

impl DbAddAccount {
    pub fn new(
        encrypter: Arc<dyn Encrypter>,
        add_account_repository: Arc<dyn AddAccountRepository>,
    ) -> Self {
        Self {
            encrypter,
            add_account_repository,
        }
    }
}

#[async_trait]
impl AddAccount for DbAddAccount {
    /// 비밀번호를 해싱한 뒤 계정을 저장합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Account)` - 저장소가 식별자를 부여한 계정
    /// * `Err(AppError)` - Encrypter 또는 저장소 실패 (변환 없이 전파)
    async fn add(&self, account: AddAccountModel) -> AppResult<Account> {
        let hash_start = std::time::Instant::now();
        let hashed_password = self.encrypter.encrypt(&account.password).await?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let created = self.add_account_repository
            .add(account.with_password(hashed_password))
            .await?;

        log::info!("✅ 계정 생성 완료 - ID: {}", created.id);

        Ok(created)
    }
}
