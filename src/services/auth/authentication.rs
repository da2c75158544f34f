//! # 인증 유스케이스
//!
//! 이메일/비밀번호를 검증하고 액세스 토큰을 발급합니다.
//!
//! ## 처리 과정
//!
//! 1. **계정 조회**: 이메일로 계정을 찾고, 없으면 토큰 없음
//! 2. **비밀번호 검증**: 저장된 해시와 비교하고, 불일치 시 토큰 없음
//! 3. **토큰 발급**: 계정 ID를 주체로 하는 액세스 토큰 생성
//! 4. **토큰 기록**: 발급한 토큰을 계정 문서에 저장
//!
//! 자격 증명 불일치는 에러가 아니라 `Ok(None)`이며, 로그인 컨트롤러가
//! 이를 401로 변환합니다. 협력 객체의 실패만 `Err`로 전파됩니다.

use std::sync::Arc;
use async_trait::async_trait;
use crate::{
    errors::AppResult,
    services::protocols::{
        HashComparer, LoadAccountByEmailRepository, TokenGenerator, UpdateAccessTokenRepository,
    },
};

/// 인증 유스케이스 계약
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authentication: Send + Sync {
    /// 자격 증명이 유효하면 액세스 토큰을, 아니면 `None`을 반환합니다.
    async fn auth(&self, email: &str, password: &str) -> AppResult<Option<String>>;
}

/// 저장소 기반 인증 유스케이스
pub struct DbAuthentication {
    load_account_by_email_repository: Arc<dyn LoadAccountByEmailRepository>,
    hash_comparer: Arc<dyn HashComparer>,
    token_generator: Arc<dyn TokenGenerator>,
    update_access_token_repository: Arc<dyn UpdateAccessTokenRepository>,
}

impl DbAuthentication {
    pub fn new(
        load_account_by_email_repository: Arc<dyn LoadAccountByEmailRepository>,
        hash_comparer: Arc<dyn HashComparer>,
        token_generator: Arc<dyn TokenGenerator>,
        update_access_token_repository: Arc<dyn UpdateAccessTokenRepository>,
    ) -> Self {
        Self {
            load_account_by_email_repository,
            hash_comparer,
            token_generator,
            update_access_token_repository,
        }
    }
}

#[async_trait]
impl Authentication for DbAuthentication {
    async fn auth(&self, email: &str, password: &str) -> AppResult<Option<String>> {
        let Some(account) = self.load_account_by_email_repository.load_by_email(email).await? else {
            log::info!("로그인 실패 - 존재하지 않는 계정: {}", email);
            return Ok(None);
        };

        let verify_start = std::time::Instant::now();
        let is_valid = self.hash_comparer.compare(password, &account.password).await?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            log::info!("로그인 실패 - 비밀번호 불일치: {}", email);
            return Ok(None);
        }

        let access_token = self.token_generator.generate(&account.id)?;
        self.update_access_token_repository
            .update_access_token(&account.id, &access_token)
            .await?;

        log::info!("로그인 성공 - 계정 ID: {}", account.id);

        Ok(Some(access_token))
    }
}
