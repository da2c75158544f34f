//! # 회원가입 컨트롤러
//!
//! ## 검증 순서
//!
//! 1. 필수 필드: `name`, `email`, `password`, `passwordConfirmation` 순서로 확인
//! 2. 비밀번호 확인 일치 여부
//! 3. 이메일 문법 검증
//!
//! 첫 번째 실패에서 중단하며, 이후 협력 객체는 호출하지 않습니다.
//! 협력 객체가 실패하면 원인을 담은 500 응답을 반환합니다.

use std::sync::Arc;
use async_trait::async_trait;
use crate::{
    domain::SignUpRequest,
    errors::HttpError,
    handlers::helpers::{bad_request, ok, server_error},
    handlers::protocols::{Controller, EmailValidator, HttpRequest, HttpResponse},
    services::accounts::AddAccount,
};

const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "password", "passwordConfirmation"];

pub struct SignUpController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(email_validator: Arc<dyn EmailValidator>, add_account: Arc<dyn AddAccount>) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }

    /// 본문에서 가입 요청을 추출합니다.
    fn parse(request: &HttpRequest) -> Result<SignUpRequest, HttpError> {
        if let Some(field) = request.first_missing_field(&REQUIRED_FIELDS) {
            return Err(HttpError::missing_param(field));
        }

        Ok(SignUpRequest {
            name: request.string_field("name")?,
            email: request.string_field("email")?,
            password: request.string_field("password")?,
            password_confirmation: request.string_field("passwordConfirmation")?,
        })
    }
}

#[async_trait]
impl Controller for SignUpController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let sign_up = match Self::parse(&request) {
            Ok(sign_up) => sign_up,
            Err(e) => return bad_request(e),
        };

        if sign_up.password != sign_up.password_confirmation {
            return bad_request(HttpError::invalid_param("passwordConfirmation"));
        }

        match self.email_validator.is_valid(&sign_up.email) {
            Ok(true) => {}
            Ok(false) => return bad_request(HttpError::invalid_param("email")),
            Err(e) => {
                log::error!("이메일 검증 실패: {}", e);
                return server_error(&e);
            }
        }

        match self.add_account.add(sign_up.into()).await {
            Ok(account) => ok(&account),
            Err(e) => {
                log::error!("계정 생성 실패: {}", e);
                server_error(&e)
            }
        }
    }
}
