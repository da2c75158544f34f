//! # 로그인 컨트롤러
//!
//! `email`, `password` 순서로 필수 필드를 확인하고 이메일 문법을 검증한 뒤
//! 인증 유스케이스에 위임합니다. 자격 증명이 거부되거나 토큰이 비어 있으면
//! 401을 반환합니다.

use std::sync::Arc;
use async_trait::async_trait;
use serde_json::json;
use crate::{
    domain::Credentials,
    errors::HttpError,
    handlers::helpers::{bad_request, ok, server_error, unauthorized},
    handlers::protocols::{Controller, EmailValidator, HttpRequest, HttpResponse},
    services::auth::Authentication,
};

const REQUIRED_FIELDS: [&str; 2] = ["email", "password"];

pub struct LoginController {
    email_validator: Arc<dyn EmailValidator>,
    authentication: Arc<dyn Authentication>,
}

impl LoginController {
    pub fn new(email_validator: Arc<dyn EmailValidator>, authentication: Arc<dyn Authentication>) -> Self {
        Self {
            email_validator,
            authentication,
        }
    }

    fn parse(request: &HttpRequest) -> Result<Credentials, HttpError> {
        if let Some(field) = request.first_missing_field(&REQUIRED_FIELDS) {
            return Err(HttpError::missing_param(field));
        }

        Ok(Credentials {
            email: request.string_field("email")?,
            password: request.string_field("password")?,
        })
    }
}

#[async_trait]
impl Controller for LoginController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let credentials = match Self::parse(&request) {
            Ok(credentials) => credentials,
            Err(e) => return bad_request(e),
        };

        match self.email_validator.is_valid(&credentials.email) {
            Ok(true) => {}
            Ok(false) => return bad_request(HttpError::invalid_param("email")),
            Err(e) => {
                log::error!("이메일 검증 실패: {}", e);
                return server_error(&e);
            }
        }

        match self.authentication.auth(&credentials.email, &credentials.password).await {
            Ok(Some(access_token)) if !access_token.is_empty() => {
                ok(&json!({ "accessToken": access_token }))
            }
            Ok(_) => unauthorized(),
            Err(e) => {
                log::error!("인증 처리 실패: {}", e);
                server_error(&e)
            }
        }
    }
}
