//! 인증 서비스 모듈
//!
//! 로그인 자격 증명 검증과 액세스 토큰 발급을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{DbAuthentication, TokenService};
//!
//! let authentication = DbAuthentication::new(
//!     accounts.clone(),
//!     Arc::new(BcryptAdapter::new(cost)),
//!     Arc::new(TokenService::from_env()),
//!     accounts,
//! );
//! let token = authentication.auth("user@example.com", "password").await?;
//! ```

pub mod authentication;
pub mod token_service;

pub use authentication::*;
pub use token_service::*;
