//! 외부 라이브러리 어댑터 모듈
//!
//! 서비스/프레젠테이션 계층의 계약을 외부 크레이트로 구현합니다.
//!
//! # Modules
//!
//! - [`bcrypt_adapter`] - `Encrypter`, `HashComparer` (bcrypt)
//! - [`email_validator_adapter`] - `EmailValidator` (validator)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::{BcryptAdapter, EmailValidatorAdapter};
//!
//! let hasher = BcryptAdapter::new(PasswordConfig::bcrypt_cost());
//! let hash = hasher.encrypt("any_password").await?;
//! assert!(EmailValidatorAdapter::new().is_valid("user@example.com")?);
//! ```

pub mod bcrypt_adapter;
pub mod email_validator_adapter;

pub use bcrypt_adapter::BcryptAdapter;
pub use email_validator_adapter::EmailValidatorAdapter;
