//! # Domain Entities Module
//!
//! 저장소에 영속화되는 핵심 도메인 엔티티를 정의합니다.
//!
//! - [`accounts`] - 회원가입으로 생성되는 `Account`

pub mod accounts;

pub use accounts::*;
