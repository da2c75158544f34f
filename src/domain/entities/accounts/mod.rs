//! Accounts Entity Module
//!
//! 회원가입으로 생성되는 계정 엔티티를 정의합니다.

pub mod account;

pub use account::*;
