//! 계정 관리 유스케이스 모듈

pub mod add_account;

pub use add_account::*;
