//! 계정 관련 요청 DTO

pub mod add_account;
pub mod credentials;

pub use add_account::*;
pub use credentials::*;
