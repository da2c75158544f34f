//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 영속화되는 계정 (Account)
//! └── DTOs          - 요청/유스케이스 입력 (SignUpRequest, AddAccountModel, Credentials)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod entities;
pub mod dto;

pub use entities::accounts::Account;
pub use dto::accounts::{AddAccountModel, Credentials, SignUpRequest};
