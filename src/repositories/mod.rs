//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 저장소로 사용하며, 각 리포지토리는 `services::protocols`의
//! 저장소 계약을 구현합니다. 인스턴스는 `core::factories`에서
//! 공유 `Database` 핸들로 생성됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::AccountMongoRepository;
//!
//! let account_repo = AccountMongoRepository::new(&database);
//! let account = account_repo.load_by_email("user@example.com").await?;
//! ```

pub mod accounts;
pub mod logs;

pub use accounts::AccountMongoRepository;
pub use logs::LogMongoRepository;
