//! 계정 데이터 액세스 계층
//!
//! [`AccountMongoRepository`](account_repo::AccountMongoRepository)가
//! 계정 저장, 이메일 조회, 액세스 토큰 기록을 담당합니다.

pub mod account_repo;

pub use account_repo::AccountMongoRepository;
