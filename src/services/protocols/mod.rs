//! 유스케이스가 의존하는 협력 객체 계약
//!
//! 유스케이스는 구체 구현(bcrypt, jsonwebtoken, MongoDB)을 알지 못하고
//! 이 trait들만 생성자로 주입받습니다.
//!
//! - [`cryptography`] - `Encrypter`, `HashComparer`, `TokenGenerator`
//! - [`db`] - 계정/에러 로그 저장소 계약

pub mod cryptography;
pub mod db;

pub use cryptography::*;
pub use db::*;
