//! 비즈니스 로직을 담당하는 유스케이스 계층 모듈
//!
//! 유스케이스는 전송 계층과 무관하며, [`protocols`]에 정의된 협력 객체
//! 계약에만 의존합니다. 협력 객체의 실패는 변환 없이 전파합니다.
//!
//! - [`accounts`] - 계정 생성 (`DbAddAccount`)
//! - [`auth`] - 로그인 인증 (`DbAuthentication`), JWT 발급 (`TokenService`)
//! - [`protocols`] - 암호화/저장소 계약

pub mod protocols;
pub mod accounts;
pub mod auth;
