//! # Data Transfer Objects Module
//!
//! 컨트롤러와 유스케이스 사이에서 오가는 데이터 구조를 정의합니다.
//!
//! - [`accounts`] - 회원가입 요청, 계정 생성 입력, 로그인 자격 증명

pub mod accounts;

pub use accounts::*;
