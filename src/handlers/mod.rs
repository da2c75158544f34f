//! # HTTP Request Handlers Module
//!
//! 전송 계층과 분리된 컨트롤러를 정의하는 모듈입니다.
//! 컨트롤러는 HTTP 형태의 요청을 받아 검증하고, 유스케이스에 위임한 뒤
//! HTTP 형태의 응답을 돌려줍니다. actix-web과의 연결은 `routes` 모듈의
//! 어댑터가 담당합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Routes - actix 요청 ↔ HttpRequest 변환          ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Middlewares - 에러 로그 데코레이터
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - 입력 검증, 상태 코드 결정    ← Presentation Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 계정 생성, 인증 유스케이스             ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                      ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`protocols`**: `Controller`, `EmailValidator` 계약과 요청/응답 타입
//! - **`helpers`**: `ok`, `bad_request`, `unauthorized`, `server_error`
//! - **`signup`**: 회원가입 (`POST /api/signup`)
//! - **`login`**: 로그인 (`POST /api/login`)
//!
//! ## 에러 처리
//!
//! 컨트롤러는 실패를 `Result`로 전파하지 않습니다. 검증 실패는 400,
//! 자격 증명 거부는 401, 협력 객체의 실패는 원인 스택을 담은 500 응답이 됩니다.

pub mod protocols;
pub mod helpers;
pub mod signup;
pub mod login;
