//! 프레젠테이션 계층 계약
//!
//! - [`http`] - `HttpRequest`, `HttpResponse`, `ResponseBody`
//! - [`controller`] - `Controller`
//! - [`email_validator`] - `EmailValidator`

pub mod http;
pub mod controller;
pub mod email_validator;

pub use http::*;
pub use controller::*;
pub use email_validator::*;
