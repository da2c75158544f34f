//! # Core Module
//!
//! 애플리케이션 구성 요소를 조립하는 컴포지션 루트입니다.
//!
//! ## 모듈 구성
//!
//! ### [`factories`] - 컨트롤러 팩토리
//! - 리포지토리, 어댑터, 유스케이스를 생성자 주입으로 연결
//! - 모든 컨트롤러를 `LogControllerDecorator`로 감싸서 반환
//! - 전역 상태나 지연 초기화 없이 `main.rs`에서 한 번 호출
//!
//! ```rust,ignore
//! use crate::core::factories::AppControllers;
//!
//! let controllers = web::Data::new(AppControllers::new(&database));
//! App::new().app_data(controllers.clone()).configure(configure_all_routes);
//! ```

pub mod factories;

pub use factories::*;
