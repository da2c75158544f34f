//! API 라우트 설정 모듈
//!
//! 헬스체크와 계정 API 엔드포인트를 등록하고, actix-web 요청을
//! 컨트롤러의 `HttpRequest`로 변환하는 어댑터를 제공합니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크
//! - `POST /api/signup` - 회원가입
//! - `POST /api/login` - 로그인
//!
//! 컨트롤러는 `web::Data<AppControllers>`로 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(AppControllers::new(&database)))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{get, post, web, HttpResponse};
use serde_json::{json, Value};
use crate::{
    core::AppControllers,
    errors::HttpError,
    handlers::protocols::{Controller, HttpRequest, ResponseBody},
};

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    cfg.service(
        web::scope("/api")
            .service(signup)
            .service(login)
    );
}

/// 컨트롤러 응답을 actix-web 응답으로 변환합니다
///
/// 데이터 본문은 같은 상태 코드의 JSON으로, 에러 본문은 `HttpError`의
/// `ResponseError` 구현으로 렌더링됩니다 (`{"error": "<message>"}`).
/// JSON이 아니거나 객체가 아닌 본문은 빈 본문으로 취급합니다.
pub async fn adapt_route(controller: &dyn Controller, body: Option<Value>) -> Result<HttpResponse, HttpError> {
    let request = body.map(HttpRequest::from).unwrap_or_default();
    let response = controller.handle(request).await;

    match response.body {
        ResponseBody::Data(data) => Ok(HttpResponse::build(response.status_code).json(data)),
        ResponseBody::Error(error) => Err(error),
    }
}

#[post("/signup")]
async fn signup(
    controllers: web::Data<AppControllers>,
    body: Option<web::Json<Value>>,
) -> Result<HttpResponse, HttpError> {
    adapt_route(controllers.signup.as_ref(), body.map(web::Json::into_inner)).await
}

#[post("/login")]
async fn login(
    controllers: web::Data<AppControllers>,
    body: Option<web::Json<Value>>,
) -> Result<HttpResponse, HttpError> {
    adapt_route(controllers.login.as_ref(), body.map(web::Json::into_inner)).await
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "account_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
