//! 컨트롤러 응답 생성 헬퍼

use std::error::Error;
use actix_web::http::StatusCode;
use serde::Serialize;
use crate::errors::HttpError;
use crate::handlers::protocols::{HttpResponse, ResponseBody};

/// 200 OK
///
/// 직렬화할 수 없는 데이터는 서버 에러 응답이 됩니다.
pub fn ok<T: Serialize>(data: &T) -> HttpResponse {
    match serde_json::to_value(data) {
        Ok(body) => HttpResponse {
            status_code: StatusCode::OK,
            body: ResponseBody::Data(body),
        },
        Err(e) => server_error(&e),
    }
}

/// 400 Bad Request
pub fn bad_request(error: HttpError) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::BAD_REQUEST,
        body: ResponseBody::Error(error),
    }
}

/// 401 Unauthorized
pub fn unauthorized() -> HttpResponse {
    HttpResponse::from(HttpError::Unauthorized)
}

/// 500 Internal Server Error
///
/// 원인 체인을 스택으로 보존해 로그 데코레이터가 기록할 수 있게 합니다.
pub fn server_error(error: &(dyn Error + 'static)) -> HttpResponse {
    HttpResponse::from(HttpError::server(error))
}

/// 에러 종류에 맞는 상태 코드로 응답을 만듭니다.
impl From<HttpError> for HttpResponse {
    fn from(error: HttpError) -> Self {
        use actix_web::ResponseError;

        Self {
            status_code: error.status_code(),
            body: ResponseBody::Error(error),
        }
    }
}
