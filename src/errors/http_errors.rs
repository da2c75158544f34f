//! 컨트롤러 응답용 도메인 에러
//!
//! 컨트롤러가 요청을 거절하거나 협력 객체의 실패를 보고할 때 사용하는
//! 에러 종류입니다. 영속화되지 않으며 응답 생성과 에러 로깅에만 쓰입니다.
//!
//! ## 상태 코드 매핑
//!
//! | 변형 | 상태 코드 | 메시지 |
//! |------|-----------|--------|
//! | `MissingParam` | 400 | `Missing param: <field>` |
//! | `InvalidParam` | 400 | `Invalid param: <field>` |
//! | `Unauthorized` | 401 | `Unauthorized` |
//! | `Server` | 500 | `Internal server error` |

use actix_web::http::StatusCode;
use thiserror::Error;

/// 컨트롤러 경계에서 사용하는 에러 종류
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    /// 필수 필드 누락 (400 Bad Request)
    #[error("Missing param: {0}")]
    MissingParam(String),

    /// 필드 값이 유효하지 않음 (400 Bad Request)
    #[error("Invalid param: {0}")]
    InvalidParam(String),

    /// 예상하지 못한 협력 객체 실패 (500 Internal Server Error)
    ///
    /// `stack`은 에러 로그 저장소에 기록하기 위한 원인 정보이며
    /// 클라이언트 응답에는 포함되지 않습니다.
    #[error("Internal server error")]
    Server { stack: String },

    /// 자격 증명 거부 (401 Unauthorized)
    #[error("Unauthorized")]
    Unauthorized,
}

impl HttpError {
    pub fn missing_param(field: &str) -> Self {
        HttpError::MissingParam(field.to_string())
    }

    pub fn invalid_param(field: &str) -> Self {
        HttpError::InvalidParam(field.to_string())
    }

    /// 원인 에러와 `source()` 체인 전체로 서버 에러를 만듭니다.
    pub fn server(error: &(dyn std::error::Error + 'static)) -> Self {
        let mut stack = error.to_string();
        let mut source = error.source();

        while let Some(cause) = source {
            stack.push_str("\ncaused by: ");
            stack.push_str(&cause.to_string());
            source = cause.source();
        }

        HttpError::Server { stack }
    }

    /// 서버 에러의 원인 정보
    pub fn stack(&self) -> Option<&str> {
        match self {
            HttpError::Server { stack } => Some(stack),
            _ => None,
        }
    }
}

impl actix_web::ResponseError for HttpError {
    /// 에러 종류를 상태 코드로 변환하는 유일한 매핑입니다.
    fn status_code(&self) -> StatusCode {
        match self {
            HttpError::MissingParam(_) | HttpError::InvalidParam(_) => StatusCode::BAD_REQUEST,
            HttpError::Unauthorized => StatusCode::UNAUTHORIZED,
            HttpError::Server { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use actix_web::ResponseError;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(HttpError::missing_param("name").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(HttpError::invalid_param("email").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(HttpError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            HttpError::Server { stack: "boom".to_string() }.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_name_the_field() {
        assert_eq!(HttpError::missing_param("passwordConfirmation").to_string(), "Missing param: passwordConfirmation");
        assert_eq!(HttpError::invalid_param("email").to_string(), "Invalid param: email");
    }

    #[test]
    fn test_server_error_keeps_cause_out_of_message() {
        let error = HttpError::server(&AppError::DatabaseError("E11000 duplicate key".to_string()));

        assert_eq!(error.to_string(), "Internal server error");
        assert_eq!(error.stack(), Some("Database error: E11000 duplicate key"));
    }

    #[test]
    fn test_server_error_walks_source_chain() {
        #[derive(Error, Debug)]
        #[error("insert failed")]
        struct InsertFailed(#[source] std::io::Error);

        let wrapped = InsertFailed(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));

        let error = HttpError::server(&wrapped);

        assert_eq!(error.stack(), Some("insert failed\ncaused by: disk full"));
    }

    #[actix_web::test]
    async fn test_error_response_body() {
        let response = HttpError::missing_param("email").error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Missing param: email" }));
    }
}
