//! 에러 로그 컨트롤러 데코레이터
//!
//! 감싼 컨트롤러의 응답을 그대로 돌려주되, 서버 에러(5xx) 응답이면
//! 원인 스택을 에러 로그 저장소에 한 번 기록합니다.

use std::sync::Arc;
use async_trait::async_trait;
use log::{error, warn};
use crate::{
    handlers::protocols::{Controller, HttpRequest, HttpResponse},
    services::protocols::LogErrorRepository,
};

pub struct LogControllerDecorator {
    controller: Arc<dyn Controller>,
    log_error_repository: Arc<dyn LogErrorRepository>,
}

impl LogControllerDecorator {
    pub fn new(
        controller: Arc<dyn Controller>,
        log_error_repository: Arc<dyn LogErrorRepository>,
    ) -> Self {
        Self {
            controller,
            log_error_repository,
        }
    }
}

#[async_trait]
impl Controller for LogControllerDecorator {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let response = self.controller.handle(request).await;

        if response.is_server_error() {
            let stack = response
                .error()
                .and_then(|e| e.stack())
                .unwrap_or_default();

            error!("❌ 서버 에러 응답: {}", stack);

            // 기록 실패가 응답을 바꾸지 않는다
            if let Err(e) = self.log_error_repository.log_error(stack).await {
                warn!("⚠️ 에러 로그 저장 실패: {}", e);
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use serde_json::json;
    use crate::errors::{AppError, HttpError};
    use crate::handlers::protocols::{MockController, ResponseBody};
    use crate::services::protocols::MockLogErrorRepository;
    use mockall::predicate::eq;

    fn make_request() -> HttpRequest {
        HttpRequest::from(json!({
            "email": "any_mail@mail.com",
            "name": "any_name",
            "password": "any_password",
            "passwordConfirmation": "any_password",
        }))
    }

    fn ok_response() -> HttpResponse {
        HttpResponse {
            status_code: StatusCode::OK,
            body: ResponseBody::Data(json!({ "name": "Rodrigo" })),
        }
    }

    fn server_error_response() -> HttpResponse {
        HttpResponse {
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            body: ResponseBody::Error(HttpError::Server { stack: "any_stack".to_string() }),
        }
    }

    fn make_controller(response: HttpResponse) -> MockController {
        let mut controller = MockController::new();
        controller.expect_handle().returning(move |_| response.clone());
        controller
    }

    #[actix_web::test]
    async fn test_delegates_request_to_inner_controller() {
        let mut controller = MockController::new();
        controller.expect_handle()
            .with(eq(make_request()))
            .times(1)
            .returning(|_| ok_response());
        let mut repository = MockLogErrorRepository::new();
        repository.expect_log_error().never();

        let sut = LogControllerDecorator::new(Arc::new(controller), Arc::new(repository));
        sut.handle(make_request()).await;
    }

    #[actix_web::test]
    async fn test_returns_inner_response_unchanged() {
        let mut repository = MockLogErrorRepository::new();
        repository.expect_log_error().never();

        let sut = LogControllerDecorator::new(Arc::new(make_controller(ok_response())), Arc::new(repository));
        let response = sut.handle(make_request()).await;

        assert_eq!(response, ok_response());
    }

    #[actix_web::test]
    async fn test_logs_stack_once_on_server_error() {
        let mut repository = MockLogErrorRepository::new();
        repository.expect_log_error()
            .with(eq("any_stack"))
            .times(1)
            .returning(|_| Ok(()));

        let sut = LogControllerDecorator::new(
            Arc::new(make_controller(server_error_response())),
            Arc::new(repository),
        );
        let response = sut.handle(make_request()).await;

        assert_eq!(response, server_error_response());
    }

    #[actix_web::test]
    async fn test_client_errors_are_not_logged() {
        let bad_request = HttpResponse::from(HttpError::missing_param("email"));
        let mut repository = MockLogErrorRepository::new();
        repository.expect_log_error().never();

        let sut = LogControllerDecorator::new(Arc::new(make_controller(bad_request.clone())), Arc::new(repository));

        assert_eq!(sut.handle(make_request()).await, bad_request);
    }

    #[actix_web::test]
    async fn test_logging_failure_does_not_change_response() {
        let mut repository = MockLogErrorRepository::new();
        repository.expect_log_error()
            .times(1)
            .returning(|_| Err(AppError::DatabaseError("errors collection unavailable".to_string())));

        let sut = LogControllerDecorator::new(
            Arc::new(make_controller(server_error_response())),
            Arc::new(repository),
        );

        assert_eq!(sut.handle(make_request()).await, server_error_response());
    }
}
