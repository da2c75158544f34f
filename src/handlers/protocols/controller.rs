//! 컨트롤러 계약

use async_trait::async_trait;
use super::http::{HttpRequest, HttpResponse};

/// HTTP 형태의 요청을 HTTP 형태의 응답으로 변환하는 경계 컴포넌트
///
/// 모든 실패는 응답으로 표현되므로 `Result`를 반환하지 않습니다.
/// 각 호출은 독립적이며 호출 사이에 상태를 공유하지 않습니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Controller: Send + Sync {
    async fn handle(&self, request: HttpRequest) -> HttpResponse;
}
