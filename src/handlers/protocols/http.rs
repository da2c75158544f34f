//! 컨트롤러용 HTTP 형태의 요청/응답
//!
//! 전송 계층(actix-web)과 분리된 요청/응답 표현입니다. 라우트 어댑터가
//! actix 요청을 `HttpRequest`로 바꾸고, `HttpResponse`를 다시 actix 응답으로
//! 바꿉니다.

use actix_web::http::StatusCode;
use serde_json::{Map, Value};
use crate::errors::HttpError;

/// 컨트롤러 입력
///
/// 본문은 신뢰할 수 없는 임의의 JSON 객체입니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpRequest {
    pub body: Map<String, Value>,
}

impl HttpRequest {
    pub fn new(body: Map<String, Value>) -> Self {
        Self { body }
    }

    /// 필드가 존재하는지 확인합니다.
    ///
    /// 값이 없거나 `null`, 빈 문자열, `false`, 숫자 0이면 누락으로 봅니다.
    pub fn has_field(&self, field: &str) -> bool {
        match self.body.get(field) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }

    /// 주어진 순서대로 확인해 처음 누락된 필드를 반환합니다.
    pub fn first_missing_field<'a>(&self, fields: &[&'a str]) -> Option<&'a str> {
        fields.iter().copied().find(|field| !self.has_field(field))
    }

    /// 문자열 필드를 추출합니다.
    ///
    /// 누락이면 `MissingParam`, 문자열이 아니면 `InvalidParam`입니다.
    pub fn string_field(&self, field: &str) -> Result<String, HttpError> {
        if !self.has_field(field) {
            return Err(HttpError::missing_param(field));
        }

        match self.body.get(field) {
            Some(Value::String(s)) => Ok(s.clone()),
            _ => Err(HttpError::invalid_param(field)),
        }
    }
}

/// JSON 값에서 요청을 만듭니다. 객체가 아니면 빈 본문이 됩니다.
impl From<Value> for HttpRequest {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(body) => Self::new(body),
            _ => Self::default(),
        }
    }
}

/// 응답 본문
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// 도메인 데이터
    Data(Value),
    /// 구조화된 에러
    Error(HttpError),
}

/// 컨트롤러 출력
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status_code: StatusCode,
    pub body: ResponseBody,
}

impl HttpResponse {
    /// 응답이 서버 에러(5xx)인지 확인합니다.
    pub fn is_server_error(&self) -> bool {
        self.status_code.is_server_error()
    }

    /// 본문에 담긴 에러
    pub fn error(&self) -> Option<&HttpError> {
        match &self.body {
            ResponseBody::Error(error) => Some(error),
            ResponseBody::Data(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> HttpRequest {
        HttpRequest::from(body)
    }

    #[test]
    fn test_falsy_values_count_as_missing() {
        let req = request(json!({
            "empty": "",
            "null": null,
            "false": false,
            "zero": 0,
            "text": "any",
            "number": 5,
            "list": [],
        }));

        assert!(!req.has_field("absent"));
        assert!(!req.has_field("empty"));
        assert!(!req.has_field("null"));
        assert!(!req.has_field("false"));
        assert!(!req.has_field("zero"));
        assert!(req.has_field("text"));
        assert!(req.has_field("number"));
        assert!(req.has_field("list"));
    }

    #[test]
    fn test_first_missing_field_follows_given_order() {
        let req = request(json!({ "email": "any_email@email.com" }));

        assert_eq!(req.first_missing_field(&["name", "email", "password"]), Some("name"));
        assert_eq!(req.first_missing_field(&["email", "password"]), Some("password"));
        assert_eq!(req.first_missing_field(&["email"]), None);
    }

    #[test]
    fn test_string_field() {
        let req = request(json!({ "name": "any_name", "age": 30 }));

        assert_eq!(req.string_field("name"), Ok("any_name".to_string()));
        assert_eq!(req.string_field("age"), Err(HttpError::invalid_param("age")));
        assert_eq!(req.string_field("email"), Err(HttpError::missing_param("email")));
    }

    #[test]
    fn test_non_object_json_becomes_empty_body() {
        assert!(request(json!(["a", "b"])).body.is_empty());
        assert!(request(json!("text")).body.is_empty());
    }
}
