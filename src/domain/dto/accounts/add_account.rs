//! 계정 생성 DTO
//!
//! 회원가입 요청(`SignUpRequest`)과 유스케이스 입력(`AddAccountModel`)을 정의합니다.

use serde::{Deserialize, Serialize};

/// 검증을 통과한 회원가입 요청
///
/// 컨트롤러가 요청 본문에서 추출한 값이며, 그대로 저장되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// AddAccount 유스케이스 입력
///
/// 비밀번호 확인 필드는 포함하지 않습니다. 저장소로 전달될 때
/// `password`는 해시 값으로 교체됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAccountModel {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<SignUpRequest> for AddAccountModel {
    fn from(request: SignUpRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            password: request.password,
        }
    }
}

impl AddAccountModel {
    /// 비밀번호만 교체한 새 모델을 반환합니다.
    pub fn with_password(self, password: String) -> Self {
        Self { password, ..self }
    }
}
