//! 로그인 자격 증명 DTO

/// 로그인 요청에서 추출한 자격 증명
///
/// 평문 비밀번호는 인증 과정에서만 잠시 사용됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
