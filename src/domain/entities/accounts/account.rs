//! Account Entity Implementation
//!
//! 저장소가 식별자를 부여한 뒤의 계정 엔티티입니다.

use serde::{Deserialize, Serialize};

/// 영속화된 계정
///
/// `password`는 항상 Encrypter가 만든 해시 값이며 평문이 저장되는 일은 없습니다.
/// 이 서비스 범위에서는 생성 이후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// 저장소가 부여한 불투명 식별자 (MongoDB ObjectId의 16진수 문자열)
    pub id: String,
    pub name: String,
    /// 계정 이메일 (unique)
    pub email: String,
    /// 해시된 비밀번호
    pub password: String,
}
