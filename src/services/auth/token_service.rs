//! JWT 액세스 토큰 발급 서비스 구현
//!
//! 로그인에 성공한 계정에 HMAC-SHA256으로 서명한 액세스 토큰을 발급합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use crate::{
    config::JwtConfig,
    errors::{AppResult, ErrorContext},
    services::protocols::TokenGenerator,
};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 개인정보 보호를 위해 계정 식별자와 시간 정보만 포함합니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (계정 ID)
    pub sub: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

/// JWT 토큰 관리 서비스
pub struct TokenService {
    secret: String,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: String, expiration_hours: i64) -> Self {
        Self {
            secret,
            expiration_hours,
        }
    }

    /// 환경 변수 설정(`JWT_SECRET`, `JWT_EXPIRATION_HOURS`)으로 생성합니다.
    pub fn from_env() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::expiration_hours())
    }
}

impl TokenGenerator for TokenService {
    /// 계정을 위한 JWT 액세스 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 서명 실패
    fn generate(&self, account_id: &str) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: account_id.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
            .context("JWT 토큰 생성 실패")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use jsonwebtoken::{decode, DecodingKey, Validation};

    /// 서명을 검증하고 클레임을 추출합니다.
    fn decode_claims(service: &TokenService, token: &str) -> AppResult<TokenClaims> {
        let decoding_key = DecodingKey::from_secret(service.secret.as_ref());

        decode::<TokenClaims>(token, &decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .context("토큰 검증 실패")
    }

    #[test]
    fn test_generated_token_carries_account_id() {
        let service = TokenService::new("test-secret".to_string(), 1);

        let token = service.generate("507f1f77bcf86cd799439011").unwrap();
        let claims = decode_claims(&service, &token).unwrap();

        assert_eq!(claims.sub, "507f1f77bcf86cd799439011");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let issuer = TokenService::new("issuer-secret".to_string(), 1);
        let verifier = TokenService::new("other-secret".to_string(), 1);

        let token = issuer.generate("any_id").unwrap();

        assert!(matches!(decode_claims(&verifier, &token), Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = TokenService::new("test-secret".to_string(), -2);

        let token = service.generate("any_id").unwrap();

        assert!(decode_claims(&service, &token).is_err());
    }
}
