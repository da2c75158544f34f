//! # 계정 리포지토리 구현
//!
//! `accounts` 컬렉션에 대한 MongoDB 데이터 액세스를 담당합니다.
//! 하나의 구현체가 계정 저장, 이메일 조회, 액세스 토큰 기록 계약을 모두 제공합니다.
//!
//! ## 문서 형태
//!
//! ```json
//! {
//!   "_id": ObjectId("507f1f77bcf86cd799439011"),
//!   "name": "Rodrigo",
//!   "email": "rodrigo@mail.com",
//!   "password": "$2b$12$...",
//!   "accessToken": "eyJ..."
//! }
//! ```
//!
//! `accessToken`은 첫 로그인 이후에만 존재합니다.
//!
//! ## 에러 처리
//!
//! - **ConflictError**: 이메일 유니크 인덱스 위반 (중복 가입)
//! - **ValidationError**: 잘못된 ObjectId 형식
//! - **DatabaseError**: 그 밖의 MongoDB 연결/쿼리 오류

use async_trait::async_trait;
use log::{info, warn};
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use serde::{Deserialize, Serialize};
use crate::{
    db::Database,
    domain::{Account, AddAccountModel},
    errors::{AppError, AppResult},
    services::protocols::{AddAccountRepository, LoadAccountByEmailRepository, UpdateAccessTokenRepository},
};

const COLLECTION_NAME: &str = "accounts";

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// `accounts` 컬렉션의 문서 표현
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct AccountDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    email: String,
    password: String,
    #[serde(rename = "accessToken", default, skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
}

impl From<AddAccountModel> for AccountDocument {
    fn from(model: AddAccountModel) -> Self {
        Self {
            id: None,
            name: model.name,
            email: model.email,
            password: model.password,
            access_token: None,
        }
    }
}

impl TryFrom<AccountDocument> for Account {
    type Error = AppError;

    fn try_from(document: AccountDocument) -> Result<Self, Self::Error> {
        let id = document
            .id
            .ok_or_else(|| AppError::DatabaseError("계정 문서에 _id가 없습니다".to_string()))?;

        Ok(Account {
            id: id.to_hex(),
            name: document.name,
            email: document.email,
            password: document.password,
        })
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

/// 계정 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct AccountMongoRepository {
    collection: Collection<AccountDocument>,
}

impl AccountMongoRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<AccountDocument>(COLLECTION_NAME),
        }
    }

    /// `accounts` 컬렉션 인덱스 생성
    ///
    /// 이메일 유니크 인덱스(`email_unique`)를 만듭니다. 이미 존재하면 아무 일도 하지 않으며,
    /// 기존 데이터에 중복 이메일이 있으면 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ accounts 인덱스 생성 완료");

        Ok(())
    }
}

#[async_trait]
impl AddAccountRepository for AccountMongoRepository {
    /// 새 계정 저장
    ///
    /// # 반환값
    ///
    /// * `Ok(Account)` - 저장소가 부여한 ID를 포함한 계정
    /// * `Err(AppError::ConflictError)` - 이미 사용 중인 이메일
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    async fn add(&self, account: AddAccountModel) -> AppResult<Account> {
        let mut document = AccountDocument::from(account);

        let result = self.collection
            .insert_one(&document)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        document.id = result.inserted_id.as_object_id();

        Account::try_from(document)
    }
}

#[async_trait]
impl LoadAccountByEmailRepository for AccountMongoRepository {
    async fn load_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .map(Account::try_from)
            .transpose()
    }
}

#[async_trait]
impl UpdateAccessTokenRepository for AccountMongoRepository {
    async fn update_access_token(&self, id: &str, token: &str) -> AppResult<()> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection
            .update_one(
                doc! { "_id": object_id },
                doc! { "$set": { "accessToken": token } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count == 0 {
            warn!("액세스 토큰 기록 대상 계정 없음 - ID: {}", id);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, Document};

    fn make_document(id: Option<ObjectId>) -> AccountDocument {
        AccountDocument {
            id,
            name: "any_name".to_string(),
            email: "any_email@mail.com".to_string(),
            password: "hashed_password".to_string(),
            access_token: None,
        }
    }

    #[test]
    fn test_new_document_omits_id_and_token() {
        let document = AccountDocument::from(AddAccountModel {
            name: "any_name".to_string(),
            email: "any_email@mail.com".to_string(),
            password: "hashed_password".to_string(),
        });

        let bson_doc: Document = bson::to_document(&document).unwrap();

        assert!(!bson_doc.contains_key("_id"));
        assert!(!bson_doc.contains_key("accessToken"));
        assert_eq!(bson_doc.get_str("password").unwrap(), "hashed_password");
    }

    #[test]
    fn test_document_maps_to_account_with_hex_id() {
        let object_id = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();

        let account = Account::try_from(make_document(Some(object_id))).unwrap();

        assert_eq!(account, Account {
            id: "507f1f77bcf86cd799439011".to_string(),
            name: "any_name".to_string(),
            email: "any_email@mail.com".to_string(),
            password: "hashed_password".to_string(),
        });
    }

    #[test]
    fn test_document_without_id_is_rejected() {
        assert!(matches!(
            Account::try_from(make_document(None)),
            Err(AppError::DatabaseError(_))
        ));
    }

    #[test]
    fn test_stored_document_with_token_deserializes() {
        let object_id = ObjectId::new();
        let stored = doc! {
            "_id": object_id,
            "name": "any_name",
            "email": "any_email@mail.com",
            "password": "hashed_password",
            "accessToken": "any_token",
        };

        let document: AccountDocument = bson::from_document(stored).unwrap();

        assert_eq!(document.access_token.as_deref(), Some("any_token"));
        assert_eq!(Account::try_from(document).unwrap().id, object_id.to_hex());
    }
}
