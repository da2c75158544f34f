//! 에러 로그 리포지토리
//!
//! 서버 에러의 원인 스택을 `errors` 컬렉션에 `{ stack, date }` 형태로 기록합니다.

use async_trait::async_trait;
use mongodb::{bson::{doc, DateTime, Document}, Collection};
use crate::{
    db::Database,
    errors::{AppError, AppResult},
    services::protocols::LogErrorRepository,
};

const COLLECTION_NAME: &str = "errors";

fn make_error_document(stack: &str) -> Document {
    doc! {
        "stack": stack,
        "date": DateTime::now(),
    }
}

#[derive(Clone)]
pub struct LogMongoRepository {
    collection: Collection<Document>,
}

impl LogMongoRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<Document>(COLLECTION_NAME),
        }
    }
}

#[async_trait]
impl LogErrorRepository for LogMongoRepository {
    async fn log_error(&self, stack: &str) -> AppResult<()> {
        self.collection
            .insert_one(make_error_document(stack))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_document_shape() {
        let before = DateTime::now();
        let document = make_error_document("Database error: connection reset");

        assert_eq!(document.get_str("stack").unwrap(), "Database error: connection reset");
        assert!(document.get_datetime("date").unwrap() >= &before);
    }
}
