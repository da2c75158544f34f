//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 핸들을 제공하는 모듈입니다.
//! `main.rs`에서 한 번 생성되어 각 리포지토리 생성자에 명시적으로 전달됩니다.
//!
//! # 연결 수명과 재연결
//!
//! `Database`는 `mongodb::Client`를 감싸며, 복제(clone)해도 같은 커넥션 풀을
//! 공유합니다. 끊어진 연결의 복구는 드라이버의 커넥션 풀이 담당하므로
//! 리포지토리 계층에서는 재연결이나 재시도를 하지 않습니다.
//! 실패한 연산은 `AppError::DatabaseError`로 호출자에게 그대로 전달됩니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::DatabaseConfig;
//! use crate::db::Database;
//!
//! let database = Database::connect(&DatabaseConfig::uri(), &DatabaseConfig::database_name()).await?;
//! let accounts = AccountMongoRepository::new(&database);
//! ```

use mongodb::{Client, Collection, options::ClientOptions};
use log::info;

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 클라이언트를 초기화한 뒤 `ping` 명령으로 연결 상태를 검증합니다.
    pub async fn connect(uri: &str, database_name: &str) -> Result<Self, mongodb::error::Error> {
        // MongoDB 클라이언트 옵션 파싱
        let mut client_options = ClientOptions::parse(uri).await?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some("account_service".to_string());

        let client = Client::with_options(client_options)?;

        // 연결 테스트
        client
            .database(database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 타입이 지정된 컬렉션 핸들을 반환합니다.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.get_database().collection::<T>(name)
    }

    /// 커넥션 풀을 정리하고 연결을 종료합니다.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("🔌 MongoDB 연결 종료: {}", self.database_name);
    }
}
