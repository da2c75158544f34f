//! 컨트롤러 조립 팩토리
//!
//! 공유 `Database` 핸들에서 리포지토리, 어댑터, 유스케이스를 만들고
//! 컨트롤러를 로그 데코레이터로 감싸 반환합니다. 모든 의존성은
//! 생성자 인자로 명시적으로 전달됩니다.
//!
//! ```text
//! SignUp: LogControllerDecorator(SignUpController(EmailValidatorAdapter,
//!             DbAddAccount(BcryptAdapter, AccountMongoRepository)), LogMongoRepository)
//! Login:  LogControllerDecorator(LoginController(EmailValidatorAdapter,
//!             DbAuthentication(AccountMongoRepository, BcryptAdapter,
//!                              TokenService, AccountMongoRepository)), LogMongoRepository)
//! ```

use std::sync::Arc;
use crate::{
    config::PasswordConfig,
    db::Database,
    handlers::{login::LoginController, protocols::Controller, signup::SignUpController},
    middlewares::LogControllerDecorator,
    repositories::{AccountMongoRepository, LogMongoRepository},
    services::{accounts::DbAddAccount, auth::{DbAuthentication, TokenService}},
    utils::{BcryptAdapter, EmailValidatorAdapter},
};

/// 라우트에 등록되는 컨트롤러 묶음
#[derive(Clone)]
pub struct AppControllers {
    pub signup: Arc<dyn Controller>,
    pub login: Arc<dyn Controller>,
}

impl AppControllers {
    pub fn new(database: &Database) -> Self {
        Self {
            signup: make_signup_controller(database),
            login: make_login_controller(database),
        }
    }
}

fn decorate(controller: Arc<dyn Controller>, database: &Database) -> Arc<dyn Controller> {
    Arc::new(LogControllerDecorator::new(
        controller,
        Arc::new(LogMongoRepository::new(database)),
    ))
}

pub fn make_signup_controller(database: &Database) -> Arc<dyn Controller> {
    let add_account = DbAddAccount::new(
        Arc::new(BcryptAdapter::new(PasswordConfig::bcrypt_cost())),
        Arc::new(AccountMongoRepository::new(database)),
    );

    let controller = SignUpController::new(
        Arc::new(EmailValidatorAdapter::new()),
        Arc::new(add_account),
    );

    decorate(Arc::new(controller), database)
}

pub fn make_login_controller(database: &Database) -> Arc<dyn Controller> {
    let account_repository = Arc::new(AccountMongoRepository::new(database));
    let bcrypt_adapter = Arc::new(BcryptAdapter::new(PasswordConfig::bcrypt_cost()));

    let authentication = DbAuthentication::new(
        account_repository.clone(),
        bcrypt_adapter,
        Arc::new(TokenService::from_env()),
        account_repository,
    );

    let controller = LoginController::new(
        Arc::new(EmailValidatorAdapter::new()),
        Arc::new(authentication),
    );

    decorate(Arc::new(controller), database)
}
