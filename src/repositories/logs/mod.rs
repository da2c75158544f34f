pub mod log_repo;

pub use log_repo::LogMongoRepository;
