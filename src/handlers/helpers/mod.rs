pub mod http_helper;

pub use http_helper::*;
