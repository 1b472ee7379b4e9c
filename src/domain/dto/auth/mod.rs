//! 인증 관련 DTO

pub mod auth_request;

pub use auth_request::*;
