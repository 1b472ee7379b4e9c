//! 요청 인증 컨텍스트 모델

pub mod authenticated_identity;

pub use authenticated_identity::*;
