//! 외부 시스템 통합 및 요청 컨텍스트 모델
//!
//! 세션 쿠키 페이로드, 인증된 요청 컨텍스트, 프로바이더 API 모델을 담습니다.

pub mod session;
pub mod auth;
pub mod provider;

pub use session::*;
pub use auth::*;
pub use provider::*;
