//! 인증 및 세션 서비스 모듈
//!
//! HMAC 서명 세션 쿠키 코덱과 호스팅 아이덴티티 프로바이더 연동을 담당하는
//! 서비스들을 제공합니다.
//!
//! # Features
//!
//! - 세션 쿠키 서명/검증 (만료 강제 / 만료 허용 2단계 검증)
//! - 프로바이더 위임 로그인, 가입, 토큰 검증, 조용한 토큰 갱신
//! - 관리자 API를 통한 사용자 메타데이터 조회/갱신
//!
//! # Security
//!
//! - HMAC-SHA256 쿠키 서명 + 상수 시간 비교
//! - 검증 실패 사유는 외부에 구분되지 않음 (fail closed)
//! - service-role 키는 서버 내부에서만 사용
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{ProviderAuth, ProviderAuthService, SessionService};
//!
//! let session_service = SessionService::instance();
//! let token = session_service.serialize_session(&record, secret)?;
//!
//! let provider = ProviderAuthService::instance();
//! let result = provider.login("user@example.com", "password").await?;
//! ```

pub mod session_service;
pub mod provider_auth_service;

pub use session_service::*;
pub use provider_auth_service::*;
