//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로를 사용하여 싱글톤으로 관리되는 서비스들을 제공합니다.
//! 도메인별로 모듈화되어 세션/인증과 온보딩 기능을 담당합니다.
//!
//! # Features
//!
//! - HMAC 서명 세션 쿠키 코덱 (서명, 2단계 검증)
//! - 호스팅 아이덴티티 프로바이더 위임 인증 (로그인, 가입, 갱신)
//! - 온보딩 항목 조회 및 완료 처리
//! - 자동 의존성 주입 및 싱글톤 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::SessionService, onboarding::OnboardingService};
//!
//! let session_service = SessionService::instance();
//! let onboarding_service = OnboardingService::instance();
//! ```

pub mod auth;
pub mod onboarding;
