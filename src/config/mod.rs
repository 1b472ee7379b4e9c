//! # Configuration Module
//!
//! 인증 게이트웨이의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 환경 관련 설정
//! - [`auth_config`] - 세션 서명, 아이덴티티 프로바이더 관련 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 지연 로드 (Lazy Loading)
//!
//! 필수 설정값은 프로세스 시작이 아니라 최초 사용 시점에 읽고 검증합니다.
//! 설정이 잘못된 배포는 크래시 대신 해당 기능만 실패하며, 세션 게이트는
//! "모든 요청이 익명"으로 강등됩니다.
//!
//! ### 2. 보안 우선 (Security First)
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - `ENVIRONMENT` 미설정 시 프로덕션으로 간주 (Secure 쿠키 강제)
//! - service-role 키는 서버 전용이며 응답/로그에 노출하지 않음
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 세션 서명 (필수, 최소 32자)
//! export SESSION_SECRET="your-session-signing-secret-at-least-32-chars"
//!
//! # 아이덴티티 프로바이더 (필수)
//! export PROVIDER_URL="https://your-project.example.co"
//! export PROVIDER_ANON_KEY="public-anon-key"
//! export PROVIDER_SERVICE_ROLE_KEY="service-role-key"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
