//! 인증 게이트웨이 백엔드
//!
//! 호스팅 아이덴티티 프로바이더에 크리덴셜 검증을 위임하는
//! Rust 기반의 인증/온보딩 게이트웨이 서비스입니다.
//! HMAC-SHA256 서명 세션 쿠키, 만료 토큰의 조용한 갱신,
//! 그리고 싱글톤 매크로를 활용한 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **위임 인증**: 로그인/가입/토큰 갱신을 전부 프로바이더 REST API로 위임
//! - **서명 세션 쿠키**: 서버 측 세션 테이블 없이 쿠키가 곧 세션 저장소
//! - **2단계 검증**: 만료 강제(빠른 경로) / 만료 허용(갱신 판단용)
//! - **조용한 토큰 갱신**: 만료된 세션을 리프레시 토큰으로 자동 연장
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **온보딩 API**: 세션으로 게이팅되는 온보딩 항목 조회/선택
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SessionMiddleware│ ← 매 요청 세션 쿠키 판정 (검증/갱신/제거)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 추출자 기반 401 게이팅
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 세션 코덱 / 프로바이더 연동 / 온보딩
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Hosted Provider │ ← 크리덴셜 검증 (외부 협력자)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use auth_gateway_backend::services::auth::{ProviderAuth, ProviderAuthService, SessionService};
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let session_service = SessionService::instance();
//! let provider = ProviderAuthService::instance();
//!
//! // 로그인 후 세션 쿠키 발급
//! let result = provider.login("user@example.com", "password").await?;
//! let record = SessionRecord::from(result.session.unwrap());
//! let cookie_value = session_service.serialize_session(&record, secret)?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
