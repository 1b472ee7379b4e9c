//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   SessionMiddleware - 세션 쿠키 판정             ← Gate Layer
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 코덱 / 프로바이더 연동              ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Hosted Identity Provider - 크리덴셜 검증      ← External
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 주요 특징
//!
//! ### 1. 추출자 기반 401 게이팅
//!
//! 보호된 핸들러는 `AuthenticatedIdentity`를 인자로 선언하는 것만으로
//! 익명 요청을 401로 거부합니다. 미들웨어는 요청을 거부하지 않습니다.
//!
//! ```rust,ignore
//! #[get("/me")]
//! pub async fn me(identity: AuthenticatedIdentity) -> Result<HttpResponse, AppError> {
//!     Ok(HttpResponse::Ok().json(json!({ "id": identity.subject_id })))
//! }
//! ```
//!
//! ### 2. 에러 처리
//!
//! - **Result 패턴**: `?` 연산자로 에러 자동 전파
//! - **통합 에러 타입**: AppError가 상태 코드와 `{"message": ...}` 본문으로 변환
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 로그인/가입/로그아웃/현재 사용자/CSRF 엔드포인트
//! - **`onboarding`**: 온보딩 항목 조회/선택 엔드포인트 (인증 필요)

pub mod auth;
pub mod onboarding;
