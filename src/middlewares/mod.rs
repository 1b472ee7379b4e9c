//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 세션 게이트 미들웨어 (SessionMiddleware)
//! - 서명된 세션 쿠키 검증 (매 요청 로컬 HMAC 검증)
//! - 만료된 토큰의 조용한 갱신 및 쿠키 재발급
//! - 인증된 사용자 정보를 request extension에 저장
//! - 요청을 거부하지 않음 - 실패는 전부 익명 컨텍스트로 수렴
//!
//! # 사용 방법
//!
//! ## 글로벌 미들웨어 등록
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::middlewares::SessionMiddleware;
//!
//! HttpServer::new(|| {
//!     App::new()
//!         .wrap(SessionMiddleware::new()) // 모든 요청에서 세션 판정
//!         .service(/* 라우트들 */)
//! })
//! ```
//!
//! 401 게이팅은 미들웨어가 아니라 보호된 핸들러의 `AuthenticatedIdentity`
//! 추출자가 담당합니다.

pub mod session_middleware;
mod session_inner;

// 미들웨어 재export
pub use session_middleware::SessionMiddleware;
