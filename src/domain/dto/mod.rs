//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의하며,
//! `validator` crate로 입력값 유효성 검증을 내장합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── auth/          # 로그인/가입 요청 DTO
//! └── onboarding/    # 온보딩 항목 조회/선택 DTO
//! ```
//!
//! ## 설계 원칙
//!
//! - **API 계약 우선**: 클라이언트가 기대할 수 있는 명확한 데이터 구조
//! - **유효성 검증 내장**: validator crate를 통한 요청 본문 검증
//! - **와이어 포맷 고정**: 원 클라이언트와의 호환을 위해 camelCase 필드명 사용

pub mod auth;
pub mod onboarding;

pub use auth::*;
pub use onboarding::*;
