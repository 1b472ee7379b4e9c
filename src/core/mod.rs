//! # Core Framework Module
//!
//! 게이트웨이 서비스를 위한 핵심 프레임워크 기능을 제공하는 모듈입니다.
//! Spring Framework의 핵심 컨테이너 기능을 Rust 생태계에 맞게 구현하여,
//! 타입 안전성과 성능을 모두 만족하는 의존성 주입 시스템을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: Spring의 ApplicationContext + BeanFactory 역할
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 서비스 등록
//! - **싱글톤 관리**: Thread-safe한 인스턴스 생명주기 관리
//! - **의존성 해결**: `Arc<T>` 타입 기반 자동 의존성 주입
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::registry::ServiceLocator;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     // 모든 서비스 초기화
//!     ServiceLocator::initialize_all().await.expect("서비스 초기화 실패");
//!
//!     // 웹 서버 시작...
//! }
//! ```

pub mod registry;

pub use registry::*;
