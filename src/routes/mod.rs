//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 인증 관련 라우트, 온보딩 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 로그인/가입/로그아웃/현재 사용자 조회 API 엔드포인트
//! - 세션 쿠키 기반 온보딩 API 엔드포인트
//! - 헬스체크 엔드포인트
//!
//! # 인증 구조
//!
//! 세션 게이트(`SessionMiddleware`)는 `main.rs`에서 앱 전역으로 등록되어
//! 모든 요청에서 한 번 실행됩니다. 라우트 단위 게이팅은 보호된 핸들러의
//! `AuthenticatedIdentity` 추출자가 담당하므로, 여기서는 스코프만 구성합니다.
//!
//! ## 인증 불필요 (Public 라우트)
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/auth")
//!         .service(handlers::auth::login)     // 로그인 자체는 인증 불필요
//!         .service(handlers::auth::register)  // 가입은 인증 불필요
//! );
//! ```
//!
//! ## 인증 필요 라우트
//! ```rust,ignore
//! // 핸들러 시그니처의 AuthenticatedIdentity가 401 게이팅을 수행
//! #[get("/items")]
//! async fn get_onboarding_items(identity: AuthenticatedIdentity) -> ... { }
//! ```

use crate::handlers;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_onboarding_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// 로그인, 가입, 로그아웃, 현재 사용자 조회 엔드포인트를 등록합니다.
/// `/me`를 제외한 모든 인증 라우트는 Public 접근이 가능합니다
/// (인증을 위한 엔드포인트이므로).
///
/// # Available Routes
///
/// - `POST /api/auth/login` - 이메일/비밀번호 로그인, 세션 쿠키 발급
/// - `POST /api/auth/register` - 가입 (쿠키 미발급, 이메일 확인 대기)
/// - `POST /api/auth/logout` - 세션 쿠키 제거
/// - `GET /api/auth/me` - 현재 사용자 조회 (인증 필요)
/// - `GET /api/auth/csrf` - CSRF 토큰 발급
///
/// # Examples
///
/// ```bash
/// # 로그인 (세션 쿠키를 받는다)
/// curl -X POST http://localhost:8080/api/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"user@example.com","password":"password123"}' \
///   -c cookies.txt
///
/// # 현재 사용자 조회 (세션 쿠키로 인증)
/// curl http://localhost:8080/api/auth/me -b cookies.txt
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::login)
            .service(handlers::auth::register)
            .service(handlers::auth::logout)
            .service(handlers::auth::me)
            .service(handlers::auth::csrf),
    );
}

/// 온보딩 관련 라우트를 설정합니다
///
/// 온보딩 항목 조회/선택 엔드포인트를 등록합니다. 두 엔드포인트 모두
/// 유효한 세션 쿠키가 필요하며, 익명 요청은 401로 거부됩니다.
///
/// # Available Routes
///
/// - `GET /api/v1/onboarding/items` - 온보딩 항목 목록 조회
/// - `POST /api/v1/onboarding/join` - 선택 저장 및 완료 처리
fn configure_onboarding_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/onboarding")
            .service(handlers::onboarding::get_onboarding_items)
            .service(handlers::onboarding::join_onboarding_items),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Returns
///
/// * `HttpResponse` - 서비스 상태 정보를 포함한 JSON 응답
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "auth_gateway_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "identity_provider": "Hosted (GoTrue REST)",
            "session_storage": "Signed cookie",
            "dependency_injection": "Singleton Macro"
        }
    }))
}
