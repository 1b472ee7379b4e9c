//! Authentication HTTP Handlers
//!
//! 사용자 인증과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 크리덴셜 검증은 전부 호스팅 아이덴티티 프로바이더에 위임되며, 성공 시
//! HMAC 서명된 HttpOnly 세션 쿠키를 발급합니다.
//!
//! # Endpoints
//!
//! - **로그인**: 이메일/패스워드 검증 후 세션 쿠키 발급 (`POST /api/auth/login`)
//! - **가입**: 프로바이더에 계정 생성, 쿠키는 발급하지 않음 (`POST /api/auth/register`)
//! - **로그아웃**: 세션 쿠키 제거 (`POST /api/auth/logout`)
//! - **현재 사용자**: 세션 게이트가 확정한 인증 컨텍스트 조회 (`GET /api/auth/me`)
//! - **CSRF 토큰**: 클라이언트 라이브러리 호환용 (`GET /api/auth/csrf`)
use actix_web::{get, post, web, HttpResponse};
use rand::RngCore;
use serde_json::json;
use validator::Validate;
use crate::config::SessionConfig;
use crate::domain::dto::auth::{LoginRequest, RegisterRequest};
use crate::domain::models::auth::AuthenticatedIdentity;
use crate::domain::models::session::SessionRecord;
use crate::errors::AppError;
use crate::services::auth::provider_auth_service::{ProviderAuth, ProviderAuthService};
use crate::services::auth::session_service::{
    session_cookie, session_removal_cookie, SessionService,
};

/// 로그인 핸들러
///
/// 이메일과 패스워드를 프로바이더로 검증하고, 성공 시 프로바이더 세션을
/// 서명된 세션 쿠키로 감싸 발급합니다.
///
/// # Endpoint
/// `POST /api/auth/login`
#[post("/login")]
pub async fn login(payload: web::Json<LoginRequest>) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    // 프로바이더 호출 전에 서명 가능 여부부터 확인한다. 비밀키가 없으면
    // 로그인에 성공해도 쿠키를 만들 수 없다.
    let secret = SessionConfig::secret()?;

    let provider = ProviderAuthService::instance();
    let session_service = SessionService::instance();

    let result = provider.login(&payload.email, &payload.password).await?;

    let Some(session) = result.session else {
        return Err(AppError::AuthenticationError(
            "로그인 실패: 프로바이더가 세션을 발급하지 않았습니다".to_string(),
        ));
    };

    let record = SessionRecord::from(session);
    let token = session_service.serialize_session(&record, secret)?;

    log::info!("로그인 성공 - 사용자: {}, ID: {}", result.user.email, result.user.id);

    Ok(HttpResponse::Ok().cookie(session_cookie(token)).json(json!({
        "user": {
            "id": result.user.id,
            "email": result.user.email
        }
    })))
}

/// 가입 핸들러
///
/// 프로바이더에 새 계정을 생성합니다. 이메일 확인이 필요할 수 있으므로
/// 세션 쿠키는 발급하지 않습니다. 확인 후 로그인으로 세션을 시작합니다.
///
/// # Endpoint
/// `POST /api/auth/register`
#[post("/register")]
pub async fn register(payload: web::Json<RegisterRequest>) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let provider = ProviderAuthService::instance();
    let result = provider.register(&payload.email, &payload.password).await?;

    log::info!("가입 완료 - 사용자: {}, ID: {}", result.user.email, result.user.id);

    Ok(HttpResponse::Created().json(json!({
        "user": {
            "id": result.user.id,
            "email": result.user.email
        },
        "message": "가입이 완료되었습니다. 이메일을 확인해주세요."
    })))
}

/// 로그아웃 핸들러
///
/// 세션 쿠키를 제거합니다. 쿠키가 곧 세션 저장소이므로 서버 측에서
/// 무효화할 상태는 없습니다.
///
/// # Endpoint
/// `POST /api/auth/logout`
#[post("/logout")]
pub async fn logout() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok()
        .cookie(session_removal_cookie())
        .json(json!({ "success": true })))
}

/// 현재 인증된 사용자 정보 조회 핸들러
///
/// 세션 게이트가 요청 extension에 저장한 인증 컨텍스트를 반환합니다.
/// 익명 요청에는 추출자가 401 `{"message": ...}` 응답을 돌려줍니다.
/// 프로바이더 호출은 없습니다.
///
/// # Endpoint
/// `GET /api/auth/me`
#[get("/me")]
pub async fn me(identity: AuthenticatedIdentity) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(json!({
        "id": identity.subject_id,
        "email": identity.email
    })))
}

/// CSRF 토큰 발급 핸들러
///
/// React 클라이언트 라이브러리 호환을 위한 엔드포인트입니다.
/// 세션에 묶이지 않은 단순 랜덤 토큰을 발급합니다.
///
/// # Endpoint
/// `GET /api/auth/csrf`
#[get("/csrf")]
pub async fn csrf() -> Result<HttpResponse, AppError> {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    let csrf_token: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();

    Ok(HttpResponse::Ok().json(json!({ "csrfToken": csrf_token })))
}
