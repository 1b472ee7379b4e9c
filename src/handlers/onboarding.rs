//! Onboarding HTTP Handlers
//!
//! 온보딩 항목 조회/선택 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 두 엔드포인트 모두 세션 게이트를 통과한 인증된 요청만 허용하며,
//! 익명 요청에는 401 `{"message": ...}` 응답이 반환됩니다.
use actix_web::{get, post, web, HttpResponse};
use crate::domain::dto::onboarding::JoinItemsRequest;
use crate::domain::models::auth::AuthenticatedIdentity;
use crate::errors::AppError;
use crate::services::onboarding::OnboardingService;

/// 온보딩 항목 조회 핸들러
///
/// 인증된 사용자의 온보딩 항목 목록과 완료 여부를 반환합니다.
///
/// # Endpoint
/// `GET /api/v1/onboarding/items`
#[get("/items")]
pub async fn get_onboarding_items(
    identity: AuthenticatedIdentity,
) -> Result<HttpResponse, AppError> {
    let onboarding_service = OnboardingService::instance();
    let items = onboarding_service
        .get_onboarding_items(&identity.subject_id)
        .await?;

    Ok(HttpResponse::Ok().json(items))
}

/// 온보딩 항목 선택 핸들러
///
/// 사용자의 선택을 저장하고 온보딩을 완료 상태로 표시합니다.
///
/// # Endpoint
/// `POST /api/v1/onboarding/join`
#[post("/join")]
pub async fn join_onboarding_items(
    identity: AuthenticatedIdentity,
    payload: web::Json<JoinItemsRequest>,
) -> Result<HttpResponse, AppError> {
    let onboarding_service = OnboardingService::instance();
    let result = onboarding_service
        .join_items(&identity.subject_id, &payload)
        .await?;

    Ok(HttpResponse::Ok().json(result))
}
