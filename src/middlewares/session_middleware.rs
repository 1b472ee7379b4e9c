//! 세션 게이트 미들웨어
//!
//! 모든 요청에서 한 번 실행되며, 서명된 세션 쿠키를 읽어 요청의 인증
//! 컨텍스트를 확정합니다.
//!
//! 보안 모델:
//!  - 세션 쿠키는 HMAC-SHA256으로 서명됩니다 (SESSION_SECRET).
//!  - 유효한 쿠키는 매 요청 로컬 서명 검증만으로 처리됩니다 -
//!    프로바이더 네트워크 호출이 없습니다.
//!  - 액세스 토큰이 만료됐지만 리프레시 토큰이 있으면 조용한 토큰 갱신을
//!    시도하고, 성공 시 새 토큰으로 쿠키를 재발급합니다.
//!  - 이 미들웨어는 절대 요청을 거부하지 않습니다. 모든 실패는 "익명 요청"으로
//!    끝나며, 401 게이팅은 핸들러의 `AuthenticatedIdentity` 추출자가 담당합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};
use crate::middlewares::session_inner::SessionMiddlewareService;

/// 세션 게이트 미들웨어
pub struct SessionMiddleware;

impl SessionMiddleware {
    /// 새로운 세션 게이트 미들웨어 생성
    pub fn new() -> Self {
        Self
    }
}

impl Default for SessionMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SessionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App, HttpMessage, HttpRequest, HttpResponse};
    use crate::domain::models::auth::AuthenticatedIdentity;
    use super::*;

    /// 요청 extension에 인증 컨텍스트가 있는지 보고하는 테스트 핸들러
    async fn probe(req: HttpRequest) -> HttpResponse {
        let authenticated = req.extensions().get::<AuthenticatedIdentity>().is_some();
        HttpResponse::Ok().json(serde_json::json!({ "authenticated": authenticated }))
    }

    #[actix_web::test]
    async fn test_request_without_cookie_stays_anonymous() {
        let app = test::init_service(
            App::new()
                .wrap(SessionMiddleware::new())
                .route("/probe", web::get().to(probe)),
        )
        .await;

        let req = test::TestRequest::get().uri("/probe").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["authenticated"], serde_json::json!(false));
    }
}
