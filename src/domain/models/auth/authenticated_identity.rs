use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::errors::AppError;

/// 세션 게이트가 검증을 마친 요청의 인증된 사용자 정보
///
/// 세션 미들웨어가 쿠키 검증(필요 시 조용한 토큰 갱신 포함)에 성공하면
/// 이 구조체를 request extension에 저장합니다. 실패하면 아무것도 저장하지
/// 않으며 요청은 익명으로 진행됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedIdentity {
    /// 프로바이더가 발급한 사용자 고유 식별자
    pub subject_id: String,

    /// 사용자 이메일
    pub email: String,
}

/// ActixWeb FromRequest trait 구현
///
/// 보호된 핸들러는 이 추출자를 인자로 선언하는 것만으로 401 게이팅이 됩니다.
/// 익명 요청에는 `{"message": ...}` JSON 본문의 401 응답이 반환됩니다.
impl FromRequest for AuthenticatedIdentity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedIdentity>() {
            Some(identity) => ready(Ok(identity.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;
    use super::*;

    #[actix_web::test]
    async fn test_extractor_with_identity() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(AuthenticatedIdentity {
            subject_id: "user-123".to_string(),
            email: "user@example.com".to_string(),
        });

        let identity = AuthenticatedIdentity::extract(&req).await.unwrap();
        assert_eq!(identity.subject_id, "user-123");
        assert_eq!(identity.email, "user@example.com");
    }

    #[actix_web::test]
    async fn test_extractor_without_identity_fails_unauthorized() {
        let req = TestRequest::default().to_http_request();
        let result = AuthenticatedIdentity::extract(&req).await;

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }
}
