//! SessionMiddleware 세션 게이트 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use crate::config::SessionConfig;
use crate::domain::models::auth::AuthenticatedIdentity;
use crate::domain::models::provider::AuthResult;
use crate::domain::models::session::SessionRecord;
use crate::services::auth::provider_auth_service::{ProviderAuth, ProviderAuthService};
use crate::services::auth::session_service::{
    session_cookie, session_removal_cookie, SessionService, SESSION_COOKIE_NAME,
};

/// 한 요청에 대한 세션 게이트의 최종 판정
///
/// 게이트는 예외를 밖으로 던지지 않으며 항상 이 둘 중 하나로 끝납니다.
#[derive(Debug)]
pub(crate) enum GateOutcome {
    /// 인증됨. 조용한 갱신이 일어난 경우 재발급할 쿠키 값이 함께 전달됩니다.
    Authenticated {
        identity: AuthenticatedIdentity,
        renewed_token: Option<String>,
    },
    /// 익명. 변조/만료 쿠키였다면 제거를 지시합니다.
    Anonymous { clear_cookie: bool },
}

/// 실제 세션 판정을 수행하는 서비스
pub struct SessionMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let cookie_value = req
                .cookie(SESSION_COOKIE_NAME)
                .map(|cookie| cookie.value().to_string());

            // 비밀키는 쿠키가 있을 때만 필요하다. 설정이 잘못된 배포는
            // 크래시 대신 모든 요청이 익명으로 강등된다.
            let secret = match &cookie_value {
                Some(_) => match SessionConfig::secret() {
                    Ok(secret) => Some(secret),
                    Err(e) => {
                        log::error!("세션 게이트: SESSION_SECRET 사용 불가: {}", e);
                        None
                    }
                },
                None => None,
            };

            let session_service = SessionService::instance();
            let provider = ProviderAuthService::instance();

            let outcome = authenticate_request(
                cookie_value.as_deref(),
                secret,
                &session_service,
                provider.as_ref(),
            )
            .await;

            match outcome {
                GateOutcome::Authenticated {
                    identity,
                    renewed_token,
                } => {
                    log::debug!("세션 인증 성공: 사용자 ID {}", identity.subject_id);
                    req.extensions_mut().insert(identity);

                    let mut res = service.call(req).await?;

                    // 조용한 갱신이 일어났다면 동일 옵션으로 쿠키 재발급
                    if let Some(token) = renewed_token {
                        if let Err(e) = res.response_mut().add_cookie(&session_cookie(token)) {
                            log::error!("갱신된 세션 쿠키 설정 실패: {}", e);
                        }
                    }

                    Ok(res)
                }
                GateOutcome::Anonymous { clear_cookie } => {
                    let mut res = service.call(req).await?;

                    if clear_cookie {
                        if let Err(e) = res
                            .response_mut()
                            .add_removal_cookie(&session_removal_cookie())
                        {
                            log::error!("세션 쿠키 제거 실패: {}", e);
                        }
                    }

                    Ok(res)
                }
            }
        })
    }
}

/// 쿠키 값과 비밀키로부터 요청의 인증 컨텍스트를 판정
///
/// 판정 순서:
///
/// 1. 쿠키 없음 → 익명 (쿠키 제거 불필요, 프로바이더 호출 없음)
/// 2. 비밀키 사용 불가 → 익명 (쿠키는 보존, 설정 복구 후 다시 유효해질 수 있음)
/// 3. 만료 강제 검증 성공 → 인증됨 (프로바이더 호출 없음)
/// 4. 서명은 유효 + 만료 + 리프레시 토큰 있음 → 조용한 갱신 1회 시도
///    - 성공 → 새 레코드 재서명, 쿠키 재발급 지시와 함께 인증됨
///    - 거부/실패/타임아웃 → 쿠키 제거, 익명
/// 5. 그 외 (변조, 형식 불량, 리프레시 토큰 없는 만료) → 쿠키 제거, 익명
///
/// 프로바이더 에러는 여기서 전부 흡수됩니다. 어떤 경로로도 에러가 호출자에게
/// 전파되지 않습니다.
pub(crate) async fn authenticate_request(
    cookie_value: Option<&str>,
    secret: Option<&str>,
    sessions: &SessionService,
    provider: &dyn ProviderAuth,
) -> GateOutcome {
    let Some(token) = cookie_value else {
        return GateOutcome::Anonymous {
            clear_cookie: false,
        };
    };

    let Some(secret) = secret else {
        return GateOutcome::Anonymous {
            clear_cookie: false,
        };
    };

    // 빠른 경로: 서명과 만료를 로컬에서 확인
    if let Some(record) = sessions.deserialize_session(token, secret) {
        return GateOutcome::Authenticated {
            identity: AuthenticatedIdentity {
                subject_id: record.subject_id,
                email: record.email,
            },
            renewed_token: None,
        };
    }

    // 서명은 여전히 유효하고 만료만 됐을 수 있다
    let Some(expired) = sessions.deserialize_session_allow_expired(token, secret) else {
        // 변조 또는 형식 불량 - 리프레시 시도 없이 쿠키 제거
        return GateOutcome::Anonymous { clear_cookie: true };
    };

    let Some(refresh_token) = expired.refresh_token else {
        return GateOutcome::Anonymous { clear_cookie: true };
    };

    // 조용한 토큰 갱신 (요청당 프로바이더 호출 최대 1회)
    match provider.refresh_session(&refresh_token).await {
        Ok(Some(AuthResult {
            user,
            session: Some(session),
        })) => {
            let record = SessionRecord::from(session);
            match sessions.serialize_session(&record, secret) {
                Ok(renewed) => {
                    log::info!("조용한 토큰 갱신 성공: 사용자 ID {}", user.id);
                    GateOutcome::Authenticated {
                        identity: AuthenticatedIdentity {
                            subject_id: user.id,
                            email: user.email,
                        },
                        renewed_token: Some(renewed),
                    }
                }
                Err(e) => {
                    log::error!("갱신된 세션 직렬화 실패: {}", e);
                    GateOutcome::Anonymous { clear_cookie: true }
                }
            }
        }
        Ok(_) => {
            log::debug!("토큰 갱신 거부됨 - 세션 종료");
            GateOutcome::Anonymous { clear_cookie: true }
        }
        Err(e) => {
            log::warn!("토큰 갱신 실패: {}", e);
            GateOutcome::Anonymous { clear_cookie: true }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use async_trait::async_trait;
    use chrono::Utc;
    use crate::domain::models::provider::{ProviderSession, ProviderUser};
    use crate::errors::AppError;
    use super::*;

    const SECRET: &str = "test-session-secret-0123456789abcdef";

    /// 리프레시 호출의 스크립트된 결과
    enum RefreshScript {
        /// 새 세션 발급 성공
        Success,
        /// 프로바이더가 리프레시 토큰을 거부
        Rejected,
        /// 전송 계층 실패 (타임아웃 등)
        TransportError,
    }

    /// 스크립트된 결과를 반환하는 인메모리 프로바이더 페이크
    struct FakeProvider {
        refresh_script: RefreshScript,
        refresh_calls: AtomicUsize,
    }

    impl FakeProvider {
        fn new(refresh_script: RefreshScript) -> Self {
            Self {
                refresh_script,
                refresh_calls: AtomicUsize::new(0),
            }
        }

        fn refresh_call_count(&self) -> usize {
            self.refresh_calls.load(Ordering::SeqCst)
        }

        fn refreshed_result() -> AuthResult {
            AuthResult {
                user: ProviderUser {
                    id: "user-123".to_string(),
                    email: "user@example.com".to_string(),
                    onboarding_completed: false,
                },
                session: Some(ProviderSession {
                    subject_id: "user-123".to_string(),
                    email: "user@example.com".to_string(),
                    access_token: "refreshed-access-token".to_string(),
                    refresh_token: Some("refreshed-refresh-token".to_string()),
                    expires_at: Some(Utc::now().timestamp() + 3600),
                }),
            }
        }
    }

    #[async_trait]
    impl ProviderAuth for FakeProvider {
        async fn login(&self, _email: &str, _password: &str) -> Result<AuthResult, AppError> {
            unreachable!("게이트는 login을 호출하지 않는다")
        }

        async fn register(&self, _email: &str, _password: &str) -> Result<AuthResult, AppError> {
            unreachable!("게이트는 register를 호출하지 않는다")
        }

        async fn verify_token(
            &self,
            _access_token: &str,
        ) -> Result<Option<ProviderUser>, AppError> {
            unreachable!("게이트는 verify_token을 호출하지 않는다")
        }

        async fn refresh_session(
            &self,
            _refresh_token: &str,
        ) -> Result<Option<AuthResult>, AppError> {
            self.refresh_calls.fetch_add(1, Ordering::SeqCst);
            match self.refresh_script {
                RefreshScript::Success => Ok(Some(Self::refreshed_result())),
                RefreshScript::Rejected => Ok(None),
                RefreshScript::TransportError => Err(AppError::ExternalServiceError(
                    "프로바이더 연결 실패".to_string(),
                )),
            }
        }

        async fn get_user_by_id(&self, _user_id: &str) -> Result<Option<ProviderUser>, AppError> {
            unreachable!("게이트는 get_user_by_id를 호출하지 않는다")
        }

        async fn mark_onboarding_completed(&self, _user_id: &str) -> Result<(), AppError> {
            unreachable!("게이트는 mark_onboarding_completed를 호출하지 않는다")
        }
    }

    fn codec() -> SessionService {
        SessionService {}
    }

    fn signed_token(expires_at: Option<i64>, refresh_token: Option<&str>) -> String {
        let record = SessionRecord {
            subject_id: "user-123".to_string(),
            email: "user@example.com".to_string(),
            access_token: "provider-access-token".to_string(),
            refresh_token: refresh_token.map(|s| s.to_string()),
            expires_at,
        };
        codec().serialize_session(&record, SECRET).unwrap()
    }

    #[actix_web::test]
    async fn test_no_cookie_is_anonymous_without_provider_call() {
        let provider = FakeProvider::new(RefreshScript::Success);
        let outcome = authenticate_request(None, Some(SECRET), &codec(), &provider).await;

        assert!(matches!(
            outcome,
            GateOutcome::Anonymous {
                clear_cookie: false
            }
        ));
        assert_eq!(provider.refresh_call_count(), 0);
    }

    #[actix_web::test]
    async fn test_missing_secret_is_anonymous_and_preserves_cookie() {
        let provider = FakeProvider::new(RefreshScript::Success);
        let token = signed_token(None, None);
        let outcome = authenticate_request(Some(&token), None, &codec(), &provider).await;

        assert!(matches!(
            outcome,
            GateOutcome::Anonymous {
                clear_cookie: false
            }
        ));
        assert_eq!(provider.refresh_call_count(), 0);
    }

    #[actix_web::test]
    async fn test_valid_cookie_authenticates_without_provider_call() {
        let provider = FakeProvider::new(RefreshScript::Success);
        let token = signed_token(Some(Utc::now().timestamp() + 3600), Some("rt"));
        let outcome = authenticate_request(Some(&token), Some(SECRET), &codec(), &provider).await;

        match outcome {
            GateOutcome::Authenticated {
                identity,
                renewed_token,
            } => {
                assert_eq!(identity.subject_id, "user-123");
                assert_eq!(identity.email, "user@example.com");
                assert!(renewed_token.is_none());
            }
            other => panic!("인증 성공이어야 합니다: {:?}", other),
        }
        assert_eq!(provider.refresh_call_count(), 0);
    }

    #[actix_web::test]
    async fn test_expired_cookie_refreshes_and_reissues() {
        let provider = FakeProvider::new(RefreshScript::Success);
        let token = signed_token(Some(Utc::now().timestamp() - 60), Some("old-refresh-token"));
        let outcome = authenticate_request(Some(&token), Some(SECRET), &codec(), &provider).await;

        match outcome {
            GateOutcome::Authenticated {
                identity,
                renewed_token,
            } => {
                assert_eq!(identity.subject_id, "user-123");

                // 재발급된 쿠키는 새 액세스 토큰을 담은 유효한 서명 토큰이어야 한다
                let renewed = renewed_token.expect("쿠키가 재발급되어야 합니다");
                let record = codec().deserialize_session(&renewed, SECRET).unwrap();
                assert_eq!(record.access_token, "refreshed-access-token");
                assert_eq!(
                    record.refresh_token.as_deref(),
                    Some("refreshed-refresh-token")
                );
            }
            other => panic!("인증 성공이어야 합니다: {:?}", other),
        }
        assert_eq!(provider.refresh_call_count(), 1);
    }

    #[actix_web::test]
    async fn test_expired_cookie_refresh_rejected_clears_cookie() {
        let provider = FakeProvider::new(RefreshScript::Rejected);
        let token = signed_token(Some(Utc::now().timestamp() - 60), Some("old-refresh-token"));
        let outcome = authenticate_request(Some(&token), Some(SECRET), &codec(), &provider).await;

        assert!(matches!(
            outcome,
            GateOutcome::Anonymous { clear_cookie: true }
        ));
        assert_eq!(provider.refresh_call_count(), 1);
    }

    #[actix_web::test]
    async fn test_expired_cookie_refresh_transport_error_clears_cookie() {
        let provider = FakeProvider::new(RefreshScript::TransportError);
        let token = signed_token(Some(Utc::now().timestamp() - 60), Some("old-refresh-token"));
        let outcome = authenticate_request(Some(&token), Some(SECRET), &codec(), &provider).await;

        // 프로바이더 에러는 전파되지 않고 익명 + 쿠키 제거로 끝난다
        assert!(matches!(
            outcome,
            GateOutcome::Anonymous { clear_cookie: true }
        ));
        assert_eq!(provider.refresh_call_count(), 1);
    }

    #[actix_web::test]
    async fn test_expired_cookie_without_refresh_token_clears_cookie() {
        let provider = FakeProvider::new(RefreshScript::Success);
        let token = signed_token(Some(Utc::now().timestamp() - 60), None);
        let outcome = authenticate_request(Some(&token), Some(SECRET), &codec(), &provider).await;

        assert!(matches!(
            outcome,
            GateOutcome::Anonymous { clear_cookie: true }
        ));
        assert_eq!(provider.refresh_call_count(), 0);
    }

    #[actix_web::test]
    async fn test_tampered_cookie_clears_without_provider_call() {
        let provider = FakeProvider::new(RefreshScript::Success);
        let token = signed_token(Some(Utc::now().timestamp() - 60), Some("rt"));

        // 서명 마지막 문자를 변조
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        let outcome =
            authenticate_request(Some(&tampered), Some(SECRET), &codec(), &provider).await;

        // 변조는 리프레시 로직에 도달하기 전에 걸러진다
        assert!(matches!(
            outcome,
            GateOutcome::Anonymous { clear_cookie: true }
        ));
        assert_eq!(provider.refresh_call_count(), 0);
    }
}
