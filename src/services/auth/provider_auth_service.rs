//! # 호스팅 아이덴티티 프로바이더 인증 서비스
//!
//! 크리덴셜 검증을 호스팅 아이덴티티 프로바이더(GoTrue 계열 REST API)에
//! 위임하는 서비스입니다. 이 게이트웨이는 비밀번호를 직접 다루지 않으며,
//! 모든 인증 작업은 프로바이더 API 한 번 호출로 끝납니다.
//!
//! ## 인증 플로우
//!
//! ```text
//! ┌─────────────┐                  ┌─────────────────┐                ┌──────────────────┐
//! │  클라이언트   │                  │   게이트웨이      │                │  아이덴티티 프로바이더 │
//! └─────────────┘                  └─────────────────┘                └──────────────────┘
//!        │ POST /api/auth/login            │                                  │
//!        ├────────────────────────────────►│ POST /auth/v1/token              │
//!        │                                 ├─────────────────────────────────►│
//!        │                                 │ access/refresh 토큰 + 사용자       │
//!        │                                 │◄─────────────────────────────────┤
//!        │ Set-Cookie: up_session (서명됨)  │                                  │
//!        │◄────────────────────────────────┤                                  │
//! ```
//!
//! ## 사용하는 프로바이더 엔드포인트
//!
//! | 용도 | 엔드포인트 | 키 |
//! |------|------------|-----|
//! | 로그인 | `POST /auth/v1/token?grant_type=password` | anon |
//! | 가입 | `POST /auth/v1/signup` | anon |
//! | 토큰 갱신 | `POST /auth/v1/token?grant_type=refresh_token` | anon |
//! | 토큰 검증 | `GET /auth/v1/user` | service-role |
//! | 사용자 조회 | `GET /auth/v1/admin/users/{id}` | service-role |
//! | 메타데이터 갱신 | `PUT /auth/v1/admin/users/{id}` | service-role |
//!
//! ## 에러 경계
//!
//! - 프로바이더의 **거부**(잘못된 크리덴셜, 만료된 리프레시 토큰)는 작업 성격에
//!   맞는 에러 또는 `None`으로 변환됩니다.
//! - **전송 계층 실패**(타임아웃 포함)는 `ExternalServiceError`로 변환되며,
//!   세션 게이트에서는 리프레시 실패와 동일하게 처리됩니다.

use async_trait::async_trait;
use singleton_macro::service;
use crate::config::ProviderConfig;
use crate::domain::models::provider::{
    AuthResult, ProviderErrorResponse, ProviderTokenResponse, ProviderUser, ProviderUserResponse,
};
use crate::errors::AppError;

/// 아이덴티티 프로바이더 기능 인터페이스
///
/// 프로덕션 구현은 실제 프로바이더 REST API에 바인딩되고, 테스트는 스크립트된
/// 결과를 반환하는 인메모리 페이크에 바인딩됩니다.
#[async_trait]
pub trait ProviderAuth: Send + Sync {
    /// 이메일/비밀번호 로그인
    ///
    /// 프로바이더가 크리덴셜을 거부하면 프로바이더 메시지를 담은
    /// `AuthenticationError`를 반환합니다.
    async fn login(&self, email: &str, password: &str) -> Result<AuthResult, AppError>;

    /// 신규 사용자 가입
    ///
    /// 프로바이더가 이메일 확인을 요구하는 경우 결과의 `session`이 `None`입니다.
    async fn register(&self, email: &str, password: &str) -> Result<AuthResult, AppError>;

    /// 액세스 토큰 검증 및 사용자 조회
    ///
    /// 프로바이더가 토큰을 거부하면 `Ok(None)`을 반환합니다.
    async fn verify_token(&self, access_token: &str) -> Result<Option<ProviderUser>, AppError>;

    /// 리프레시 토큰으로 새 세션 발급
    ///
    /// 프로바이더가 토큰을 거부하면 `Ok(None)`, 전송 실패는 `Err`입니다.
    /// 세션 게이트는 둘 다 리프레시 실패로 취급합니다.
    async fn refresh_session(&self, refresh_token: &str) -> Result<Option<AuthResult>, AppError>;

    /// 사용자 ID로 프로바이더 사용자 조회 (관리자 API)
    async fn get_user_by_id(&self, user_id: &str) -> Result<Option<ProviderUser>, AppError>;

    /// 사용자 메타데이터에 온보딩 완료 표시 (관리자 API)
    async fn mark_onboarding_completed(&self, user_id: &str) -> Result<(), AppError>;
}

/// 호스팅 아이덴티티 프로바이더 인증 서비스
///
/// 상태를 갖지 않으며 매 호출마다 설정에서 접속 정보를 읽습니다.
/// 설정 누락은 프로세스 시작이 아니라 최초 호출 시점에 `ConfigError`로
/// 드러납니다.
#[service]
pub struct ProviderAuthService {
    // 외부 의존성 없음
}

impl ProviderAuthService {
    /// 요청 타임아웃이 적용된 HTTP 클라이언트 생성
    fn client(&self) -> Result<reqwest::Client, AppError> {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(
                ProviderConfig::request_timeout_secs(),
            ))
            .build()
            .map_err(|e| {
                AppError::InternalError(format!("HTTP 클라이언트 생성 실패: {}", e))
            })
    }

    /// 실패 응답에서 프로바이더 에러 메시지 추출
    async fn error_message(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<ProviderErrorResponse>().await {
            Ok(body) => body.message(),
            Err(_) => format!("프로바이더가 {} 상태로 응답했습니다", status),
        }
    }
}

#[async_trait]
impl ProviderAuth for ProviderAuthService {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResult, AppError> {
        let base_url = ProviderConfig::url()?;
        let anon_key = ProviderConfig::anon_key()?;

        let response = self
            .client()?
            .post(format!("{}/auth/v1/token", base_url))
            .query(&[("grant_type", "password")])
            .header("apikey", &anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("프로바이더 로그인 요청 실패: {}", e))
            })?;

        if !response.status().is_success() {
            let message = Self::error_message(response).await;
            log::warn!("로그인 거부됨 - 사용자: {}, 사유: {}", email, message);
            return Err(AppError::AuthenticationError(message));
        }

        let token_response = response.json::<ProviderTokenResponse>().await.map_err(|e| {
            AppError::ExternalServiceError(format!("프로바이더 로그인 응답 파싱 실패: {}", e))
        })?;

        Ok(token_response.into_auth_result())
    }

    async fn register(&self, email: &str, password: &str) -> Result<AuthResult, AppError> {
        let base_url = ProviderConfig::url()?;
        let anon_key = ProviderConfig::anon_key()?;

        let response = self
            .client()?
            .post(format!("{}/auth/v1/signup", base_url))
            .header("apikey", &anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("프로바이더 가입 요청 실패: {}", e))
            })?;

        if !response.status().is_success() {
            let message = Self::error_message(response).await;
            log::warn!("가입 거부됨 - 사용자: {}, 사유: {}", email, message);
            return Err(AppError::ValidationError(message));
        }

        // 이메일 자동 확인이 켜진 프로바이더는 토큰 응답을, 확인이 필요한
        // 프로바이더는 세션 없는 사용자 객체를 반환한다
        let body = response.text().await.map_err(|e| {
            AppError::ExternalServiceError(format!("프로바이더 가입 응답 읽기 실패: {}", e))
        })?;

        if let Ok(token_response) = serde_json::from_str::<ProviderTokenResponse>(&body) {
            return Ok(token_response.into_auth_result());
        }

        let user_response = serde_json::from_str::<ProviderUserResponse>(&body).map_err(|e| {
            AppError::ExternalServiceError(format!("프로바이더 가입 응답 파싱 실패: {}", e))
        })?;

        Ok(AuthResult {
            user: ProviderUser::from(user_response),
            session: None,
        })
    }

    async fn verify_token(&self, access_token: &str) -> Result<Option<ProviderUser>, AppError> {
        let base_url = ProviderConfig::url()?;
        let service_role_key = ProviderConfig::service_role_key()?;

        let response = self
            .client()?
            .get(format!("{}/auth/v1/user", base_url))
            .header("apikey", &service_role_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("프로바이더 토큰 검증 요청 실패: {}", e))
            })?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let user_response = response.json::<ProviderUserResponse>().await.map_err(|e| {
            AppError::ExternalServiceError(format!("프로바이더 사용자 응답 파싱 실패: {}", e))
        })?;

        Ok(Some(ProviderUser::from(user_response)))
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<Option<AuthResult>, AppError> {
        let base_url = ProviderConfig::url()?;
        let anon_key = ProviderConfig::anon_key()?;

        let response = self
            .client()?
            .post(format!("{}/auth/v1/token", base_url))
            .query(&[("grant_type", "refresh_token")])
            .header("apikey", &anon_key)
            .json(&serde_json::json!({ "refresh_token": refresh_token }))
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("프로바이더 토큰 갱신 요청 실패: {}", e))
            })?;

        if !response.status().is_success() {
            let message = Self::error_message(response).await;
            log::info!("토큰 갱신 거부됨: {}", message);
            return Ok(None);
        }

        let token_response = response.json::<ProviderTokenResponse>().await.map_err(|e| {
            AppError::ExternalServiceError(format!("프로바이더 갱신 응답 파싱 실패: {}", e))
        })?;

        Ok(Some(token_response.into_auth_result()))
    }

    async fn get_user_by_id(&self, user_id: &str) -> Result<Option<ProviderUser>, AppError> {
        let base_url = ProviderConfig::url()?;
        let service_role_key = ProviderConfig::service_role_key()?;

        let response = self
            .client()?
            .get(format!("{}/auth/v1/admin/users/{}", base_url, user_id))
            .header("apikey", &service_role_key)
            .bearer_auth(&service_role_key)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("프로바이더 사용자 조회 요청 실패: {}", e))
            })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let message = Self::error_message(response).await;
            return Err(AppError::ExternalServiceError(format!(
                "프로바이더 사용자 조회 실패: {}",
                message
            )));
        }

        let user_response = response.json::<ProviderUserResponse>().await.map_err(|e| {
            AppError::ExternalServiceError(format!("프로바이더 사용자 응답 파싱 실패: {}", e))
        })?;

        Ok(Some(ProviderUser::from(user_response)))
    }

    async fn mark_onboarding_completed(&self, user_id: &str) -> Result<(), AppError> {
        let base_url = ProviderConfig::url()?;
        let service_role_key = ProviderConfig::service_role_key()?;

        let response = self
            .client()?
            .put(format!("{}/auth/v1/admin/users/{}", base_url, user_id))
            .header("apikey", &service_role_key)
            .bearer_auth(&service_role_key)
            .json(&serde_json::json!({
                "user_metadata": { "onboarding_completed": true }
            }))
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!(
                    "프로바이더 메타데이터 갱신 요청 실패: {}",
                    e
                ))
            })?;

        if !response.status().is_success() {
            let message = Self::error_message(response).await;
            return Err(AppError::ExternalServiceError(format!(
                "프로바이더 메타데이터 갱신 실패: {}",
                message
            )));
        }

        Ok(())
    }
}
