use chrono::Utc;
use serde::Deserialize;
use crate::domain::models::provider::provider_user::{ProviderUser, ProviderUserResponse};
use crate::domain::models::session::SessionRecord;

/// 프로바이더가 발급한 한 벌의 세션 크리덴셜 (도메인 표현)
///
/// 로그인/가입/리프레시 응답에서 생성되며, 세션 코덱이 서명해 쿠키로 내려갑니다.
#[derive(Debug, Clone)]
pub struct ProviderSession {
    /// 프로바이더가 발급한 사용자 고유 식별자
    pub subject_id: String,

    /// 사용자 이메일
    pub email: String,

    /// 프로바이더 액세스 토큰
    pub access_token: String,

    /// 리프레시 토큰 (프로바이더가 발급한 경우에만)
    pub refresh_token: Option<String>,

    /// 액세스 토큰 만료 시각 (epoch 초)
    pub expires_at: Option<i64>,
}

/// 프로바이더 인증 작업의 결과
///
/// `session`은 이메일 확인이 필요한 가입 직후처럼 프로바이더가 토큰을
/// 발급하지 않은 경우 `None`입니다.
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub user: ProviderUser,
    pub session: Option<ProviderSession>,
}

/// 프로바이더 토큰 발급 API 응답 와이어 모델
///
/// `POST /auth/v1/token?grant_type=password` 및
/// `POST /auth/v1/token?grant_type=refresh_token` 응답 형식입니다.
#[derive(Debug, Deserialize)]
pub struct ProviderTokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,

    /// 절대 만료 시각 (epoch 초). 구버전 프로바이더는 생략할 수 있음
    pub expires_at: Option<i64>,

    /// 상대 만료 시간 (초). `expires_at`이 없을 때의 대체 계산용
    pub expires_in: Option<i64>,

    pub user: ProviderUserResponse,
}

/// 프로바이더 에러 응답 와이어 모델
///
/// 프로바이더 버전에 따라 `msg`, `error_description`, `error` 중 하나로
/// 메시지가 내려옵니다.
#[derive(Debug, Deserialize)]
pub struct ProviderErrorResponse {
    pub msg: Option<String>,
    pub error_description: Option<String>,
    pub error: Option<String>,
}

impl ProviderErrorResponse {
    /// 사용 가능한 에러 메시지를 하나 고릅니다.
    pub fn message(&self) -> String {
        self.msg
            .clone()
            .or_else(|| self.error_description.clone())
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| "프로바이더가 요청을 거부했습니다".to_string())
    }
}

impl ProviderTokenResponse {
    /// 와이어 모델을 도메인 `AuthResult`로 변환합니다.
    ///
    /// `expires_at`이 없으면 `expires_in`과 현재 시각으로 계산합니다.
    pub fn into_auth_result(self) -> AuthResult {
        let expires_at = self
            .expires_at
            .or_else(|| self.expires_in.map(|secs| Utc::now().timestamp() + secs));

        let user = ProviderUser::from(self.user);

        let session = ProviderSession {
            subject_id: user.id.clone(),
            email: user.email.clone(),
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
        };

        AuthResult {
            user,
            session: Some(session),
        }
    }
}

impl From<ProviderSession> for SessionRecord {
    fn from(session: ProviderSession) -> Self {
        SessionRecord {
            subject_id: session.subject_id,
            email: session.email,
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            expires_at: session.expires_at,
        }
    }
}
