//! # Authentication Configuration Module
//!
//! 세션 쿠키 서명과 호스팅 아이덴티티 프로바이더 접속 설정을 관리하는 모듈입니다.
//! 모든 값은 환경 변수에서 읽으며, 누락/불량 값은 프로세스 시작 시점이 아니라
//! 해당 값을 처음 사용하는 시점에 `AppError::ConfigError`로 드러납니다.
//! 설정이 잘못된 배포는 크래시 대신 "모든 요청이 익명"으로 동작합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### 세션 서명 설정
//! ```bash
//! # 최소 32자. openssl rand -base64 32 등으로 생성
//! export SESSION_SECRET="your-session-signing-secret-at-least-32-chars"
//! ```
//!
//! ### 아이덴티티 프로바이더 설정
//! ```bash
//! export PROVIDER_URL="https://your-project.example.co"
//! export PROVIDER_ANON_KEY="public-anon-key"
//! export PROVIDER_SERVICE_ROLE_KEY="service-role-key"   # 절대 클라이언트에 노출 금지
//! export PROVIDER_TIMEOUT_SECS="10"                     # 선택 (기본값 10초)
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{SessionConfig, ProviderConfig};
//!
//! let secret = SessionConfig::secret()?;       // 최초 호출 시 검증 후 캐시됨
//! let base_url = ProviderConfig::url()?;
//! ```

use std::env;
use once_cell::sync::OnceCell;
use crate::errors::AppError;

/// 세션 쿠키 서명 관련 설정을 관리하는 구조체
///
/// 세션 쿠키는 이 비밀키로 HMAC-SHA256 서명되며, 서버 측 세션 테이블 없이
/// 쿠키 자체가 유일한 세션 저장소입니다. 비밀키가 바뀌면 기존에 발급된
/// 모든 세션 쿠키가 무효화됩니다.
pub struct SessionConfig;

/// 프로세스 전역에서 한 번만 검증/캐시되는 세션 서명 비밀키
///
/// 모든 요청이 같은 환경 변수에서 같은 값을 계산하므로 잠금 없이
/// 최초 사용 시점에 메모이즈해도 안전합니다.
static SESSION_SECRET: OnceCell<String> = OnceCell::new();

impl SessionConfig {
    /// 세션 서명 비밀키의 최소 길이 (문자 수)
    pub const MIN_SECRET_LEN: usize = 32;

    /// 세션 서명에 사용할 비밀키를 반환합니다.
    ///
    /// `SESSION_SECRET` 환경 변수를 최초 호출 시점에 읽어 검증한 뒤
    /// 프로세스 수명 동안 캐시합니다. 이후 호출은 캐시된 값을 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(&'static str)` - 검증된 비밀키
    /// * `Err(AppError::ConfigError)` - 환경 변수 누락 또는 32자 미만
    ///
    /// # 보안 요구사항
    ///
    /// - 최소 32자 (256비트 HMAC 키 권장 길이)
    /// - 암호학적으로 안전한 랜덤 생성
    /// - 환경별로 다른 키 사용
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> Result<&'static str, AppError> {
        SESSION_SECRET
            .get_or_try_init(|| {
                let secret = env::var("SESSION_SECRET").map_err(|_| {
                    AppError::ConfigError(
                        "SESSION_SECRET 환경 변수가 설정되지 않았습니다. \
                         .env 파일에 최소 32자 이상의 값을 설정해주세요"
                            .to_string(),
                    )
                })?;

                if secret.len() < Self::MIN_SECRET_LEN {
                    return Err(AppError::ConfigError(format!(
                        "SESSION_SECRET이 너무 짧습니다 ({}자). 최소 {}자 이상이어야 합니다",
                        secret.len(),
                        Self::MIN_SECRET_LEN
                    )));
                }

                Ok(secret)
            })
            .map(|s| s.as_str())
    }
}

/// 호스팅 아이덴티티 프로바이더 접속 설정을 관리하는 구조체
///
/// 크리덴셜 검증(로그인, 가입, 토큰 갱신)은 전부 외부 프로바이더에 위임되며,
/// 이 게이트웨이는 프로바이더의 REST API만 호출합니다.
///
/// ## 키 구분
///
/// | 키 | 용도 | 노출 범위 |
/// |----|------|-----------|
/// | `anon` | 로그인/가입/토큰 갱신 | 공개 가능 |
/// | `service_role` | 토큰 검증, 관리자 API (사용자 메타데이터) | 서버 전용 |
pub struct ProviderConfig;

impl ProviderConfig {
    /// 프로바이더 API의 베이스 URL을 반환합니다.
    ///
    /// # Errors
    ///
    /// `PROVIDER_URL` 환경 변수가 설정되지 않은 경우 `ConfigError`를 반환합니다.
    pub fn url() -> Result<String, AppError> {
        env::var("PROVIDER_URL").map_err(|_| {
            AppError::ConfigError(
                "PROVIDER_URL 환경 변수가 설정되지 않았습니다".to_string(),
            )
        })
    }

    /// 프로바이더 anonymous 키를 반환합니다.
    ///
    /// 사용자 수준 인증 작업(로그인, 가입, 리프레시)에 사용됩니다.
    ///
    /// # Errors
    ///
    /// `PROVIDER_ANON_KEY` 환경 변수가 설정되지 않은 경우 `ConfigError`를 반환합니다.
    pub fn anon_key() -> Result<String, AppError> {
        env::var("PROVIDER_ANON_KEY").map_err(|_| {
            AppError::ConfigError(
                "PROVIDER_ANON_KEY 환경 변수가 설정되지 않았습니다".to_string(),
            )
        })
    }

    /// 프로바이더 service-role 키를 반환합니다.
    ///
    /// 액세스 토큰 검증과 관리자 API(사용자 메타데이터 조회/갱신)에 사용됩니다.
    /// 이 값은 절대 클라이언트 사이드에 노출되어서는 안 됩니다.
    ///
    /// # Errors
    ///
    /// `PROVIDER_SERVICE_ROLE_KEY` 환경 변수가 설정되지 않은 경우
    /// `ConfigError`를 반환합니다.
    pub fn service_role_key() -> Result<String, AppError> {
        env::var("PROVIDER_SERVICE_ROLE_KEY").map_err(|_| {
            AppError::ConfigError(
                "PROVIDER_SERVICE_ROLE_KEY 환경 변수가 설정되지 않았습니다".to_string(),
            )
        })
    }

    /// 프로바이더 호출의 요청 타임아웃을 초 단위로 반환합니다.
    ///
    /// 게이트는 요청당 최대 한 번만 프로바이더를 호출하며, 타임아웃은
    /// 리프레시 실패와 동일하게 처리됩니다.
    ///
    /// # 기본값
    ///
    /// 10초
    pub fn request_timeout_secs() -> u64 {
        env::var("PROVIDER_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10)
    }
}
