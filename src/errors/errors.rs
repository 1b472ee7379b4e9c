//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 인증 게이트웨이를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 설계 원칙
//!
//! - 설정 누락은 프로세스를 죽이지 않고 해당 요청만 500으로 처리합니다.
//! - 호스팅 아이덴티티 프로바이더의 에러는 게이트웨이 경계에서 잡아
//!   클라이언트에게 스택 트레이스가 아닌 일관된 JSON 메시지로 전달합니다.
//! - 세션 쿠키의 데이터 형식 문제(변조, 만료, 깨진 인코딩)는 에러가 아니라
//!   `Option::None`으로 처리됩니다. 이 타입은 그 외의 에러만 다룹니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn login(data: LoginRequest) -> Result<HttpResponse, AppError> {
//!     if data.email.is_empty() {
//!         return Err(AppError::ValidationError("이메일은 필수입니다".to_string()));
//!     }
//!
//!     let result = provider.login(&data.email, &data.password).await?;
//!     Ok(HttpResponse::Ok().json(result))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 인증 게이트웨이에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 설정값 누락/불량 에러 (500 Internal Server Error)
    ///
    /// 세션 서명 비밀키가 없거나 너무 짧은 경우, 프로바이더 접속 정보가
    /// 설정되지 않은 경우 등. 프로세스 시작이 아니라 최초 사용 시점에 발생합니다.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 외부 아이덴티티 프로바이더 에러 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 `{"message": ...}` 형태의
    /// JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "message": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
