//! 세션 쿠키 코덱 서비스 구현
//!
//! HMAC-SHA256으로 서명된 세션 쿠키의 생성과 검증을 담당합니다.
//! 세션 레코드를 변조 증거가 남는 문자열로 직렬화하고, 두 가지 검증 모드
//! (만료 강제 / 만료 허용)로 되돌려 파싱합니다.
//!
//! ## 토큰 형식
//!
//! ```text
//! base64url(페이로드 JSON) + "." + base64url(HMAC-SHA256(페이로드 세그먼트, 비밀키))
//! ```
//!
//! 패딩 없는 base64url 알파벳에는 `.`이 없으므로 마지막 `.` 기준 분리가
//! 안전합니다. 서명은 인코딩된 페이로드 세그먼트 바이트를 그대로 덮으므로
//! 페이로드 세그먼트의 어떤 변형도 서명을 무효화합니다.

use base64::{Engine as _, engine::general_purpose};
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use singleton_macro::service;
use actix_web::cookie::{Cookie, SameSite, time::Duration};
use crate::config::{Environment, SessionConfig};
use crate::domain::models::session::SessionRecord;
use crate::errors::{AppError, ErrorContext};

/// 세션 쿠키 이름
pub const SESSION_COOKIE_NAME: &str = "up_session";

/// 세션 쿠키 Max-Age (7일, 초 단위)
pub const SESSION_COOKIE_MAX_AGE: i64 = 60 * 60 * 24 * 7;

type HmacSha256 = Hmac<Sha256>;

/// 검증 실패 사유 (내부 전용)
///
/// 로깅/디버깅을 위해서만 구분하며, 공개 API 경계에서는 전부 `None`으로
/// 붕괴됩니다. 호출자(그리고 공격자)는 변조/형식 불량/필드 누락을 구분할 수
/// 없습니다.
#[derive(Debug)]
enum SessionRejection {
    /// 구분자 없음, 빈 세그먼트, 깨진 인코딩, JSON 파싱 실패
    Malformed,
    /// 서명 불일치
    Tampered,
    /// 서명은 유효하지만 필수 필드가 비어 있음
    MissingField,
}

/// 세션 쿠키 코덱 서비스
///
/// 상태 없는 순수 변환만 수행합니다. 비밀키는 매 호출 시 인자로 받으므로
/// 테스트에서 케이스별로 다른 비밀키를 사용할 수 있습니다.
#[service(name = "session")]
pub struct SessionService {
    // 외부 의존성 없음
}

impl SessionService {
    /// 세션 레코드를 서명된 쿠키 값으로 직렬화
    ///
    /// 레코드를 정규 JSON으로 인코딩한 뒤 패딩 없는 base64url로 감싸고,
    /// 그 인코딩된 페이로드 바이트 위에 HMAC-SHA256 서명을 계산합니다.
    /// 동일한 입력에 대해 항상 동일한 토큰을 생성합니다 (필드 선언 순서가
    /// 정규 순서이므로).
    ///
    /// # Arguments
    ///
    /// * `record` - 서명할 세션 레코드
    /// * `secret` - 세션 서명 비밀키 (최소 32자)
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - `페이로드.서명` 형태의 서명된 토큰
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 비밀키가 32자 미만
    /// * `AppError::InternalError` - JSON 직렬화 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let session_service = SessionService::instance();
    /// let token = session_service.serialize_session(&record, secret)?;
    /// // token = "eyJzdWJqZWN0SWQiOi4uLn0.3q2-7w..."
    /// ```
    pub fn serialize_session(
        &self,
        record: &SessionRecord,
        secret: &str,
    ) -> Result<String, AppError> {
        if secret.len() < SessionConfig::MIN_SECRET_LEN {
            return Err(AppError::ConfigError(format!(
                "세션 서명 비밀키가 너무 짧습니다. 최소 {}자 이상이어야 합니다",
                SessionConfig::MIN_SECRET_LEN
            )));
        }

        let payload_json =
            serde_json::to_vec(record).context("세션 페이로드 직렬화 실패")?;
        let payload = general_purpose::URL_SAFE_NO_PAD.encode(&payload_json);

        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .context("HMAC 키 초기화 실패")?;
        mac.update(payload.as_bytes());
        let signature = general_purpose::URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(format!("{}.{}", payload, signature))
    }

    /// 서명된 토큰을 검증하고 세션 레코드로 역직렬화 (만료 강제)
    ///
    /// 매 요청의 빠른 경로입니다. 서명 검증에 더해 `expires_at`이 현재 시각보다
    /// 과거이면 거부합니다.
    ///
    /// # Arguments
    ///
    /// * `token` - 쿠키에서 읽은 토큰 문자열
    /// * `secret` - 세션 서명 비밀키
    ///
    /// # Returns
    ///
    /// * `Some(SessionRecord)` - 서명이 유효하고 만료되지 않은 경우
    /// * `None` - 변조, 형식 불량, 필수 필드 누락, 만료 (사유는 구분되지 않음)
    pub fn deserialize_session(&self, token: &str, secret: &str) -> Option<SessionRecord> {
        let record = self.verify_signature(token, secret)?;

        if record.is_expired_at(Utc::now().timestamp_millis()) {
            log::debug!("세션 토큰 거부: 만료됨 (subject: {})", record.subject_id);
            return None;
        }

        Some(record)
    }

    /// 서명만 검증하고 만료는 무시하는 역직렬화
    ///
    /// 서명이 유효하면 토큰이 이 서버에서 정당하게 발급되었음이 증명되므로,
    /// 만료된 토큰이라도 리프레시 토큰이 있다면 조용한 갱신을 시도할 가치가
    /// 있습니다. 그 판단 전용입니다.
    pub fn deserialize_session_allow_expired(
        &self,
        token: &str,
        secret: &str,
    ) -> Option<SessionRecord> {
        self.verify_signature(token, secret)
    }

    /// 서명 검증 공통 프리미티브
    ///
    /// 실패 사유를 로그에만 남기고 `None`으로 붕괴시킵니다.
    fn verify_signature(&self, token: &str, secret: &str) -> Option<SessionRecord> {
        match self.check_token(token, secret) {
            Ok(record) => Some(record),
            Err(rejection) => {
                log::debug!("세션 토큰 거부: {:?}", rejection);
                None
            }
        }
    }

    /// 토큰 검증 본체
    ///
    /// 1. 마지막 `.` 기준으로 페이로드/서명 세그먼트 분리
    /// 2. 페이로드 세그먼트 위에 기대 서명을 재계산하여 상수 시간 비교
    ///    (`Mac::verify_slice`는 길이 불일치를 비교 전에 거부하고, 길이가 같을
    ///    때만 상수 시간으로 비교하므로 타이밍 부채널이 없습니다)
    /// 3. 페이로드 디코딩 및 JSON 파싱
    /// 4. 필수 필드(subject/email/access token) 비어 있지 않은지 확인
    ///
    /// `expires_at`은 여기서 절대 확인하지 않습니다. 두 공개 모드의 책임입니다.
    fn check_token(&self, token: &str, secret: &str) -> Result<SessionRecord, SessionRejection> {
        let (payload, signature) = token.rsplit_once('.').ok_or(SessionRejection::Malformed)?;

        if payload.is_empty() || signature.is_empty() {
            return Err(SessionRejection::Malformed);
        }

        let signature_bytes = general_purpose::URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| SessionRejection::Malformed)?;

        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|_| SessionRejection::Tampered)?;
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature_bytes)
            .map_err(|_| SessionRejection::Tampered)?;

        let payload_json = general_purpose::URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| SessionRejection::Malformed)?;
        let record: SessionRecord =
            serde_json::from_slice(&payload_json).map_err(|_| SessionRejection::Malformed)?;

        if !record.has_required_fields() {
            return Err(SessionRejection::MissingField);
        }

        Ok(record)
    }
}

/// 세션 쿠키 생성
///
/// HttpOnly + SameSite=Lax + 7일 Max-Age 고정이며, `Secure` 속성은 실행
/// 환경에 따라 결정됩니다 (스테이징/프로덕션에서만 적용).
pub fn session_cookie(value: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE_NAME, value)
        .http_only(true)
        .secure(Environment::current().requires_secure_cookies())
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(SESSION_COOKIE_MAX_AGE))
        .path("/")
        .finish()
}

/// 세션 쿠키 제거용 쿠키 생성
pub fn session_removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE_NAME, "");
    cookie.set_path("/");
    cookie.make_removal();
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-session-secret-0123456789abcdef";
    const OTHER_SECRET: &str = "another-session-secret-fedcba9876543210";

    fn codec() -> SessionService {
        SessionService {}
    }

    fn sample_record(expires_at: Option<i64>) -> SessionRecord {
        SessionRecord {
            subject_id: "user-123".to_string(),
            email: "user@example.com".to_string(),
            access_token: "provider-access-token".to_string(),
            refresh_token: Some("provider-refresh-token".to_string()),
            expires_at,
        }
    }

    /// 임의의 페이로드 JSON에 올바른 서명을 붙인 토큰 생성 (테스트 전용)
    fn sign_raw_payload(payload_json: &str, secret: &str) -> String {
        let payload = general_purpose::URL_SAFE_NO_PAD.encode(payload_json.as_bytes());
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(payload.as_bytes());
        let signature = general_purpose::URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
        format!("{}.{}", payload, signature)
    }

    /// 문자열의 지정 위치 문자를 다른 base64url 문자로 교체
    fn flip_char(token: &str, index: usize) -> String {
        let mut bytes = token.as_bytes().to_vec();
        bytes[index] = if bytes[index] == b'A' { b'B' } else { b'A' };
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_round_trip() {
        let record = sample_record(Some(Utc::now().timestamp() + 3600));
        let token = codec().serialize_session(&record, SECRET).unwrap();

        let decoded = codec().deserialize_session(&token, SECRET).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_round_trip_without_expiry() {
        let record = sample_record(None);
        let token = codec().serialize_session(&record, SECRET).unwrap();

        let decoded = codec().deserialize_session(&token, SECRET).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let record = sample_record(Some(1_700_000_000));
        let first = codec().serialize_session(&record, SECRET).unwrap();
        let second = codec().serialize_session(&record, SECRET).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_short_secret_rejected() {
        let record = sample_record(None);
        let result = codec().serialize_session(&record, "too-short");
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_payload_tampering_detected() {
        let record = sample_record(None);
        let token = codec().serialize_session(&record, SECRET).unwrap();

        // 페이로드 세그먼트의 모든 위치에 대해 한 문자 변형이 검증을 깨야 한다
        let payload_len = token.rfind('.').unwrap();
        for index in 0..payload_len {
            let tampered = flip_char(&token, index);
            assert!(
                codec().deserialize_session(&tampered, SECRET).is_none(),
                "페이로드 {}번째 문자 변조가 통과됨",
                index
            );
        }
    }

    #[test]
    fn test_signature_tampering_detected() {
        let record = sample_record(None);
        let token = codec().serialize_session(&record, SECRET).unwrap();

        let signature_start = token.rfind('.').unwrap() + 1;
        for index in signature_start..token.len() {
            let tampered = flip_char(&token, index);
            assert!(
                codec().deserialize_session(&tampered, SECRET).is_none(),
                "서명 {}번째 문자 변조가 통과됨",
                index
            );
        }
    }

    #[test]
    fn test_secret_mismatch_rejected() {
        let record = sample_record(None);
        let token = codec().serialize_session(&record, SECRET).unwrap();

        assert!(codec().deserialize_session(&token, OTHER_SECRET).is_none());
        assert!(
            codec()
                .deserialize_session_allow_expired(&token, OTHER_SECRET)
                .is_none()
        );
    }

    #[test]
    fn test_expired_token_strict_vs_allow_expired() {
        let record = sample_record(Some(Utc::now().timestamp() - 60));
        let token = codec().serialize_session(&record, SECRET).unwrap();

        // 만료 강제 모드에서는 거부
        assert!(codec().deserialize_session(&token, SECRET).is_none());

        // 만료 허용 모드에서는 동일한 필드로 복원
        let decoded = codec()
            .deserialize_session_allow_expired(&token, SECRET)
            .unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_missing_required_field_rejected_despite_valid_signature() {
        // subjectId가 빠진, 서명은 올바른 페이로드
        let token = sign_raw_payload(
            r#"{"email":"user@example.com","accessToken":"at"}"#,
            SECRET,
        );
        assert!(codec().deserialize_session(&token, SECRET).is_none());
        assert!(
            codec()
                .deserialize_session_allow_expired(&token, SECRET)
                .is_none()
        );

        // 필수 필드가 빈 문자열인 경우도 동일
        let token = sign_raw_payload(
            r#"{"subjectId":"","email":"user@example.com","accessToken":"at"}"#,
            SECRET,
        );
        assert!(codec().deserialize_session(&token, SECRET).is_none());
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        assert!(codec().deserialize_session("", SECRET).is_none());
        assert!(codec().deserialize_session("no-separator", SECRET).is_none());
        assert!(codec().deserialize_session(".signature-only", SECRET).is_none());
        assert!(codec().deserialize_session("payload-only.", SECRET).is_none());
        assert!(
            codec()
                .deserialize_session("not base64!.also not base64!", SECRET)
                .is_none()
        );
    }

    #[test]
    fn test_garbage_payload_with_valid_signature_rejected() {
        // 서명은 올바르지만 페이로드가 JSON이 아닌 경우
        let payload = general_purpose::URL_SAFE_NO_PAD.encode(b"this is not json");
        let mut mac = HmacSha256::new_from_slice(SECRET.as_bytes()).unwrap();
        mac.update(payload.as_bytes());
        let signature = general_purpose::URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
        let token = format!("{}.{}", payload, signature);

        assert!(codec().deserialize_session(&token, SECRET).is_none());
    }

    #[test]
    fn test_cookie_attributes() {
        let cookie = session_cookie("token-value".to_string());

        assert_eq!(cookie.name(), SESSION_COOKIE_NAME);
        assert_eq!(cookie.value(), "token-value");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(
            cookie.max_age(),
            Some(Duration::seconds(SESSION_COOKIE_MAX_AGE))
        );
    }

    #[test]
    fn test_removal_cookie() {
        let cookie = session_removal_cookie();

        assert_eq!(cookie.name(), SESSION_COOKIE_NAME);
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
