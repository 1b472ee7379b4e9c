//! 세션 쿠키에 서명되어 담기는 페이로드 구조체
//!
//! 세션 레코드는 서버 측에 저장되지 않습니다. 쿠키가 곧 저장소이며,
//! 레코드는 로그인/가입/리프레시 응답마다 새로 생성됩니다.

use serde::{Deserialize, Serialize};

/// 서명된 세션 페이로드
///
/// HMAC-SHA256으로 서명되어 `up_session` 쿠키에 담기는 레코드입니다.
/// `subject_id`, `email`, `access_token`이 비어 있으면 서명이 유효하더라도
/// 코덱이 파싱 단계에서 거부합니다.
///
/// ## 직렬화 순서 주의
///
/// 서명은 직렬화된 JSON 바이트 위에 계산되므로, 필드 선언 순서가 곧
/// 와이어 포맷의 정규 순서입니다. serde_json은 구조체 필드를 선언 순서대로
/// 출력하므로 필드 순서를 바꾸면 이미 발급된 쿠키가 전부 무효화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// 프로바이더가 발급한 사용자 고유 식별자
    #[serde(default)]
    pub subject_id: String,

    /// 사용자 이메일
    #[serde(default)]
    pub email: String,

    /// 프로바이더 액세스 토큰 (불투명한 베어러 크리덴셜, 내용을 해석하지 않음)
    #[serde(default)]
    pub access_token: String,

    /// 프로바이더가 발급한 경우에만 존재하는 리프레시 토큰
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// 액세스 토큰 만료 시각 (epoch 초). 없으면 코덱 관점에서는 무기한
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

impl SessionRecord {
    /// 필수 필드(`subject_id`, `email`, `access_token`)가 모두 채워져 있는지 확인합니다.
    pub fn has_required_fields(&self) -> bool {
        !self.subject_id.is_empty() && !self.email.is_empty() && !self.access_token.is_empty()
    }

    /// 주어진 시각(epoch 밀리초) 기준으로 만료되었는지 확인합니다.
    ///
    /// `expires_at`이 없으면 만료되지 않은 것으로 취급합니다.
    pub fn is_expired_at(&self, now_millis: i64) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at * 1000 < now_millis,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> SessionRecord {
        SessionRecord {
            subject_id: "user-123".to_string(),
            email: "user@example.com".to_string(),
            access_token: "provider-access-token".to_string(),
            refresh_token: Some("provider-refresh-token".to_string()),
            expires_at: Some(1_700_000_000),
        }
    }

    #[test]
    fn test_required_fields() {
        assert!(sample_record().has_required_fields());

        let mut missing_subject = sample_record();
        missing_subject.subject_id = String::new();
        assert!(!missing_subject.has_required_fields());

        let mut missing_email = sample_record();
        missing_email.email = String::new();
        assert!(!missing_email.has_required_fields());

        let mut missing_token = sample_record();
        missing_token.access_token = String::new();
        assert!(!missing_token.has_required_fields());
    }

    #[test]
    fn test_expiry_check() {
        let record = sample_record();
        let expires_at_millis = 1_700_000_000 * 1000;

        assert!(!record.is_expired_at(expires_at_millis - 1));
        assert!(record.is_expired_at(expires_at_millis + 1));

        // expires_at이 없으면 만료되지 않음
        let mut forever = sample_record();
        forever.expires_at = None;
        assert!(!forever.is_expired_at(i64::MAX));
    }

    #[test]
    fn test_canonical_field_order() {
        // 필드 선언 순서가 와이어 포맷 순서와 일치해야 한다 (서명 재현성)
        let json = serde_json::to_string(&sample_record()).unwrap();
        let subject_pos = json.find("subjectId").unwrap();
        let email_pos = json.find("\"email\"").unwrap();
        let access_pos = json.find("accessToken").unwrap();
        let refresh_pos = json.find("refreshToken").unwrap();
        let expires_pos = json.find("expiresAt").unwrap();

        assert!(subject_pos < email_pos);
        assert!(email_pos < access_pos);
        assert!(access_pos < refresh_pos);
        assert!(refresh_pos < expires_pos);
    }

    #[test]
    fn test_optional_fields_omitted_from_wire() {
        let record = SessionRecord {
            subject_id: "user-123".to_string(),
            email: "user@example.com".to_string(),
            access_token: "at".to_string(),
            refresh_token: None,
            expires_at: None,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("refreshToken"));
        assert!(!json.contains("expiresAt"));
    }

    #[test]
    fn test_missing_required_field_deserializes_empty() {
        // 서명은 올바르지만 필수 필드가 빠진 페이로드는 빈 문자열로 역직렬화되어
        // has_required_fields 검사에서 걸러진다
        let json = r#"{"email":"user@example.com","accessToken":"at"}"#;
        let record: SessionRecord = serde_json::from_str(json).unwrap();
        assert!(!record.has_required_fields());
    }
}
