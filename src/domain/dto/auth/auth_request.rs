//! 인증 요청관련 DTO
//!
//! 로그인/가입을 요청하는 사용자들의 요청 정보를 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// 로그인 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 가입 요청 구조체
///
/// 약관/개인정보 동의 플래그는 프로바이더로 전달하지 않고 요청 기록용으로만
/// 받습니다 (원 클라이언트 계약 유지).
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    pub password: String,

    pub terms_accepted: Option<bool>,
    pub privacy_accepted: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_validation() {
        let valid = LoginRequest {
            email: "user@example.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = LoginRequest {
            email: "not-an-email".to_string(),
            password: "password123".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let empty_password = LoginRequest {
            email: "user@example.com".to_string(),
            password: String::new(),
        };
        assert!(empty_password.validate().is_err());
    }

    #[test]
    fn test_register_request_validation() {
        let short_password = RegisterRequest {
            email: "user@example.com".to_string(),
            password: "12345".to_string(),
            terms_accepted: Some(true),
            privacy_accepted: Some(true),
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_register_request_optional_flags() {
        // 동의 플래그는 선택 사항이므로 없어도 역직렬화되어야 한다
        let json = r#"{"email":"user@example.com","password":"password123"}"#;
        let request: RegisterRequest = serde_json::from_str(json).unwrap();
        assert!(request.terms_accepted.is_none());
        assert!(request.validate().is_ok());
    }
}
