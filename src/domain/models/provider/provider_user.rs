use serde::Deserialize;

/// 아이덴티티 프로바이더가 보관하는 사용자 정보 (도메인 표현)
#[derive(Debug, Clone)]
pub struct ProviderUser {
    /// 프로바이더가 발급한 사용자 고유 식별자
    pub id: String,

    /// 사용자 이메일
    pub email: String,

    /// 온보딩 완료 여부 (프로바이더 user_metadata에서 읽음)
    pub onboarding_completed: bool,
}

/// 프로바이더 사용자 API 응답 와이어 모델
///
/// `GET /auth/v1/user` 및 `GET /auth/v1/admin/users/{id}` 응답 형식입니다.
/// 프로바이더는 이 외에도 많은 필드를 반환하지만 필요한 것만 매핑합니다.
#[derive(Debug, Deserialize)]
pub struct ProviderUserResponse {
    pub id: String,
    pub email: Option<String>,

    /// 자유 형식 사용자 메타데이터. `onboarding_completed` 플래그가 여기에 저장됩니다.
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

impl From<ProviderUserResponse> for ProviderUser {
    fn from(response: ProviderUserResponse) -> Self {
        let onboarding_completed = response
            .user_metadata
            .get("onboarding_completed")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        ProviderUser {
            id: response.id,
            email: response.email.unwrap_or_default(),
            onboarding_completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_parsing() {
        let json = r#"{
            "id": "f6b2c8d0-0000-0000-0000-000000000000",
            "aud": "authenticated",
            "email": "user@example.com",
            "user_metadata": { "onboarding_completed": true }
        }"#;

        let response: ProviderUserResponse = serde_json::from_str(json).unwrap();
        let user = ProviderUser::from(response);

        assert_eq!(user.id, "f6b2c8d0-0000-0000-0000-000000000000");
        assert_eq!(user.email, "user@example.com");
        assert!(user.onboarding_completed);
    }

    #[test]
    fn test_user_response_without_metadata() {
        let json = r#"{ "id": "abc", "email": "user@example.com" }"#;

        let response: ProviderUserResponse = serde_json::from_str(json).unwrap();
        let user = ProviderUser::from(response);

        assert!(!user.onboarding_completed);
    }
}
