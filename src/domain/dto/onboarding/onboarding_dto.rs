//! 온보딩 관련 DTO
//!
//! 온보딩 항목 조회/선택 API의 요청과 응답 계약을 정의합니다.
//! 항목 데이터 모델은 아직 스텁이라 목록은 항상 비어 있으며,
//! 완료 플래그만 프로바이더 사용자 메타데이터에 기록됩니다.
use serde::{Deserialize, Serialize};

/// 선택 가능한 온보딩 항목 하나
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingItem {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_selected: bool,
}

/// 온보딩 항목 조회 응답
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingItems {
    pub projects: Vec<OnboardingItem>,
    pub campaigns: Vec<OnboardingItem>,
    pub clusters: Vec<OnboardingItem>,
    pub onboarding_completed: bool,
}

/// 온보딩 항목 선택 요청
///
/// 누락된 목록은 빈 목록으로 처리됩니다.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinItemsRequest {
    #[serde(default)]
    pub project_ids: Vec<String>,
    #[serde(default)]
    pub campaign_ids: Vec<String>,
    #[serde(default)]
    pub cluster_ids: Vec<String>,
}

/// 카테고리별 항목 수
#[derive(Debug, Default, Serialize)]
pub struct JoinCounts {
    pub projects: usize,
    pub campaigns: usize,
    pub clusters: usize,
}

/// 온보딩 항목 선택 응답
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinItemsResponse {
    pub success: bool,
    pub added: JoinCounts,
    pub removed: JoinCounts,
    pub onboarding_completed: bool,
}
