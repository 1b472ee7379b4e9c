//! 온보딩 서비스 구현
//!
//! 온보딩 항목 조회와 선택 저장을 담당합니다. 항목 데이터 모델(프로젝트,
//! 캠페인, 클러스터)은 아직 관리자 도구가 없어 스텁 상태이며, 목록은 항상
//! 비어 있습니다. 완료 여부만 프로바이더 사용자 메타데이터의
//! `onboarding_completed` 플래그로 관리합니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::domain::dto::onboarding::{
    JoinCounts, JoinItemsRequest, JoinItemsResponse, OnboardingItems,
};
use crate::errors::AppError;
use crate::services::auth::provider_auth_service::{ProviderAuth, ProviderAuthService};

/// 온보딩 서비스
///
/// 별도 저장소 없이 프로바이더 관리자 API를 데이터 소스로 사용합니다.
#[service]
pub struct OnboardingService {
    /// 아이덴티티 프로바이더 연동 서비스
    ///
    /// 자동 의존성 주입을 통해 ProviderAuthService 싱글톤이 주입됩니다.
    provider: Arc<ProviderAuthService>,
}

impl OnboardingService {
    /// 사용자의 온보딩 항목 목록 조회
    ///
    /// 완료 여부는 프로바이더 사용자 메타데이터에서 읽으며, 사용자를 찾을 수
    /// 없으면 미완료로 취급합니다.
    ///
    /// # Arguments
    ///
    /// * `user_id` - 프로바이더가 발급한 사용자 고유 식별자
    ///
    /// # Returns
    ///
    /// * `Ok(OnboardingItems)` - 빈 항목 목록과 완료 플래그
    ///
    /// # Errors
    ///
    /// * `AppError::ExternalServiceError` - 프로바이더 조회 실패
    pub async fn get_onboarding_items(&self, user_id: &str) -> Result<OnboardingItems, AppError> {
        let onboarding_completed = match self.provider.get_user_by_id(user_id).await {
            Ok(Some(user)) => user.onboarding_completed,
            Ok(None) => {
                log::warn!("온보딩 조회: 프로바이더에 없는 사용자 ID {}", user_id);
                false
            }
            Err(e) => {
                log::error!("온보딩 조회 실패 - 사용자 ID {}: {}", user_id, e);
                return Err(AppError::ExternalServiceError(
                    "온보딩 항목을 불러오지 못했습니다".to_string(),
                ));
            }
        };

        Ok(OnboardingItems {
            projects: vec![],
            campaigns: vec![],
            clusters: vec![],
            onboarding_completed,
        })
    }

    /// 선택한 온보딩 항목 저장 및 완료 처리
    ///
    /// 프로바이더 사용자 메타데이터에 완료 플래그를 기록하고 카테고리별
    /// 반영 개수를 돌려줍니다. 항목 모델이 스텁이므로 제거 개수는 항상 0입니다.
    ///
    /// # Arguments
    ///
    /// * `user_id` - 프로바이더가 발급한 사용자 고유 식별자
    /// * `request` - 카테고리별 선택 항목 ID 목록
    pub async fn join_items(
        &self,
        user_id: &str,
        request: &JoinItemsRequest,
    ) -> Result<JoinItemsResponse, AppError> {
        self.provider
            .mark_onboarding_completed(user_id)
            .await
            .map_err(|e| {
                log::error!("온보딩 완료 처리 실패 - 사용자 ID {}: {}", user_id, e);
                AppError::ExternalServiceError(
                    "온보딩 선택을 저장하지 못했습니다".to_string(),
                )
            })?;

        log::info!("온보딩 완료 - 사용자 ID {}", user_id);

        Ok(JoinItemsResponse {
            success: true,
            added: JoinCounts {
                projects: request.project_ids.len(),
                campaigns: request.campaign_ids.len(),
                clusters: request.cluster_ids.len(),
            },
            removed: JoinCounts::default(),
            onboarding_completed: true,
        })
    }
}
