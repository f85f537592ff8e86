use serde::{Deserialize, Serialize};

/// 스페이스: 아티클들을 묶는 최상위 단위.
///
/// slug `"default"`인 기본 스페이스는 항상 존재하며 삭제할 수 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub id: i64,
    pub slug: String,
    pub name: String,
    /// 스페이스 홈으로 지정된 아티클 slug. 없으면 null.
    /// 예전 문서에는 이 필드가 없을 수 있어 default로 보정합니다.
    #[serde(default)]
    pub home_page_slug: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateSpaceRequest {
    /// name이 없으면 라우트에서 400으로 거절합니다.
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSpaceRequest {
    pub name: Option<String>,
    /// None = 필드 누락 (변경 안 함), Some(None) = null (홈 지정 해제),
    /// Some(Some(slug)) = 해당 아티클을 홈으로 지정
    #[serde(default, deserialize_with = "super::deserialize_explicit_null")]
    pub home_page_slug: Option<Option<String>>,
}
