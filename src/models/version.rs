use serde::{Deserialize, Serialize};

/// 아티클 버전: 내용이 바뀔 때마다 추가되는 스냅샷.
///
/// 추가 전용(append-only)입니다. 아티클/스페이스 삭제에 딸려 지워지는 것
/// 외에는 수정되거나 삭제되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleVersion {
    /// 버전 행의 전역 id (아티클별 버전 번호와는 별개)
    pub id: i64,
    pub article_id: i64,
    /// 아티클별로 1부터 단조 증가하는 버전 번호
    pub version: i64,
    pub title: String,
    pub body_markdown: String,
    pub created_at: String,
    /// 이 버전이 복원으로 생성된 경우, 원본 버전 번호.
    /// 일반 버전에는 기록하지 않습니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restored_from: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreRequest {
    /// 복원할 버전 행의 id. 없으면 라우트에서 400으로 거절합니다.
    pub version_id: Option<i64>,
}
