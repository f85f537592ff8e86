use serde::{Deserialize, Serialize};

/// 아티클: 위키의 문서 한 장.
///
/// slug은 스페이스와 무관하게 전역적으로 유일합니다.
/// `parent_slug`는 다른 아티클의 slug을 가리켜 트리를 형성하지만,
/// 참조 무결성은 강제하지 않습니다 (존재하지 않는 slug도 허용).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub body_markdown: String,
    #[serde(default)]
    pub parent_slug: Option<String>,
    /// 소속 스페이스 id. 예전 문서에는 없을 수 있어
    /// 로드 시 정규화 단계에서 첫 스페이스의 id로 보정합니다.
    #[serde(default)]
    pub space_id: i64,
    pub created_at: String,
    pub updated_at: String,
    /// 가장 최근에 기록된 버전 번호. 항상 1 이상입니다.
    #[serde(default = "default_current_version")]
    pub current_version: i64,
}

fn default_current_version() -> i64 {
    1
}

/// 목록 조회용 축약 표현. 본문(bodyMarkdown)은 제외합니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
    pub parent_slug: Option<String>,
}

impl From<&Article> for ArticleSummary {
    fn from(a: &Article) -> Self {
        Self {
            id: a.id,
            slug: a.slug.clone(),
            title: a.title.clone(),
            created_at: a.created_at.clone(),
            updated_at: a.updated_at.clone(),
            parent_slug: a.parent_slug.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    /// title이 없으면 라우트에서 400으로 거절합니다.
    pub title: Option<String>,
    pub body_markdown: Option<String>,
    pub parent_slug: Option<String>,
    pub space_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub body_markdown: Option<String>,
    /// None = 필드 누락 (변경 안 함), Some(None) = null (루트로 이동),
    /// Some(Some(slug)) = 부모 지정
    #[serde(default, deserialize_with = "super::deserialize_explicit_null")]
    pub parent_slug: Option<Option<String>>,
}
