use serde::Serialize;

/// 검색 점수가 매겨진 아티클 결과 한 건.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredArticle {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub parent_slug: Option<String>,
    pub space_id: i64,
    /// 매칭 지점 주변의 본문 발췌 (본문이 비면 제목에서 생성)
    pub excerpt: String,
    pub score: i64,
    pub updated_at: String,
}

/// `searchArticles` 결과 봉투.
/// `total`은 페이지네이션 적용 전의 전체 후보 수입니다.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub total: usize,
    pub results: Vec<ScoredArticle>,
}

/// 통합 검색(스페이스 + 아티클)의 결과 한 건.
///
/// `type` 필드("space" | "article")로 구분되어 직렬화됩니다.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum UnifiedResult {
    #[serde(rename_all = "camelCase")]
    Space {
        id: i64,
        slug: String,
        name: String,
        score: i64,
    },
    Article(ScoredArticle),
}

impl UnifiedResult {
    pub fn score(&self) -> i64 {
        match self {
            UnifiedResult::Space { score, .. } => *score,
            UnifiedResult::Article(a) => a.score,
        }
    }

    pub fn is_space(&self) -> bool {
        matches!(self, UnifiedResult::Space { .. })
    }
}

#[derive(Debug, Serialize)]
pub struct UnifiedSearchResponse {
    pub total: usize,
    pub results: Vec<UnifiedResult>,
}
