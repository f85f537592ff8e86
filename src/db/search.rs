//! # 검색 모듈
//!
//! 쿼리 문자열에 대해 아티클(그리고 통합 검색에서는 스페이스 이름까지)을
//! 선형 탐색으로 채점/정렬하고 발췌(excerpt)를 생성합니다.
//! 역색인은 없습니다. 소규모 데이터 전제의 의도적인 단순화입니다.
//!
//! ## 점수 체계 (가산식, 높을수록 관련도 높음)
//! - 제목 부분 일치: `200 - 매칭 위치` (제목 앞쪽 매칭일수록 높음)
//! - 본문 부분 일치: `100 - 매칭 위치 / 10` (위치 페널티를 1/10로 완화)
//! - 단어 단위 일치 보너스: 제목+본문에서 단어 경계 일치 시 고정 `+10`
//! - 스페이스 이름 일치(통합 검색): `300 - 매칭 위치` (별도의 상위 대역)
//!
//! 음수 하한(clamp)은 두지 않습니다. 현실적인 길이에서는 발생하지 않고,
//! 발생하더라도 수용되는 동작입니다.
//!
//! 동점 처리: 점수 내림차순 → `updatedAt` 내림차순 (ISO-8601 문자열의
//! 사전순 비교는 시간순과 같습니다).

use regex::Regex;

use crate::error::AppError;
use crate::models::{
    ScoredArticle, SearchResponse, UnifiedResult, UnifiedSearchResponse,
};

use super::store::{Database, JsonDb};

/// 검색 옵션. `spaceId`는 아티클 검색에서만 의미가 있습니다.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub space_id: Option<i64>,
    pub limit: usize,
    pub offset: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            space_id: None,
            limit: 20,
            offset: 0,
        }
    }
}

/// 아티클 검색. 문서를 로드한 뒤 순수 함수 `search_articles_in`에 위임합니다.
pub async fn search_articles(
    db: &JsonDb,
    q: &str,
    opts: &SearchOptions,
) -> Result<SearchResponse, AppError> {
    let data = db.load().await?;
    Ok(search_articles_in(&data, q, opts))
}

/// 통합 검색(스페이스 + 아티클).
pub async fn search_all(
    db: &JsonDb,
    q: &str,
    opts: &SearchOptions,
) -> Result<UnifiedSearchResponse, AppError> {
    let data = db.load().await?;
    Ok(search_all_in(&data, q, opts))
}

/// 메모리에 로드된 문서에 대한 아티클 검색 본체.
///
/// `total`은 페이지네이션 적용 **전**의 전체 후보 수입니다.
pub fn search_articles_in(data: &Database, q: &str, opts: &SearchOptions) -> SearchResponse {
    // 공백뿐인 쿼리는 에러가 아니라 빈 결과입니다.
    if q.trim().is_empty() {
        return SearchResponse {
            total: 0,
            results: Vec::new(),
        };
    }
    let nq = q.to_lowercase();
    let word_re = word_boundary_regex(&nq);

    // 후보 필터: 스페이스 한정 → 제목/본문 대소문자 무시 부분 일치
    let mut scored: Vec<ScoredArticle> = data
        .articles
        .iter()
        .filter(|a| {
            if let Some(sid) = opts.space_id {
                if a.space_id != sid {
                    return false;
                }
            }
            a.title.to_lowercase().contains(&nq) || a.body_markdown.to_lowercase().contains(&nq)
        })
        .map(|a| {
            let title_idx = a.title.to_lowercase().find(&nq);
            let body_idx = a.body_markdown.to_lowercase().find(&nq);

            let mut score: i64 = 0;
            if let Some(idx) = title_idx {
                score += 200 - idx as i64;
            }
            if let Some(idx) = body_idx {
                score += 100 - (idx as i64) / 10;
            }
            if let Some(re) = &word_re {
                if re.is_match(&format!("{} {}", a.title, a.body_markdown)) {
                    score += 10;
                }
            }

            let excerpt_source = if a.body_markdown.is_empty() {
                &a.title
            } else {
                &a.body_markdown
            };

            ScoredArticle {
                id: a.id,
                slug: a.slug.clone(),
                title: a.title.clone(),
                parent_slug: a.parent_slug.clone(),
                space_id: a.space_id,
                excerpt: excerpt_for_match(excerpt_source, &nq),
                score,
                updated_at: a.updated_at.clone(),
            }
        })
        .collect();

    scored.sort_by(|x, y| {
        y.score
            .cmp(&x.score)
            .then_with(|| y.updated_at.cmp(&x.updated_at))
    });

    let total = scored.len();
    let results = paginate(scored, opts.offset, opts.limit);
    SearchResponse { total, results }
}

/// 메모리에 로드된 문서에 대한 통합 검색 본체.
///
/// 스페이스 이름 일치는 `300 - 위치`로 채점되어 아티클보다 높은 대역을
/// 차지하며, 정렬 규칙상으로도 스페이스가 무조건 아티클보다 앞에 옵니다.
/// 아티클 쪽은 내부 한도 100건으로 `search_articles_in`을 재사용합니다.
pub fn search_all_in(data: &Database, q: &str, opts: &SearchOptions) -> UnifiedSearchResponse {
    if q.trim().is_empty() {
        return UnifiedSearchResponse {
            total: 0,
            results: Vec::new(),
        };
    }
    let nq = q.to_lowercase();

    let mut results: Vec<UnifiedResult> = data
        .spaces
        .iter()
        .filter_map(|space| {
            let name = space.name.to_lowercase();
            name.find(&nq).map(|idx| UnifiedResult::Space {
                id: space.id,
                slug: space.slug.clone(),
                name: space.name.clone(),
                score: 300 - idx as i64,
            })
        })
        .collect();

    let article_opts = SearchOptions {
        space_id: None,
        limit: 100,
        offset: 0,
    };
    results.extend(
        search_articles_in(data, q, &article_opts)
            .results
            .into_iter()
            .map(UnifiedResult::Article),
    );

    // 스페이스 우선, 그 다음 점수 내림차순
    results.sort_by(|a, b| {
        b.is_space()
            .cmp(&a.is_space())
            .then_with(|| b.score().cmp(&a.score()))
    });

    let total = results.len();
    let results = paginate(results, opts.offset, opts.limit);
    UnifiedSearchResponse { total, results }
}

fn paginate<T>(items: Vec<T>, offset: usize, limit: usize) -> Vec<T> {
    items.into_iter().skip(offset).take(limit).collect()
}

/// 쿼리를 리터럴 단어로 취급하는 단어 경계 정규식.
/// 컴파일에 실패하면 보너스를 포기합니다(None).
fn word_boundary_regex(nq: &str) -> Option<Regex> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(nq))).ok()
}

/// 매칭 지점 주변의 발췌를 생성합니다.
///
/// - 쿼리가 텍스트에 없으면: 앞 140자 (잘렸으면 말줄임 추가)
/// - 있으면: 매칭 지점 앞뒤 60자 창. 내부 공백은 한 칸으로 접고,
///   창이 텍스트 경계에 닿지 않은 쪽에 말줄임을 붙입니다.
fn excerpt_for_match(text: &str, nq: &str) -> String {
    let lower = text.to_lowercase();
    let Some(idx) = lower.find(nq) else {
        return if text.chars().count() > 140 {
            let head: String = text.chars().take(140).collect();
            format!("{}…", head)
        } else {
            text.to_string()
        };
    };

    // 소문자화로 바이트 길이가 달라질 수 있으므로 문자 경계로 보정합니다.
    let start = floor_char_boundary(text, idx.saturating_sub(60));
    let end = ceil_char_boundary(text, (idx + nq.len() + 60).min(text.len()));
    let window = collapse_whitespace(&text[start..end]);

    let prefix = if start > 0 { "…" } else { "" };
    let suffix = if end < text.len() { "…" } else { "" };
    format!("{}{}{}", prefix, window, suffix)
}

/// 연속된 공백(개행 포함)을 한 칸의 스페이스로 접습니다.
fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_ws = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !in_ws {
                out.push(' ');
            }
            in_ws = true;
        } else {
            out.push(ch);
            in_ws = false;
        }
    }
    out
}

fn floor_char_boundary(s: &str, mut i: usize) -> usize {
    if i >= s.len() {
        return s.len();
    }
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn ceil_char_boundary(s: &str, mut i: usize) -> usize {
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i.min(s.len())
}
