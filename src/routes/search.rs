//! # 검색 라우트 핸들러
//!
//! ## 엔드포인트
//! - `GET /api/articles/search?q=&space=&limit=&offset=` → 아티클 검색
//! - `GET /api/articles/search-all?q=&limit=&offset=`    → 통합 검색 (스페이스 + 아티클)
//!
//! `limit`은 100 이하로, `offset`은 0 이상으로 잘라냅니다(clamp).
//! `space`는 스페이스 slug이며, 모르는 slug이면 필터 없이 전체를 검색합니다
//! (에러가 아님).

use crate::{
    db::{self, SearchOptions},
    error::AppError,
    routes::articles::AppState,
};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    /// 스페이스 slug (아티클 검색에서만 사용)
    pub space: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

fn clamp_paging(params: &SearchQuery) -> (usize, usize) {
    let limit = params.limit.unwrap_or(20).min(100).max(0) as usize;
    let offset = params.offset.unwrap_or(0).max(0) as usize;
    (limit, offset)
}

/// `GET /articles/search` — 아티클을 검색합니다.
///
/// 응답: `{ q, total, limit, offset, results }`
/// `total`은 페이지네이션 적용 전의 전체 후보 수입니다.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Value>, AppError> {
    let q = params.q.clone().unwrap_or_default();
    let (limit, offset) = clamp_paging(&params);

    // space 파라미터는 slug → id로 해석합니다. 모르는 slug이면 필터 없음.
    let mut space_id = None;
    if let Some(space_slug) = &params.space {
        space_id = db::get_space(&state.db, space_slug).await?.map(|s| s.id);
    }

    let opts = SearchOptions {
        space_id,
        limit,
        offset,
    };
    let res = db::search_articles(&state.db, &q, &opts).await?;

    Ok(Json(json!({
        "q": q,
        "total": res.total,
        "limit": limit,
        "offset": offset,
        "results": res.results,
    })))
}

/// `GET /articles/search-all` — 스페이스와 아티클을 함께 검색합니다.
///
/// 매칭된 스페이스가 항상 아티클보다 앞에 옵니다.
pub async fn search_all(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Value>, AppError> {
    let q = params.q.clone().unwrap_or_default();
    let (limit, offset) = clamp_paging(&params);

    let opts = SearchOptions {
        space_id: None,
        limit,
        offset,
    };
    let res = db::search_all(&state.db, &q, &opts).await?;

    Ok(Json(json!({
        "q": q,
        "total": res.total,
        "limit": limit,
        "offset": offset,
        "results": res.results,
    })))
}
