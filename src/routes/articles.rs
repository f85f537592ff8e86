//! # 아티클(Article) 라우트 핸들러
//!
//! 아티클의 CRUD를 처리하는 HTTP 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//! - `GET    /api/articles`        → 아티클 목록 (본문 제외 축약형)
//! - `POST   /api/articles`        → 새 아티클 생성 (slug 자동 파생)
//! - `GET    /api/articles/{slug}` → 단일 아티클 조회 (본문 포함)
//! - `PUT    /api/articles/{slug}` → 아티클 수정 (부분 업데이트 + 새 버전 기록)
//! - `DELETE /api/articles/{slug}` → 아티클 삭제
//!
//! ## Axum 핸들러 패턴
//! 핸들러는 Extractor(State/Path/Json)를 매개변수로 받고
//! `Result<T, AppError>`를 반환합니다. `Err(AppError)`는 에러 JSON 응답으로,
//! `Ok(T)`는 성공 응답으로 Axum이 자동 변환합니다.

use crate::{
    db::{self, JsonDb, NewArticle},
    error::AppError,
    models::*,
    services,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// JsonDb는 내부적으로 Arc를 사용하므로 clone해도 같은 저장소를 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    /// JSON 파일 저장소 핸들
    pub db: JsonDb,
}

/// `GET /articles` — 전체 아티클 목록을 조회합니다.
///
/// 프론트엔드가 트리를 구성할 수 있도록 parentSlug를 포함하되,
/// 본문(bodyMarkdown)은 제외한 축약형으로 반환합니다.
pub async fn list_articles(
    State(state): State<AppState>,
) -> Result<Json<Vec<ArticleSummary>>, AppError> {
    let articles = db::list_articles(&state.db, None).await?;
    Ok(Json(articles.iter().map(ArticleSummary::from).collect()))
}

/// `GET /articles/{slug}` — 단일 아티클을 본문까지 포함해 조회합니다.
pub async fn get_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Article>, AppError> {
    let article = db::get_article(&state.db, &slug)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(article))
}

/// `POST /articles` — 새 아티클을 생성합니다.
///
/// 제목에서 slug을 파생하고, 이미 있으면 `-1`, `-2`, … 접미사를 붙입니다.
/// 저장 계층이 같은 저장 사이클 안에서 초기 버전(v1)도 함께 기록합니다.
pub async fn create_article(
    State(state): State<AppState>,
    Json(req): Json<CreateArticleRequest>,
) -> Result<(StatusCode, Json<Article>), AppError> {
    let title = match req.title.as_deref() {
        Some(t) if !t.trim().is_empty() => t.to_string(),
        _ => return Err(AppError::BadRequest("title required".to_string())),
    };

    // slug 충돌 검사는 전체 아티클의 slug 목록을 대상으로 합니다.
    let existing: Vec<String> = db::list_articles(&state.db, None)
        .await?
        .into_iter()
        .map(|a| a.slug)
        .collect();
    let slug = services::unique_slug(&title, |s| existing.iter().any(|e| e == s));

    let created_at = db::now_iso();
    let article = db::create_article(
        &state.db,
        NewArticle {
            slug,
            title,
            body_markdown: req.body_markdown.unwrap_or_default(),
            parent_slug: req.parent_slug,
            space_id: req.space_id.unwrap_or(1),
            created_at: created_at.clone(),
            updated_at: created_at,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(article)))
}

/// `PUT /articles/{slug}` — 아티클을 수정합니다 (부분 업데이트).
///
/// 요청에 포함된 필드만 변경하고, 변경 후 내용의 새 버전을 기록합니다.
pub async fn update_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(req): Json<UpdateArticleRequest>,
) -> Result<Json<Article>, AppError> {
    let article = db::update_article(&state.db, &slug, &req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(article))
}

/// `DELETE /articles/{slug}` — 아티클을 삭제합니다.
///
/// 성공 시 `{ "success": true }`, 없으면 404.
pub async fn delete_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, AppError> {
    let deleted = db::delete_article(&state.db, &slug).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }
    Ok(Json(json!({ "success": true })))
}
