//! # 버전 라우트 핸들러
//!
//! ## 엔드포인트
//! - `GET  /api/articles/{slug}/versions`           → 버전 목록 (최신 먼저)
//! - `GET  /api/articles/{slug}/versions/{version}` → 특정 버전 조회 (버전 번호 기준)
//! - `POST /api/articles/{slug}/restore`            → 과거 버전으로 복원 (새 버전 생성)

use crate::{db, error::AppError, models::*, routes::articles::AppState};
use axum::{
    extract::{Path, State},
    Json,
};

/// `GET /articles/{slug}/versions` — 아티클의 버전 목록을 조회합니다.
///
/// 버전 번호 내림차순의 배열로 응답합니다.
pub async fn list_article_versions(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<ArticleVersion>>, AppError> {
    let article = db::get_article(&state.db, &slug)
        .await?
        .ok_or(AppError::NotFound)?;

    let versions = db::list_versions(&state.db, article.id).await?;
    Ok(Json(versions))
}

/// `GET /articles/{slug}/versions/{version}` — 특정 버전을 조회합니다.
///
/// 경로의 마지막 조각은 아티클별 버전 번호입니다 (전역 행 id가 아님).
pub async fn get_article_version(
    State(state): State<AppState>,
    Path((slug, version)): Path<(String, i64)>,
) -> Result<Json<ArticleVersion>, AppError> {
    let article = db::get_article(&state.db, &slug)
        .await?
        .ok_or(AppError::NotFound)?;

    let version = db::get_version(&state.db, article.id, version)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(version))
}

/// `POST /articles/{slug}/restore` — 아티클을 과거 버전의 내용으로 복원합니다.
///
/// 요청 본문: `{ "versionId": <버전 행 id> }` — 없으면 400.
/// 복원은 이력을 되감지 않고 `restoredFrom`이 기록된 새 버전을 추가합니다.
pub async fn restore_article_version(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(req): Json<RestoreRequest>,
) -> Result<Json<Article>, AppError> {
    let version_id = req
        .version_id
        .ok_or_else(|| AppError::BadRequest("versionId required".to_string()))?;

    let article = db::restore_version(&state.db, &slug, version_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(article))
}
