//! # 스페이스(Space) 라우트 핸들러
//!
//! 스페이스의 CRUD와 스페이스 내 아티클 목록을 처리합니다.
//!
//! ## 엔드포인트
//! - `GET    /api/spaces`                 → 스페이스 목록 (이름순)
//! - `POST   /api/spaces`                 → 새 스페이스 생성 (slug 자동 파생)
//! - `GET    /api/spaces/{slug}`          → 단일 스페이스 조회
//! - `PUT    /api/spaces/{slug}`          → 스페이스 수정 (부분 업데이트)
//! - `DELETE /api/spaces/{slug}`          → 스페이스 삭제 (소속 아티클/버전 연쇄 삭제)
//! - `GET    /api/spaces/{slug}/articles` → 스페이스 내 아티클 목록 (축약형)
//!
//! slug이 `default`인 기본 스페이스는 삭제할 수 없습니다 (400).

use crate::{
    db,
    error::AppError,
    models::*,
    routes::articles::AppState, // AppState는 articles 모듈에 정의되어 있습니다.
    services,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

/// `GET /spaces` — 전체 스페이스 목록을 이름순으로 조회합니다.
pub async fn list_spaces(State(state): State<AppState>) -> Result<Json<Vec<Space>>, AppError> {
    let spaces = db::list_spaces(&state.db).await?;
    Ok(Json(spaces))
}

/// `GET /spaces/{slug}` — 단일 스페이스를 조회합니다.
pub async fn get_space(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Space>, AppError> {
    let space = db::get_space(&state.db, &slug)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(space))
}

/// `POST /spaces` — 새 스페이스를 생성합니다.
///
/// 이름에서 slug을 파생하고, 충돌 시 `-1`, `-2`, … 접미사를 붙입니다.
pub async fn create_space(
    State(state): State<AppState>,
    Json(req): Json<CreateSpaceRequest>,
) -> Result<(StatusCode, Json<Space>), AppError> {
    let name = match req.name.as_deref() {
        Some(n) if !n.trim().is_empty() => n.to_string(),
        _ => return Err(AppError::BadRequest("name required".to_string())),
    };

    let existing: Vec<String> = db::list_spaces(&state.db)
        .await?
        .into_iter()
        .map(|s| s.slug)
        .collect();
    let slug = services::unique_slug(&name, |s| existing.iter().any(|e| e == s));

    let space = db::create_space(&state.db, slug, name).await?;
    Ok((StatusCode::CREATED, Json(space)))
}

/// `PUT /spaces/{slug}` — 스페이스를 수정합니다 (부분 업데이트).
///
/// `name`과 `homePageSlug` 중 요청에 포함된 필드만 변경합니다.
pub async fn update_space(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(req): Json<UpdateSpaceRequest>,
) -> Result<Json<Space>, AppError> {
    let space = db::update_space(&state.db, &slug, &req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(space))
}

/// `DELETE /spaces/{slug}` — 스페이스를 삭제합니다.
///
/// 기본 스페이스(`default`)는 다른 스페이스가 있든 없든 거절합니다 (400).
/// 삭제는 소속 아티클과 그 버전들까지 연쇄적으로 지웁니다.
pub async fn delete_space(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, AppError> {
    if slug == "default" {
        return Err(AppError::BadRequest(
            "Cannot delete default space".to_string(),
        ));
    }

    let deleted = db::delete_space(&state.db, &slug).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }
    Ok(Json(json!({ "success": true })))
}

/// `GET /spaces/{slug}/articles` — 스페이스에 속한 아티클 목록을 조회합니다.
///
/// 본문을 제외한 축약형으로, `updatedAt` 내림차순입니다.
pub async fn list_space_articles(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<ArticleSummary>>, AppError> {
    let space = db::get_space(&state.db, &slug)
        .await?
        .ok_or(AppError::NotFound)?;

    let articles = db::list_articles(&state.db, Some(space.id)).await?;
    Ok(Json(articles.iter().map(ArticleSummary::from).collect()))
}
