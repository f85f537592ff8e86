//! # 버전 저장 계층
//!
//! 아티클 버전의 조회와 복원(restore)을 담당합니다.
//!
//! 버전 계보는 아티클별로 1부터 단조 증가하는 선형(분기 없는) 이력이며,
//! 복원조차 이력을 되감지 않습니다. v5에서 v2로 복원하면 v2의 내용을 담은
//! v6이 새로 추가됩니다. 감사 추적(audit trail)이 항상 보존됩니다.

use crate::error::AppError;
use crate::models::{Article, ArticleVersion};

use super::articles::next_version_id;
use super::store::{now_iso, JsonDb};

/// 아티클의 모든 버전을 버전 번호 내림차순(최신 먼저)으로 반환합니다.
pub async fn list_versions(db: &JsonDb, article_id: i64) -> Result<Vec<ArticleVersion>, AppError> {
    let data = db.load().await?;
    let mut versions: Vec<ArticleVersion> = data
        .article_versions
        .into_iter()
        .filter(|v| v.article_id == article_id)
        .collect();
    versions.sort_by(|a, b| b.version.cmp(&a.version));
    Ok(versions)
}

/// 아티클의 특정 버전을 버전 번호로 조회합니다. 없으면 `Ok(None)`.
pub async fn get_version(
    db: &JsonDb,
    article_id: i64,
    version: i64,
) -> Result<Option<ArticleVersion>, AppError> {
    let data = db.load().await?;
    Ok(data
        .article_versions
        .into_iter()
        .find(|v| v.article_id == article_id && v.version == version))
}

/// 아티클을 과거 버전의 내용으로 복원합니다.
///
/// 대상 버전 행은 행 id와 아티클 id가 **둘 다** 일치해야 합니다.
/// 다른 아티클의 버전 id를 잘못 넘겨도 엉뚱한 내용으로 복원되지 않습니다.
///
/// 성공 시: `currentVersion`을 +1, 제목/본문을 대상 버전의 내용으로 교체,
/// `updatedAt` 갱신, 그리고 `restoredFrom`에 원본 버전 번호를 기록한
/// **새** 버전 행을 추가합니다. 기존 이력은 절대 수정/삭제하지 않습니다.
///
/// # 반환값
/// - `Ok(Some(Article))`: 복원된 아티클
/// - `Ok(None)`: 아티클 또는 버전을 찾지 못함
pub async fn restore_version(
    db: &JsonDb,
    slug: &str,
    version_row_id: i64,
) -> Result<Option<Article>, AppError> {
    let _guard = db.lock().await;
    let mut data = db.load().await?;

    let Some(idx) = data.articles.iter().position(|a| a.slug == slug) else {
        return Ok(None);
    };
    let article_id = data.articles[idx].id;

    let Some(target) = data
        .article_versions
        .iter()
        .find(|v| v.id == version_row_id && v.article_id == article_id)
        .cloned()
    else {
        return Ok(None);
    };

    let new_version = data.articles[idx].current_version + 1;
    {
        let article = &mut data.articles[idx];
        article.title = target.title.clone();
        article.body_markdown = target.body_markdown.clone();
        article.updated_at = now_iso();
        article.current_version = new_version;
    }

    data.article_versions.push(ArticleVersion {
        id: next_version_id(&data),
        article_id,
        version: new_version,
        title: target.title,
        body_markdown: target.body_markdown,
        created_at: now_iso(),
        restored_from: Some(target.version),
    });

    let restored = data.articles[idx].clone();
    db.save(&data).await?;
    Ok(Some(restored))
}
