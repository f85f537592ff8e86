//! # 아티클 저장 계층
//!
//! 아티클의 CRUD와 버전 계보(version lineage) 유지를 담당합니다.
//!
//! 핵심 불변식: 내용이 바뀌는 모든 변경(생성/수정/복원)은 같은
//! load-변형-save 사이클 안에서 버전 스냅샷을 함께 추가하고,
//! `currentVersion`은 항상 가장 최근 스냅샷의 버전 번호와 같습니다.

use crate::error::AppError;
use crate::models::{Article, ArticleVersion, UpdateArticleRequest};

use super::store::{now_iso, Database, JsonDb};

/// 새 아티클 생성에 필요한 값 묶음. 라우트에서 채워 넘깁니다.
#[derive(Debug)]
pub struct NewArticle {
    pub slug: String,
    pub title: String,
    pub body_markdown: String,
    pub parent_slug: Option<String>,
    pub space_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

pub(super) fn next_article_id(data: &Database) -> i64 {
    data.articles.iter().map(|a| a.id).max().unwrap_or(0) + 1
}

pub(super) fn next_version_id(data: &Database) -> i64 {
    data.article_versions.iter().map(|v| v.id).max().unwrap_or(0) + 1
}

/// slug으로 아티클을 조회합니다. 없으면 `Ok(None)`.
pub async fn get_article(db: &JsonDb, slug: &str) -> Result<Option<Article>, AppError> {
    let data = db.load().await?;
    Ok(data.articles.into_iter().find(|a| a.slug == slug))
}

/// 새 아티클을 생성합니다.
///
/// `currentVersion=1`로 시작하며, 같은 저장 사이클 안에서
/// 동일한 제목/본문의 초기 버전(v1) 스냅샷을 함께 기록합니다.
pub async fn create_article(db: &JsonDb, new: NewArticle) -> Result<Article, AppError> {
    let _guard = db.lock().await;
    let mut data = db.load().await?;

    let article = Article {
        id: next_article_id(&data),
        slug: new.slug,
        title: new.title.clone(),
        body_markdown: new.body_markdown.clone(),
        parent_slug: new.parent_slug,
        space_id: new.space_id,
        created_at: new.created_at.clone(),
        updated_at: new.updated_at,
        current_version: 1,
    };

    let version = ArticleVersion {
        id: next_version_id(&data),
        article_id: article.id,
        version: 1,
        title: new.title,
        body_markdown: new.body_markdown,
        created_at: new.created_at,
        restored_from: None,
    };

    data.articles.push(article.clone());
    data.article_versions.push(version);

    db.save(&data).await?;
    Ok(article)
}

/// 아티클을 부분 업데이트합니다.
///
/// 요청에 포함된 필드만 변경하고(누락 필드는 보존),
/// `updatedAt`을 현재 시각으로, `currentVersion`을 +1로 올린 뒤
/// **변경 후** 제목/본문의 스냅샷을 새 버전으로 추가합니다.
///
/// # 반환값
/// - `Ok(Some(Article))`: 수정된 아티클
/// - `Ok(None)`: 해당 slug의 아티클이 없음
pub async fn update_article(
    db: &JsonDb,
    slug: &str,
    req: &UpdateArticleRequest,
) -> Result<Option<Article>, AppError> {
    let _guard = db.lock().await;
    let mut data = db.load().await?;

    let Some(idx) = data.articles.iter().position(|a| a.slug == slug) else {
        return Ok(None);
    };

    let new_version = data.articles[idx].current_version + 1;
    {
        let article = &mut data.articles[idx];
        if let Some(title) = &req.title {
            article.title = title.clone();
        }
        if let Some(body) = &req.body_markdown {
            article.body_markdown = body.clone();
        }
        // 삼상태(tri-state): 필드 누락이면 보존, null이면 부모 해제
        if let Some(parent_slug) = &req.parent_slug {
            article.parent_slug = parent_slug.clone();
        }
        article.updated_at = now_iso();
        article.current_version = new_version;
    }

    let version = ArticleVersion {
        id: next_version_id(&data),
        article_id: data.articles[idx].id,
        version: new_version,
        title: data.articles[idx].title.clone(),
        body_markdown: data.articles[idx].body_markdown.clone(),
        created_at: now_iso(),
        restored_from: None,
    };
    data.article_versions.push(version);

    let updated = data.articles[idx].clone();
    db.save(&data).await?;
    Ok(Some(updated))
}

/// 아티클을 삭제합니다. 버전 행은 여기서 지우지 않습니다
/// (스페이스 연쇄 삭제 경로에서만 버전까지 정리합니다).
///
/// # 반환값
/// 실제로 삭제된 행이 있으면 `true`.
pub async fn delete_article(db: &JsonDb, slug: &str) -> Result<bool, AppError> {
    let _guard = db.lock().await;
    let mut data = db.load().await?;

    let before = data.articles.len();
    data.articles.retain(|a| a.slug != slug);
    let removed = data.articles.len() != before;

    db.save(&data).await?;
    Ok(removed)
}

/// 아티클 목록을 `updatedAt` 내림차순으로 반환합니다.
///
/// ISO-8601 문자열의 사전순 비교는 시간순 비교와 같습니다.
/// `space_id`가 주어지면 해당 스페이스로 한정합니다.
pub async fn list_articles(db: &JsonDb, space_id: Option<i64>) -> Result<Vec<Article>, AppError> {
    let data = db.load().await?;
    let mut articles: Vec<Article> = match space_id {
        Some(sid) => data.articles.into_iter().filter(|a| a.space_id == sid).collect(),
        None => data.articles,
    };
    articles.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    Ok(articles)
}
