//! # 스페이스 저장 계층
//!
//! 스페이스의 CRUD와, 스페이스 삭제 시 소속 아티클/버전까지 지우는
//! 연쇄 삭제(cascading delete)를 담당합니다.
//!
//! 모든 함수는 `JsonDb`를 받아 문서 전체를 로드한 뒤 메모리에서 작업하고,
//! 변경이 있으면 문서 전체를 다시 저장합니다.

use crate::error::AppError;
use crate::models::{Space, UpdateSpaceRequest};

use super::store::{now_iso, JsonDb};

/// 모든 스페이스를 이름 기준 오름차순(대소문자 무시)으로 반환합니다.
pub async fn list_spaces(db: &JsonDb) -> Result<Vec<Space>, AppError> {
    let data = db.load().await?;
    let mut spaces = data.spaces;
    spaces.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    Ok(spaces)
}

/// slug으로 스페이스를 조회합니다. 없으면 `Ok(None)`.
pub async fn get_space(db: &JsonDb, slug: &str) -> Result<Option<Space>, AppError> {
    let data = db.load().await?;
    Ok(data.spaces.into_iter().find(|s| s.slug == slug))
}

/// 새 스페이스를 생성합니다.
///
/// slug의 유일성은 호출자(라우트)가 미리 보장합니다.
/// id는 `max(기존) + 1`로 부여하며, 삭제된 id는 재사용하지 않습니다.
pub async fn create_space(db: &JsonDb, slug: String, name: String) -> Result<Space, AppError> {
    let _guard = db.lock().await;
    let mut data = db.load().await?;

    let id = data.spaces.iter().map(|s| s.id).max().unwrap_or(0) + 1;
    let space = Space {
        id,
        slug,
        name,
        home_page_slug: None,
        created_at: now_iso(),
    };
    data.spaces.push(space.clone());

    db.save(&data).await?;
    Ok(space)
}

/// 스페이스를 부분 업데이트합니다. 요청에 포함된 필드만 변경합니다.
///
/// # 반환값
/// - `Ok(Some(Space))`: 수정된 스페이스
/// - `Ok(None)`: 해당 slug의 스페이스가 없음 (라우트에서 404로 변환)
pub async fn update_space(
    db: &JsonDb,
    slug: &str,
    req: &UpdateSpaceRequest,
) -> Result<Option<Space>, AppError> {
    let _guard = db.lock().await;
    let mut data = db.load().await?;

    let Some(space) = data.spaces.iter_mut().find(|s| s.slug == slug) else {
        return Ok(None);
    };

    if let Some(name) = &req.name {
        space.name = name.clone();
    }
    // 바깥 Option이 Some일 때만 필드가 요청에 존재한 것입니다.
    // null(Some(None))은 홈 지정 해제를 의미합니다.
    if let Some(home_page_slug) = &req.home_page_slug {
        space.home_page_slug = home_page_slug.clone();
    }
    let updated = space.clone();

    db.save(&data).await?;
    Ok(Some(updated))
}

/// 스페이스를 삭제합니다.
///
/// 소속 아티클 전부와 그 아티클들의 버전 전부를 함께 지웁니다.
/// 스페이스를 지울 때 내용물을 다른 스페이스로 몰래 옮기지 않고
/// 완전히 제거하는 것이 의도된 정책입니다.
///
/// # 반환값
/// 실제로 삭제된 행이 있으면 `true`.
pub async fn delete_space(db: &JsonDb, slug: &str) -> Result<bool, AppError> {
    let _guard = db.lock().await;
    let mut data = db.load().await?;

    let Some(space) = data.spaces.iter().find(|s| s.slug == slug).cloned() else {
        return Ok(false);
    };

    data.spaces.retain(|s| s.slug != slug);

    // 연쇄 삭제: 소속 아티클과 그 버전들
    let deleted_article_ids: Vec<i64> = data
        .articles
        .iter()
        .filter(|a| a.space_id == space.id)
        .map(|a| a.id)
        .collect();
    data.articles.retain(|a| a.space_id != space.id);
    data.article_versions
        .retain(|v| !deleted_article_ids.contains(&v.article_id));

    db.save(&data).await?;
    Ok(true)
}
