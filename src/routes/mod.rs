//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//! Axum에서 핸들러는 HTTP 요청을 받아 응답을 반환하는 async 함수입니다.
//!
//! 각 하위 모듈:
//! - `articles`: 아티클 CRUD 핸들러 (공유 상태 AppState 포함)
//! - `spaces`: 스페이스 CRUD와 스페이스 내 아티클 목록
//! - `search`: 아티클 검색과 통합 검색
//! - `versions`: 버전 목록/조회/복원
//! - `health`: 서버 상태 확인 (헬스체크)

pub mod articles;
pub mod health;
pub mod search;
pub mod spaces;
pub mod versions;

pub use articles::*;
pub use health::*;
pub use search::*;
pub use spaces::*;
pub use versions::*;

use axum::{
    routing::{get, post},
    Router,
};

/// API 라우터 전체를 구성합니다.
///
/// main.rs와 통합 테스트가 같은 라우터를 공유하도록 한 곳에 모았습니다.
/// 주의: `/articles/search` 같은 고정 경로는 `/articles/{slug}` 와일드카드보다
/// 우선 매칭됩니다 (Axum의 라우팅 규칙).
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/spaces", get(spaces::list_spaces).post(spaces::create_space))
        .route(
            "/spaces/{slug}",
            get(spaces::get_space)
                .put(spaces::update_space)
                .delete(spaces::delete_space),
        )
        .route("/spaces/{slug}/articles", get(spaces::list_space_articles))
        .route(
            "/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/articles/search", get(search::search))
        .route("/articles/search-all", get(search::search_all))
        .route(
            "/articles/{slug}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route(
            "/articles/{slug}/versions",
            get(versions::list_article_versions),
        )
        .route(
            "/articles/{slug}/versions/{version}",
            get(versions::get_article_version),
        )
        .route(
            "/articles/{slug}/restore",
            post(versions::restore_article_version),
        )
        .route("/health", get(health::health_check))
        .with_state(state)
}
