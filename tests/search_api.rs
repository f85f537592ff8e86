//! 검색 API 통합 테스트
//!
//! 점수 계산 자체는 db::search의 단위 테스트가 다루고,
//! 여기서는 HTTP 응답 봉투(q/total/limit/offset/results)와
//! 쿼리 파라미터 해석을 확인합니다.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{body_json, build_test_app, get, post_json};

#[tokio::test]
async fn search_scores_body_match_with_word_bonus() {
    let (app, _dir, _path) = build_test_app();

    let docs = body_json(post_json(app.clone(), "/spaces", json!({ "name": "Docs" })).await).await;
    let docs_id = docs["id"].as_i64().unwrap();

    post_json(
        app.clone(),
        "/articles",
        json!({ "title": "Intro", "bodyMarkdown": "Hello world", "spaceId": docs_id }),
    )
    .await;
    // 다른 스페이스의 매칭은 space 필터에 걸러져야 한다
    post_json(
        app.clone(),
        "/articles",
        json!({ "title": "Elsewhere", "bodyMarkdown": "hello too" }),
    )
    .await;

    let res = get(app, "/articles/search?q=hello&space=docs").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = body_json(res).await;
    assert_eq!(body["q"], "hello");
    assert_eq!(body["total"], 1);
    assert_eq!(body["limit"], 20);
    assert_eq!(body["offset"], 0);

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["slug"], "intro");
    // 본문 선두 매칭 100점 + 단어 경계 보너스 10점
    assert_eq!(results[0]["score"], 110);
    assert_eq!(results[0]["excerpt"], "Hello world");
}

#[tokio::test]
async fn blank_query_returns_empty_result() {
    let (app, _dir, _path) = build_test_app();

    post_json(app.clone(), "/articles", json!({ "title": "Something" })).await;

    for uri in ["/articles/search?q=", "/articles/search", "/articles/search?q=%20%20"] {
        let body = body_json(get(app.clone(), uri).await).await;
        assert_eq!(body["total"], 0);
        assert_eq!(body["results"].as_array().unwrap().len(), 0);
    }
}

#[tokio::test]
async fn title_matches_outrank_body_matches() {
    let (app, _dir, _path) = build_test_app();

    post_json(
        app.clone(),
        "/articles",
        json!({ "title": "Rust Guide", "bodyMarkdown": "nothing here" }),
    )
    .await;
    post_json(
        app.clone(),
        "/articles",
        json!({ "title": "Other", "bodyMarkdown": "all about rust internals" }),
    )
    .await;

    let body = body_json(get(app, "/articles/search?q=rust").await).await;
    let slugs: Vec<&str> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["rust-guide", "other"]);
}

#[tokio::test]
async fn paging_is_clamped_and_reported() {
    let (app, _dir, _path) = build_test_app();

    for i in 0..3 {
        post_json(
            app.clone(),
            "/articles",
            json!({ "title": format!("Guide {i}"), "bodyMarkdown": "shared" }),
        )
        .await;
    }

    // limit은 100으로, 음수 offset은 0으로 잘린다
    let body = body_json(get(app.clone(), "/articles/search?q=guide&limit=500&offset=-5").await)
        .await;
    assert_eq!(body["limit"], 100);
    assert_eq!(body["offset"], 0);
    assert_eq!(body["total"], 3);

    // total은 페이지 밖의 매칭까지 센다
    let body = body_json(get(app, "/articles/search?q=guide&limit=2&offset=2").await).await;
    assert_eq!(body["total"], 3);
    assert_eq!(body["results"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_space_slug_searches_everything() {
    let (app, _dir, _path) = build_test_app();

    post_json(
        app.clone(),
        "/articles",
        json!({ "title": "Findable", "bodyMarkdown": "needle" }),
    )
    .await;

    let body = body_json(get(app, "/articles/search?q=needle&space=no-such").await).await;
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn unified_search_puts_spaces_before_articles() {
    let (app, _dir, _path) = build_test_app();

    post_json(app.clone(), "/spaces", json!({ "name": "Platform" })).await;
    post_json(
        app.clone(),
        "/articles",
        json!({ "title": "Platform Overview", "bodyMarkdown": "about the platform" }),
    )
    .await;

    let res = get(app, "/articles/search-all?q=platform").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = body_json(res).await;
    assert_eq!(body["total"], 2);

    let results = body["results"].as_array().unwrap();
    assert_eq!(results[0]["type"], "space");
    assert_eq!(results[0]["slug"], "platform");
    assert_eq!(results[0]["score"], 300);
    assert_eq!(results[1]["type"], "article");
    assert_eq!(results[1]["slug"], "platform-overview");
}

#[tokio::test]
async fn unified_search_with_blank_query_is_empty() {
    let (app, _dir, _path) = build_test_app();

    let body = body_json(get(app, "/articles/search-all?q=").await).await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["results"].as_array().unwrap().len(), 0);
}
