//! 스페이스 API 통합 테스트

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{body_json, build_test_app, delete, get, post_json, put_json};

#[tokio::test]
async fn default_space_exists_on_first_request() {
    let (app, _dir, _path) = build_test_app();

    let res = get(app, "/spaces").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = body_json(res).await;
    let spaces = body.as_array().unwrap();
    assert_eq!(spaces.len(), 1);
    assert_eq!(spaces[0]["slug"], "default");
    assert_eq!(spaces[0]["name"], "Default Space");
    assert_eq!(spaces[0]["id"], 1);
}

#[tokio::test]
async fn create_space_derives_slug_from_name() {
    let (app, _dir, _path) = build_test_app();

    let res = post_json(app.clone(), "/spaces", json!({ "name": "My Team Docs" })).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body = body_json(res).await;
    assert_eq!(body["slug"], "my-team-docs");
    assert_eq!(body["name"], "My Team Docs");
    assert_eq!(body["homePageSlug"], Value::Null);

    let res = get(app, "/spaces/my-team-docs").await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn duplicate_space_names_get_numeric_suffixes() {
    let (app, _dir, _path) = build_test_app();

    for expected in ["docs", "docs-1", "docs-2"] {
        let res = post_json(app.clone(), "/spaces", json!({ "name": "Docs" })).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body = body_json(res).await;
        assert_eq!(body["slug"], expected);
    }
}

#[tokio::test]
async fn create_space_without_name_is_rejected() {
    let (app, _dir, _path) = build_test_app();

    let res = post_json(app.clone(), "/spaces", json!({})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = body_json(res).await;
    assert_eq!(body["error"]["code"], "bad_request");

    // 공백만 있는 이름도 마찬가지
    let res = post_json(app, "/spaces", json!({ "name": "   " })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_unknown_space_returns_404() {
    let (app, _dir, _path) = build_test_app();

    let res = get(app, "/spaces/nope").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = body_json(res).await;
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn spaces_are_listed_by_name_case_insensitively() {
    let (app, _dir, _path) = build_test_app();

    post_json(app.clone(), "/spaces", json!({ "name": "zebra" })).await;
    post_json(app.clone(), "/spaces", json!({ "name": "Apple" })).await;

    let body = body_json(get(app, "/spaces").await).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Apple", "Default Space", "zebra"]);
}

#[tokio::test]
async fn update_space_changes_only_provided_fields() {
    let (app, _dir, _path) = build_test_app();

    post_json(app.clone(), "/spaces", json!({ "name": "Team" })).await;

    // homePageSlug만 설정, name은 그대로
    let res = put_json(
        app.clone(),
        "/spaces/team",
        json!({ "homePageSlug": "welcome" }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["name"], "Team");
    assert_eq!(body["homePageSlug"], "welcome");

    // name만 바꾸면 homePageSlug은 유지
    let body = body_json(
        put_json(app.clone(), "/spaces/team", json!({ "name": "Team Wiki" })).await,
    )
    .await;
    assert_eq!(body["name"], "Team Wiki");
    assert_eq!(body["homePageSlug"], "welcome");

    // 명시적 null은 homePageSlug을 해제
    let body = body_json(
        put_json(app, "/spaces/team", json!({ "homePageSlug": null })).await,
    )
    .await;
    assert_eq!(body["homePageSlug"], Value::Null);
}

#[tokio::test]
async fn update_unknown_space_returns_404() {
    let (app, _dir, _path) = build_test_app();

    let res = put_json(app, "/spaces/nope", json!({ "name": "X" })).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn default_space_cannot_be_deleted() {
    let (app, _dir, _path) = build_test_app();

    // 다른 스페이스가 있어도 기본 스페이스는 삭제 불가
    post_json(app.clone(), "/spaces", json!({ "name": "Other" })).await;

    let res = delete(app.clone(), "/spaces/default").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = body_json(get(app, "/spaces/default").await).await;
    assert_eq!(body["slug"], "default");
}

#[tokio::test]
async fn delete_unknown_space_returns_404() {
    let (app, _dir, _path) = build_test_app();

    let res = delete(app, "/spaces/nope").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_space_removes_its_articles_and_versions() {
    let (app, _dir, db_path) = build_test_app();

    let team = body_json(post_json(app.clone(), "/spaces", json!({ "name": "Team" })).await).await;
    let team_id = team["id"].as_i64().unwrap();

    post_json(
        app.clone(),
        "/articles",
        json!({ "title": "Team Page", "bodyMarkdown": "ours", "spaceId": team_id }),
    )
    .await;
    post_json(
        app.clone(),
        "/articles",
        json!({ "title": "Team Notes", "spaceId": team_id }),
    )
    .await;
    let kept = body_json(
        post_json(app.clone(), "/articles", json!({ "title": "Default Page" })).await,
    )
    .await;
    let kept_id = kept["id"].as_i64().unwrap();

    let res = delete(app.clone(), "/spaces/team").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["success"], true);

    // 남은 아티클은 기본 스페이스 것 하나뿐
    let list = body_json(get(app.clone(), "/articles").await).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["slug"], "default-page");

    assert_eq!(
        get(app, "/articles/team-page").await.status(),
        StatusCode::NOT_FOUND
    );

    // 버전 이력도 백킹 파일에서 함께 사라졌는지 확인
    let raw = std::fs::read_to_string(&db_path).unwrap();
    let doc: Value = serde_json::from_str(&raw).unwrap();
    let versions = doc["articleVersions"].as_array().unwrap();
    assert!(!versions.is_empty());
    assert!(versions
        .iter()
        .all(|v| v["articleId"].as_i64() == Some(kept_id)));
}

#[tokio::test]
async fn space_article_listing_is_scoped_and_body_free() {
    let (app, _dir, _path) = build_test_app();

    let team = body_json(post_json(app.clone(), "/spaces", json!({ "name": "Team" })).await).await;
    let team_id = team["id"].as_i64().unwrap();

    post_json(
        app.clone(),
        "/articles",
        json!({ "title": "In Team", "bodyMarkdown": "secret body", "spaceId": team_id }),
    )
    .await;
    post_json(app.clone(), "/articles", json!({ "title": "In Default" })).await;

    let res = get(app.clone(), "/spaces/team/articles").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    let articles = body.as_array().unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["slug"], "in-team");
    assert!(articles[0].get("bodyMarkdown").is_none());

    let res = get(app, "/spaces/nope/articles").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
