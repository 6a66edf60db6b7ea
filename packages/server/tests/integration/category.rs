use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn duplicate_slug_is_a_conflict() {
    let app = TestApp::spawn().await;
    let (_, token) = app.create_authenticated_user("editor", "editor").await;

    let body = json!({"name": "Green Building", "slug": "green-building"});
    let first = app.post_with_token(routes::ADMIN_CATEGORIES, &body, &token).await;
    assert_eq!(first.status, 201, "first create failed: {}", first.text);

    let duplicate = json!({"name": "Another Name", "slug": "green-building"});
    let second = app
        .post_with_token(routes::ADMIN_CATEGORIES, &duplicate, &token)
        .await;

    assert_eq!(second.status, 409);
    assert_eq!(second.body["code"], "CONFLICT");

    let list = app.get_without_token(routes::CATEGORIES).await;
    assert_eq!(list.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_name_is_a_conflict() {
    let app = TestApp::spawn().await;
    let (_, token) = app.create_authenticated_user("editor", "editor").await;
    app.create_category(&token, "Sustainability", "sustainability").await;

    let res = app
        .post_with_token(
            routes::ADMIN_CATEGORIES,
            &json!({"name": "Sustainability", "slug": "sustainability-two"}),
            &token,
        )
        .await;

    assert_eq!(res.status, 409);
}

#[tokio::test]
async fn public_list_is_ordered_by_name() {
    let app = TestApp::spawn().await;
    let (_, token) = app.create_authenticated_user("editor", "editor").await;
    app.create_category(&token, "Waste Management", "waste-management").await;
    app.create_category(&token, "Green Building", "green-building").await;

    let res = app.get_without_token(routes::CATEGORIES).await;

    assert_eq!(res.status, 200);
    let names: Vec<&str> = res
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Green Building", "Waste Management"]);
}

#[tokio::test]
async fn update_changes_only_the_provided_fields() {
    let app = TestApp::spawn().await;
    let (_, token) = app.create_authenticated_user("editor", "editor").await;
    let id = app.create_category(&token, "Monitoring", "monitoring").await;

    let res = app
        .put_with_token(
            &routes::admin_category(id),
            &json!({"name": "Environmental Monitoring"}),
            &token,
        )
        .await;

    assert_eq!(res.status, 200, "update failed: {}", res.text);
    assert_eq!(res.body["name"], "Environmental Monitoring");
    assert_eq!(res.body["slug"], "monitoring");
    assert_eq!(res.body["description"], "test category");
}

#[tokio::test]
async fn invalid_slugs_are_rejected() {
    let app = TestApp::spawn().await;
    let (_, token) = app.create_authenticated_user("editor", "editor").await;

    let res = app
        .post_with_token(
            routes::ADMIN_CATEGORIES,
            &json!({"name": "Bad Slug", "slug": "Not A Slug!"}),
            &token,
        )
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["errors"][0]["field"], "slug");
}

#[tokio::test]
async fn deleting_a_category_with_posts_is_restricted() {
    let app = TestApp::spawn().await;
    let (author_id, token) = app.create_authenticated_user("editor", "editor").await;
    let category_id = app.create_category(&token, "Held", "held").await;
    app.create_post(&token, author_id, category_id, "Holding Post", true)
        .await;

    let res = app
        .delete_with_token(&routes::admin_category(category_id), &token)
        .await;

    assert_eq!(res.status, 409);
    assert_eq!(res.body["code"], "CONFLICT");

    let list = app.get_without_token(routes::CATEGORIES).await;
    assert_eq!(list.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_an_absent_category_returns_not_found() {
    let app = TestApp::spawn().await;
    let (_, token) = app.create_authenticated_user("editor", "editor").await;

    let res = app
        .delete_with_token(&routes::admin_category(999_999), &token)
        .await;

    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], "NOT_FOUND");
}
