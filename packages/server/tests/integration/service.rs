use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn public_list_excludes_inactive_services() {
    let app = TestApp::spawn().await;
    let (_, token) = app.create_authenticated_user("editor", "editor").await;
    app.create_service(&token, "Active Service", "active-service").await;
    let inactive_id = app
        .create_service(&token, "Retired Service", "retired-service")
        .await;
    let res = app
        .put_with_token(
            &routes::admin_service(inactive_id),
            &json!({"isActive": false}),
            &token,
        )
        .await;
    assert_eq!(res.status, 200);

    let public = app.get_without_token(routes::SERVICES).await;
    let names: Vec<&str> = public
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Active Service"]);

    let admin = app.get_with_token(routes::ADMIN_SERVICES, &token).await;
    assert_eq!(admin.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn slug_lookup_finds_the_service() {
    let app = TestApp::spawn().await;
    let (_, token) = app.create_authenticated_user("editor", "editor").await;
    app.create_service(&token, "Impact Assessment", "impact-assessment").await;

    let res = app
        .get_without_token(&routes::service_by_slug("impact-assessment"))
        .await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["name"], "Impact Assessment");
    assert_eq!(
        res.body["features"],
        json!(["One", "Two"]),
        "features should round-trip as a string list: {}",
        res.text
    );
}

#[tokio::test]
async fn unknown_slugs_return_not_found() {
    let app = TestApp::spawn().await;

    let res = app.get_without_token(&routes::service_by_slug("nope")).await;

    assert_eq!(res.status, 404);
}

#[tokio::test]
async fn duplicate_slug_is_a_conflict() {
    let app = TestApp::spawn().await;
    let (_, token) = app.create_authenticated_user("editor", "editor").await;
    app.create_service(&token, "First", "shared-slug").await;

    let res = app
        .post_with_token(
            routes::ADMIN_SERVICES,
            &json!({
                "name": "Second",
                "description": "<p>Body</p>",
                "shortDescription": "Short",
                "slug": "shared-slug",
                "icon": "Wind",
            }),
            &token,
        )
        .await;

    assert_eq!(res.status, 409);
    assert_eq!(res.body["code"], "CONFLICT");
}

#[tokio::test]
async fn update_can_replace_the_feature_list() {
    let app = TestApp::spawn().await;
    let (_, token) = app.create_authenticated_user("editor", "editor").await;
    let id = app.create_service(&token, "Editable", "editable").await;

    let res = app
        .put_with_token(
            &routes::admin_service(id),
            &json!({"features": ["Monitoring Emisi", "Audit"]}),
            &token,
        )
        .await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["features"], json!(["Monitoring Emisi", "Audit"]));
    assert_eq!(res.body["name"], "Editable");
}

#[tokio::test]
async fn deleting_a_service_with_projects_is_restricted() {
    let app = TestApp::spawn().await;
    let (_, token) = app.create_authenticated_user("editor", "editor").await;
    let service_id = app.create_service(&token, "Parent", "parent").await;

    let project = app
        .post_with_token(
            routes::ADMIN_PROJECTS,
            &json!({
                "title": "Dependent Project",
                "description": "<p>Body</p>",
                "shortDescription": "Short",
                "client": "PT Example",
                "serviceId": service_id,
            }),
            &token,
        )
        .await;
    assert_eq!(project.status, 201, "project create failed: {}", project.text);

    let res = app
        .delete_with_token(&routes::admin_service(service_id), &token)
        .await;

    assert_eq!(res.status, 409);
    assert_eq!(res.body["code"], "CONFLICT");
}
