use serde_json::json;

use crate::common::{TestApp, routes};

async fn setup() -> (TestApp, i32, String) {
    let app = TestApp::spawn().await;
    let (_, token) = app.create_authenticated_user("editor", "editor").await;
    let service_id = app.create_service(&token, "Assessment", "assessment").await;
    (app, service_id, token)
}

async fn create_project(
    app: &TestApp,
    token: &str,
    service_id: i32,
    title: &str,
    completed_at: &str,
) -> i32 {
    let res = app
        .post_with_token(
            routes::ADMIN_PROJECTS,
            &json!({
                "title": title,
                "description": "<p>Full project description.</p>",
                "shortDescription": "Short description",
                "client": "PT Example",
                "serviceId": service_id,
                "completedAt": completed_at,
                "duration": "6 months",
                "teamSize": 8,
                "technologies": ["IoT Sensors", "Data Analytics"],
            }),
            token,
        )
        .await;
    assert_eq!(res.status, 201, "create_project failed: {}", res.text);
    res.id()
}

#[tokio::test]
async fn created_project_round_trips_through_get() {
    let (app, service_id, token) = setup().await;
    let id = create_project(&app, &token, service_id, "Round Trip", "2023-10-15T00:00:00Z").await;

    let res = app.get_without_token(&routes::project(id)).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["title"], "Round Trip");
    assert_eq!(res.body["client"], "PT Example");
    assert_eq!(res.body["serviceId"], service_id);
    assert_eq!(res.body["teamSize"], 8);
    assert_eq!(res.body["duration"], "6 months");
    assert_eq!(res.body["technologies"], json!(["IoT Sensors", "Data Analytics"]));
}

#[tokio::test]
async fn public_list_is_filtered_to_active_and_sorted_by_completion() {
    let (app, service_id, token) = setup().await;
    let older = create_project(&app, &token, service_id, "Older", "2023-01-10T00:00:00Z").await;
    let newer = create_project(&app, &token, service_id, "Newer", "2023-11-30T00:00:00Z").await;
    let hidden = create_project(&app, &token, service_id, "Hidden", "2023-06-01T00:00:00Z").await;
    let res = app
        .put_with_token(
            &routes::admin_project(hidden),
            &json!({"isActive": false}),
            &token,
        )
        .await;
    assert_eq!(res.status, 200);

    // Default sort: completedAt descending.
    let public = app.get_without_token(routes::PROJECTS).await;
    let ids: Vec<i64> = public
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![newer as i64, older as i64]);

    let admin = app.get_with_token(routes::ADMIN_PROJECTS, &token).await;
    assert_eq!(admin.body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn inactive_projects_are_invisible_on_the_public_single_route() {
    let (app, service_id, token) = setup().await;
    let id = create_project(&app, &token, service_id, "Hidden", "2023-06-01T00:00:00Z").await;
    app.put_with_token(
        &routes::admin_project(id),
        &json!({"isActive": false}),
        &token,
    )
    .await;

    let res = app.get_without_token(&routes::project(id)).await;

    assert_eq!(res.status, 404);
}

#[tokio::test]
async fn create_with_a_dangling_service_is_rejected() {
    let (app, _, token) = setup().await;

    let res = app
        .post_with_token(
            routes::ADMIN_PROJECTS,
            &json!({
                "title": "Orphan",
                "description": "<p>Body</p>",
                "shortDescription": "Short",
                "client": "PT Example",
                "serviceId": 999_999,
            }),
            &token,
        )
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["errors"][0]["field"], "serviceId");
}

#[tokio::test]
async fn update_can_clear_completion_metadata_with_explicit_nulls() {
    let (app, service_id, token) = setup().await;
    let id = create_project(&app, &token, service_id, "Clearable", "2023-10-15T00:00:00Z").await;

    let res = app
        .put_with_token(
            &routes::admin_project(id),
            &json!({"completedAt": null, "duration": null, "teamSize": null}),
            &token,
        )
        .await;

    assert_eq!(res.status, 200, "update failed: {}", res.text);
    assert!(res.body["completedAt"].is_null());
    assert!(res.body["duration"].is_null());
    assert!(res.body["teamSize"].is_null());
    // Untouched fields survive.
    assert_eq!(res.body["title"], "Clearable");
}

#[tokio::test]
async fn zero_team_size_is_a_validation_error() {
    let (app, service_id, token) = setup().await;

    let res = app
        .post_with_token(
            routes::ADMIN_PROJECTS,
            &json!({
                "title": "Tiny",
                "description": "<p>Body</p>",
                "shortDescription": "Short",
                "client": "PT Example",
                "serviceId": service_id,
                "teamSize": 0,
            }),
            &token,
        )
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["errors"][0]["field"], "teamSize");
}
