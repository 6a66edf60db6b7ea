use crate::common::{TestApp, routes};

#[tokio::test]
async fn seed_populates_the_demo_dataset() {
    let app = TestApp::spawn().await;
    app.seed().await;

    let categories = app.get_without_token(routes::CATEGORIES).await;
    assert_eq!(categories.body.as_array().unwrap().len(), 4);

    let services = app.get_without_token(routes::SERVICES).await;
    assert_eq!(services.body.as_array().unwrap().len(), 4);

    let logos = app.get_without_token(routes::CLIENT_LOGOS).await;
    let orders: Vec<i64> = logos
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["sortOrder"].as_i64().unwrap())
        .collect();
    assert_eq!(orders, vec![1, 2, 3, 4, 5, 6]);

    let projects = app.get_without_token(routes::PROJECTS).await;
    assert_eq!(projects.body.as_array().unwrap().len(), 3);

    let posts = app.get_without_token(routes::BLOG_POSTS).await;
    assert_eq!(posts.body.as_array().unwrap().len(), 3);
    // Default order is createdAt descending, so the newest article leads.
    assert_eq!(
        posts.body[0]["title"],
        "Implementasi Green Building di Indonesia: Peluang dan Tantangan"
    );
}

#[tokio::test]
async fn seeding_twice_resets_to_the_same_dataset() {
    let app = TestApp::spawn().await;
    app.seed().await;
    app.seed().await;

    let categories = app.get_without_token(routes::CATEGORIES).await;
    assert_eq!(categories.body.as_array().unwrap().len(), 4);

    let posts = app.get_without_token(routes::BLOG_POSTS).await;
    assert_eq!(posts.body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn seeded_foreign_keys_resolve_to_seeded_parents() {
    let app = TestApp::spawn().await;
    app.seed().await;

    let services = app.get_without_token(routes::SERVICES).await;
    let service_ids: Vec<i64> = services
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();

    let projects = app.get_without_token(routes::PROJECTS).await;
    for project in projects.body.as_array().unwrap() {
        let service_id = project["serviceId"].as_i64().unwrap();
        assert!(
            service_ids.contains(&service_id),
            "project {} points at unknown service {service_id}",
            project["title"]
        );
    }
}
