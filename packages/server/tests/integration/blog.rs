use serde_json::json;

use crate::common::{TestApp, routes};

async fn setup() -> (TestApp, i32, i32, String) {
    let app = TestApp::spawn().await;
    let (author_id, token) = app.create_authenticated_user("sarah.putri", "editor").await;
    let category_id = app.create_category(&token, "Green Building", "green-building").await;
    (app, author_id, category_id, token)
}

mod public_surface {
    use super::*;

    #[tokio::test]
    async fn public_list_contains_only_published_posts() {
        let (app, author_id, category_id, token) = setup().await;
        app.create_post(&token, author_id, category_id, "Published", true)
            .await;
        app.create_post(&token, author_id, category_id, "Draft", false)
            .await;

        let public = app.get_without_token(routes::BLOG_POSTS).await;
        assert_eq!(public.status, 200);
        let titles: Vec<&str> = public
            .body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Published"]);

        let admin = app.get_with_token(routes::ADMIN_BLOG_POSTS, &token).await;
        assert_eq!(admin.status, 200);
        assert_eq!(admin.body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn drafts_are_invisible_on_the_public_single_post_route() {
        let (app, author_id, category_id, token) = setup().await;
        let draft_id = app
            .create_post(&token, author_id, category_id, "Draft", false)
            .await;

        let res = app.get_without_token(&routes::blog_post(draft_id)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn sorting_by_created_at_respects_direction() {
        let (app, author_id, category_id, token) = setup().await;
        let first = app
            .create_post(&token, author_id, category_id, "First", true)
            .await;
        let second = app
            .create_post(&token, author_id, category_id, "Second", true)
            .await;

        let asc = app
            .get_without_token(&format!(
                "{}?sortBy=createdAt&sortOrder=asc",
                routes::BLOG_POSTS
            ))
            .await;
        let ids: Vec<i64> = asc
            .body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![first as i64, second as i64]);

        let desc = app
            .get_without_token(&format!(
                "{}?sortBy=createdAt&sortOrder=desc",
                routes::BLOG_POSTS
            ))
            .await;
        let ids: Vec<i64> = desc
            .body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![second as i64, first as i64]);
    }

    #[tokio::test]
    async fn unknown_sort_keys_are_rejected() {
        let (app, ..) = setup().await;

        let res = app
            .get_without_token(&format!("{}?sortBy=password", routes::BLOG_POSTS))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        assert_eq!(res.body["errors"][0]["field"], "sortBy");
    }
}

mod crud {
    use super::*;

    #[tokio::test]
    async fn created_post_round_trips_through_get() {
        let (app, author_id, category_id, token) = setup().await;

        let created = app
            .post_with_token(
                routes::ADMIN_BLOG_POSTS,
                &json!({
                    "title": "Round Trip",
                    "content": "<p>Full body</p>",
                    "excerpt": "Excerpt",
                    "authorId": author_id,
                    "categoryId": category_id,
                    "imageUrl": "https://example.com/cover.jpg",
                    "published": true,
                }),
                &token,
            )
            .await;
        assert_eq!(created.status, 201, "create failed: {}", created.text);
        assert!(created.body["createdAt"].is_string());

        let fetched = app
            .get_without_token(&routes::blog_post(created.id()))
            .await;
        assert_eq!(fetched.status, 200);
        assert_eq!(fetched.body["title"], "Round Trip");
        assert_eq!(fetched.body["content"], "<p>Full body</p>");
        assert_eq!(fetched.body["excerpt"], "Excerpt");
        assert_eq!(fetched.body["authorId"], author_id);
        assert_eq!(fetched.body["categoryId"], category_id);
        assert_eq!(fetched.body["imageUrl"], "https://example.com/cover.jpg");
        assert_eq!(fetched.body["published"], true);
    }

    #[tokio::test]
    async fn partial_update_preserves_untouched_fields() {
        let (app, author_id, category_id, token) = setup().await;
        let id = app
            .create_post(&token, author_id, category_id, "Original", true)
            .await;

        let updated = app
            .put_with_token(
                &routes::admin_blog_post(id),
                &json!({"title": "Renamed"}),
                &token,
            )
            .await;

        assert_eq!(updated.status, 200, "update failed: {}", updated.text);
        assert_eq!(updated.body["title"], "Renamed");
        assert_eq!(
            updated.body["content"],
            "<p>Body text long enough to be realistic.</p>"
        );
        assert_eq!(updated.body["excerpt"], "A short excerpt");
        assert_eq!(updated.body["published"], true);
    }

    #[tokio::test]
    async fn update_can_clear_the_image_with_an_explicit_null() {
        let (app, author_id, category_id, token) = setup().await;
        let created = app
            .post_with_token(
                routes::ADMIN_BLOG_POSTS,
                &json!({
                    "title": "With Image",
                    "content": "<p>Body</p>",
                    "excerpt": "Excerpt",
                    "authorId": author_id,
                    "categoryId": category_id,
                    "imageUrl": "https://example.com/cover.jpg",
                }),
                &token,
            )
            .await;

        let updated = app
            .put_with_token(
                &routes::admin_blog_post(created.id()),
                &json!({"imageUrl": null}),
                &token,
            )
            .await;

        assert_eq!(updated.status, 200);
        assert!(updated.body["imageUrl"].is_null());
    }

    #[tokio::test]
    async fn deleting_a_post_twice_returns_not_found() {
        let (app, author_id, category_id, token) = setup().await;
        let id = app
            .create_post(&token, author_id, category_id, "Doomed", true)
            .await;

        let first = app.delete_with_token(&routes::admin_blog_post(id), &token).await;
        assert_eq!(first.status, 200);
        assert!(first.body["message"].is_string());

        let second = app.delete_with_token(&routes::admin_blog_post(id), &token).await;
        assert_eq!(second.status, 404);
    }

    #[tokio::test]
    async fn create_with_missing_fields_lists_every_failing_field() {
        let (app, author_id, category_id, token) = setup().await;

        let res = app
            .post_with_token(
                routes::ADMIN_BLOG_POSTS,
                &json!({
                    "title": "",
                    "content": "",
                    "excerpt": "",
                    "authorId": author_id,
                    "categoryId": category_id,
                }),
                &token,
            )
            .await;

        assert_eq!(res.status, 400);
        let fields: Vec<&str> = res.body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect();
        assert!(fields.contains(&"title"));
        assert!(fields.contains(&"content"));
        assert!(fields.contains(&"excerpt"));
    }

    #[tokio::test]
    async fn create_with_a_dangling_author_is_rejected() {
        let (app, _, category_id, token) = setup().await;

        let res = app
            .post_with_token(
                routes::ADMIN_BLOG_POSTS,
                &json!({
                    "title": "Orphan",
                    "content": "<p>Body</p>",
                    "excerpt": "Excerpt",
                    "authorId": 999_999,
                    "categoryId": category_id,
                }),
                &token,
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["errors"][0]["field"], "authorId");
    }

    #[tokio::test]
    async fn updating_a_missing_post_returns_not_found() {
        let (app, .., token) = setup().await;

        let res = app
            .put_with_token(
                &routes::admin_blog_post(999_999),
                &json!({"title": "Ghost"}),
                &token,
            )
            .await;

        assert_eq!(res.status, 404);
    }
}
