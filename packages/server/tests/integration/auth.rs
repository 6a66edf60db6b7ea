use serde_json::json;

use crate::common::{TestApp, routes};

mod login {
    use super::*;

    #[tokio::test]
    async fn seeded_admin_can_log_in() {
        let app = TestApp::spawn().await;
        app.seed().await;

        let res = app
            .post_without_token(
                routes::LOGIN,
                &json!({"username": "admin", "password": "greenfield2023"}),
            )
            .await;

        assert_eq!(res.status, 200, "Login failed: {}", res.text);
        assert!(res.body["token"].is_string());
        assert_eq!(res.body["user"]["username"], "admin");
        assert_eq!(res.body["user"]["role"], "admin");
        assert!(
            res.body["user"].get("password").is_none(),
            "password hash leaked: {}",
            res.text
        );
    }

    #[tokio::test]
    async fn wrong_password_is_rejected_with_a_generic_message() {
        let app = TestApp::spawn().await;
        app.seed().await;

        let res = app
            .post_without_token(
                routes::LOGIN,
                &json!({"username": "admin", "password": "wrong-password"}),
            )
            .await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "INVALID_CREDENTIALS");
        assert_eq!(res.body["message"], "Invalid credentials");
    }

    #[tokio::test]
    async fn unknown_username_gets_the_same_response_as_a_wrong_password() {
        let app = TestApp::spawn().await;
        app.seed().await;

        let wrong_password = app
            .post_without_token(
                routes::LOGIN,
                &json!({"username": "admin", "password": "wrong-password"}),
            )
            .await;
        let unknown_user = app
            .post_without_token(
                routes::LOGIN,
                &json!({"username": "no.such.user", "password": "wrong-password"}),
            )
            .await;

        assert_eq!(unknown_user.status, wrong_password.status);
        assert_eq!(unknown_user.text, wrong_password.text);
    }

    #[tokio::test]
    async fn empty_credentials_are_a_validation_error() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(routes::LOGIN, &json!({"username": "", "password": ""}))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn deactivated_user_cannot_log_in() {
        let app = TestApp::spawn().await;
        let (_, admin_token) = app.create_authenticated_user("ops.admin", "admin").await;

        let invited = app
            .post_with_token(
                routes::ADMIN_USERS,
                &json!({"username": "temp.editor", "email": "temp.editor@greenfieldenv.co.id", "role": "editor"}),
                &admin_token,
            )
            .await;
        assert_eq!(invited.status, 201, "invite failed: {}", invited.text);

        let disabled = app
            .put_with_token(
                &routes::admin_user(invited.id()),
                &json!({"isActive": false}),
                &admin_token,
            )
            .await;
        assert_eq!(disabled.status, 200);

        let res = app
            .post_without_token(
                routes::LOGIN,
                &json!({"username": "temp.editor", "password": "password123"}),
            )
            .await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "INVALID_CREDENTIALS");
    }
}

mod admin_gate {
    use super::*;

    #[tokio::test]
    async fn admin_routes_require_a_token() {
        let app = TestApp::spawn().await;

        let res = app.get_without_token(routes::ADMIN_BLOG_POSTS).await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "TOKEN_MISSING");
    }

    #[tokio::test]
    async fn garbage_tokens_are_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .get_with_token(routes::ADMIN_BLOG_POSTS, "not-a-real-token")
            .await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "TOKEN_INVALID");
    }

    #[tokio::test]
    async fn viewers_can_read_but_not_write_content() {
        let app = TestApp::spawn().await;
        let (_, viewer_token) = app.create_authenticated_user("read.only", "viewer").await;

        let list = app
            .get_with_token(routes::ADMIN_BLOG_POSTS, &viewer_token)
            .await;
        assert_eq!(list.status, 200);

        let create = app
            .post_with_token(
                routes::ADMIN_CATEGORIES,
                &json!({"name": "Forbidden", "slug": "forbidden"}),
                &viewer_token,
            )
            .await;
        assert_eq!(create.status, 403);
        assert_eq!(create.body["code"], "PERMISSION_DENIED");
    }
}
