use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn responses_never_contain_password_hashes() {
    let app = TestApp::spawn().await;
    let (_, admin_token) = app.create_authenticated_user("ops.admin", "admin").await;

    let invited = app
        .post_with_token(
            routes::ADMIN_USERS,
            &json!({
                "username": "sarah.putri",
                "email": "sarah.putri@greenfieldenv.co.id",
                "firstName": "Sarah",
                "lastName": "Putri",
                "role": "editor",
            }),
            &admin_token,
        )
        .await;
    assert_eq!(invited.status, 201, "invite failed: {}", invited.text);
    assert!(invited.body.get("password").is_none());

    let list = app.get_with_token(routes::ADMIN_USERS, &admin_token).await;
    assert_eq!(list.status, 200);
    for user in list.body.as_array().unwrap() {
        assert!(
            user.get("password").is_none(),
            "password hash leaked: {user}"
        );
    }
}

#[tokio::test]
async fn invited_users_can_log_in_with_the_starter_password() {
    let app = TestApp::spawn().await;
    let (admin_id, admin_token) = app.create_authenticated_user("ops.admin", "admin").await;

    let invited = app
        .post_with_token(
            routes::ADMIN_USERS,
            &json!({"username": "new.editor", "email": "new.editor@greenfieldenv.co.id", "role": "editor"}),
            &admin_token,
        )
        .await;
    assert_eq!(invited.status, 201);
    assert_eq!(invited.body["invitedBy"], admin_id);

    let res = app
        .post_without_token(
            routes::LOGIN,
            &json!({"username": "new.editor", "password": "password123"}),
        )
        .await;

    assert_eq!(res.status, 200, "starter login failed: {}", res.text);
    assert_eq!(res.body["user"]["role"], "editor");
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let app = TestApp::spawn().await;
    let (_, admin_token) = app.create_authenticated_user("ops.admin", "admin").await;

    let body = json!({"username": "first.user", "email": "shared@greenfieldenv.co.id"});
    let first = app.post_with_token(routes::ADMIN_USERS, &body, &admin_token).await;
    assert_eq!(first.status, 201);

    let duplicate = json!({"username": "second.user", "email": "shared@greenfieldenv.co.id"});
    let second = app
        .post_with_token(routes::ADMIN_USERS, &duplicate, &admin_token)
        .await;

    assert_eq!(second.status, 409);
    assert_eq!(second.body["code"], "CONFLICT");
}

#[tokio::test]
async fn unknown_roles_are_rejected() {
    let app = TestApp::spawn().await;
    let (_, admin_token) = app.create_authenticated_user("ops.admin", "admin").await;

    let res = app
        .post_with_token(
            routes::ADMIN_USERS,
            &json!({"username": "odd.role", "email": "odd.role@greenfieldenv.co.id", "role": "superuser"}),
            &admin_token,
        )
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["errors"][0]["field"], "role");
}

#[tokio::test]
async fn user_management_is_admin_only() {
    let app = TestApp::spawn().await;
    let (_, editor_token) = app.create_authenticated_user("editor", "editor").await;

    let res = app.get_with_token(routes::ADMIN_USERS, &editor_token).await;

    assert_eq!(res.status, 403);
    assert_eq!(res.body["code"], "PERMISSION_DENIED");
}

#[tokio::test]
async fn a_reset_password_takes_effect_immediately() {
    let app = TestApp::spawn().await;
    let (_, admin_token) = app.create_authenticated_user("ops.admin", "admin").await;
    let (user_id, _) = app.create_authenticated_user("sarah.putri", "editor").await;

    let res = app
        .put_with_token(
            &routes::admin_user(user_id),
            &json!({"password": "fresh-password-1"}),
            &admin_token,
        )
        .await;
    assert_eq!(res.status, 200, "update failed: {}", res.text);

    let old = app
        .post_without_token(
            routes::LOGIN,
            &json!({"username": "sarah.putri", "password": "securepass"}),
        )
        .await;
    assert_eq!(old.status, 401);

    let fresh = app
        .post_without_token(
            routes::LOGIN,
            &json!({"username": "sarah.putri", "password": "fresh-password-1"}),
        )
        .await;
    assert_eq!(fresh.status, 200);
}

#[tokio::test]
async fn deleting_an_author_with_posts_is_restricted() {
    let app = TestApp::spawn().await;
    let (_, admin_token) = app.create_authenticated_user("ops.admin", "admin").await;
    let (author_id, editor_token) = app.create_authenticated_user("prolific", "editor").await;
    let category_id = app.create_category(&editor_token, "Held", "held").await;
    app.create_post(&editor_token, author_id, category_id, "Their Post", true)
        .await;

    let res = app
        .delete_with_token(&routes::admin_user(author_id), &admin_token)
        .await;

    assert_eq!(res.status, 409);
    assert_eq!(res.body["code"], "CONFLICT");
}

#[tokio::test]
async fn deleting_an_absent_user_returns_not_found() {
    let app = TestApp::spawn().await;
    let (_, admin_token) = app.create_authenticated_user("ops.admin", "admin").await;

    let res = app
        .delete_with_token(&routes::admin_user(999_999), &admin_token)
        .await;

    assert_eq!(res.status, 404);
}
