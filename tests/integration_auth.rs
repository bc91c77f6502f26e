use reqwest::StatusCode;
use serde_json::json;
use soulspace_server::storage::session_repo::SessionRepository;
use soulspace_server::storage::user_repo::UserRepository;
use uuid::Uuid;

mod common;

#[tokio::test]
async fn test_signup_establishes_session() {
    let app = common::TestApp::spawn().await;

    let resp = app
        .client
        .post(format!("{}/signup", app.server_url))
        .json(&json!({
            "username": "ana",
            "email": "a@x.com",
            "password": "secret1",
            "password_confirmation": "secret1"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(user["username"], "ana");
    assert_eq!(user["email"], "a@x.com");

    // The digest never leaves the server, under any name.
    let obj = user.as_object().unwrap();
    assert!(!obj.keys().any(|k| k.contains("password")));

    // Signup implies login: the cookie from the response authenticates us.
    let resp = app.client.get(format!("{}/check_session", app.server_url)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let session_user: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(session_user["id"], user["id"]);
}

#[tokio::test]
async fn test_signup_password_mismatch_creates_nothing() {
    let app = common::TestApp::spawn().await;

    let resp = app
        .client
        .post(format!("{}/signup", app.server_url))
        .json(&json!({
            "username": "mismatch",
            "email": "mismatch@x.com",
            "password": "secret1",
            "password_confirmation": "secret2"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["errors"], "Passwords do not match.");

    // No row was written, so logging in with either password fails.
    let resp = app
        .client
        .post(format!("{}/login", app.server_url))
        .json(&json!({ "identifier": "mismatch", "password": "secret1" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_signup_field_validation() {
    let app = common::TestApp::spawn().await;
    let url = format!("{}/signup", app.server_url);

    let cases = [
        json!({ "username": "ab", "email": "ab@x.com", "password": "secret1", "password_confirmation": "secret1" }),
        json!({ "username": "goodname", "email": "not-an-email", "password": "secret1", "password_confirmation": "secret1" }),
        json!({ "username": "goodname", "email": "short@x.com", "password": "12345", "password_confirmation": "12345" }),
        json!({ "username": "goodname", "email": "missing@x.com" }),
    ];

    for payload in cases {
        let resp = app.client.post(&url).json(&payload).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "payload: {payload}");
    }
}

#[tokio::test]
async fn test_signup_uniqueness_is_case_insensitive() {
    let app = common::TestApp::spawn().await;
    common::signup_user(&app, &app.client, "Frida", "frida@x.com").await;

    let resp = common::new_client()
        .post(format!("{}/signup", app.server_url))
        .json(&json!({
            "username": "FRIDA",
            "email": "other@x.com",
            "password": "secret1",
            "password_confirmation": "secret1"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["errors"], "Username already taken.");

    let resp = common::new_client()
        .post(format!("{}/signup", app.server_url))
        .json(&json!({
            "username": "someone_else",
            "email": "FRIDA@X.COM",
            "password": "secret1",
            "password_confirmation": "secret1"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["errors"], "Email already in use.");
}

#[tokio::test]
async fn test_login_by_username_or_email() {
    let app = common::TestApp::spawn().await;
    let user = common::signup_user(&app, &app.client, "lee", "lee@x.com").await;

    for identifier in ["lee", "lee@x.com", "LEE", "Lee@X.com"] {
        let client = common::new_client();
        let resp = client
            .post(format!("{}/login", app.server_url))
            .json(&json!({ "identifier": identifier, "password": "secret1" }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "identifier: {identifier}");
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["id"], user["id"]);
    }
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = common::TestApp::spawn().await;
    common::signup_user(&app, &app.client, "enum_target", "enum@x.com").await;

    let wrong_password = common::new_client()
        .post(format!("{}/login", app.server_url))
        .json(&json!({ "identifier": "enum_target", "password": "wrong_password" }))
        .send()
        .await
        .unwrap();
    let unknown_user = common::new_client()
        .post(format!("{}/login", app.server_url))
        .json(&json!({ "identifier": "no_such_user", "password": "wrong_password" }))
        .send()
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    let body_a = wrong_password.bytes().await.unwrap();
    let body_b = unknown_user.bytes().await.unwrap();
    assert_eq!(body_a, body_b, "login failure responses must be byte-identical");
}

#[tokio::test]
async fn test_logout_clears_session_and_is_idempotent() {
    let app = common::TestApp::spawn().await;
    common::signup_user(&app, &app.client, "bye", "bye@x.com").await;

    let resp = app.client.delete(format!("{}/logout", app.server_url)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app.client.get(format!("{}/check_session", app.server_url)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // A second logout without a session is still a 204.
    let resp = app.client.delete(format!("{}/logout", app.server_url)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_stale_session_for_deleted_user_is_cleared() {
    let app = common::TestApp::spawn().await;
    let user = common::signup_user(&app, &app.client, "ghost", "ghost@x.com").await;
    let user_id = Uuid::parse_str(user["id"].as_str().unwrap()).unwrap();

    let user_repo = UserRepository::new();
    let deleted = user_repo.delete(&app.pool, user_id).await.unwrap();
    assert!(deleted);

    // The cookie still exists client-side, but the session must not resolve.
    let resp = app.client.get(format!("{}/check_session", app.server_url)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // And nothing is left of it server-side either.
    let session_repo = SessionRepository::new();
    assert_eq!(session_repo.count_for_user(&app.pool, user_id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_check_session_without_cookie() {
    let app = common::TestApp::spawn().await;

    let resp = common::new_client().get(format!("{}/check_session", app.server_url)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
