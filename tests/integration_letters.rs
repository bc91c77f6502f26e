use reqwest::StatusCode;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_letter_crud_flow() {
    let app = common::TestApp::spawn().await;
    common::signup_user(&app, &app.client, "writer", "writer@x.com").await;

    // Create two letters; the list comes back newest first.
    let first: serde_json::Value = app
        .client
        .post(format!("{}/letters", app.server_url))
        .json(&json!({ "title": "To my past self", "content": "It gets easier." }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let resp = app
        .client
        .post(format!("{}/letters", app.server_url))
        .json(&json!({ "title": "Never sent", "content": "Some words stay here." }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let second: serde_json::Value = resp.json().await.unwrap();

    let letters: serde_json::Value =
        app.client.get(format!("{}/letters", app.server_url)).send().await.unwrap().json().await.unwrap();
    let letters = letters.as_array().unwrap();
    assert_eq!(letters.len(), 2);
    assert_eq!(letters[0]["id"], second["id"]);
    assert_eq!(letters[1]["id"], first["id"]);

    // Read one back by id.
    let letter_url = format!("{}/letters/{}", app.server_url, first["id"].as_str().unwrap());
    let fetched: serde_json::Value =
        app.client.get(&letter_url).send().await.unwrap().json().await.unwrap();
    assert_eq!(fetched["title"], "To my past self");

    // Patch only the content; the title stays as it was.
    let resp = app
        .client
        .patch(&letter_url)
        .json(&json!({ "content": "It gets easier, truly." }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let patched: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(patched["title"], "To my past self");
    assert_eq!(patched["content"], "It gets easier, truly.");

    // Delete, then delete again: the second call must be a 404, not a silent success.
    let resp = app.client.delete(&letter_url).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let resp = app.client.delete(&letter_url).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_letter_validation() {
    let app = common::TestApp::spawn().await;
    common::signup_user(&app, &app.client, "strict", "strict@x.com").await;

    let url = format!("{}/letters", app.server_url);

    let resp = app
        .client
        .post(&url)
        .json(&json!({ "title": "", "content": "body" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .client
        .post(&url)
        .json(&json!({ "title": "t".repeat(256), "content": "body" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app.client.post(&url).json(&json!({ "title": "ok", "content": "" })).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // A PATCH that empties a field is rejected and changes nothing.
    let created: serde_json::Value = app
        .client
        .post(&url)
        .json(&json!({ "title": "keep me", "content": "intact" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let letter_url = format!("{}/letters/{}", app.server_url, created["id"].as_str().unwrap());

    let resp = app.client.patch(&letter_url).json(&json!({ "title": "" })).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let unchanged: serde_json::Value =
        app.client.get(&letter_url).send().await.unwrap().json().await.unwrap();
    assert_eq!(unchanged["title"], "keep me");
}

#[tokio::test]
async fn test_letters_require_session() {
    let app = common::TestApp::spawn().await;
    let anonymous = common::new_client();

    let resp = anonymous.get(format!("{}/letters", app.server_url)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = anonymous
        .post(format!("{}/letters", app.server_url))
        .json(&json!({ "title": "nope", "content": "nope" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
