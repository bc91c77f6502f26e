use reqwest::StatusCode;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_note_crud_flow() {
    let app = common::TestApp::spawn().await;
    common::signup_user(&app, &app.client, "noter", "noter@x.com").await;

    let url = format!("{}/user_notes", app.server_url);

    let resp = app.client.post(&url).json(&json!({ "content": "first thought" })).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let first: serde_json::Value = resp.json().await.unwrap();

    let second: serde_json::Value = app
        .client
        .post(&url)
        .json(&json!({ "content": "second thought" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // Newest first.
    let notes: serde_json::Value =
        app.client.get(&url).send().await.unwrap().json().await.unwrap();
    let notes = notes.as_array().unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0]["id"], second["id"]);
    assert_eq!(notes[1]["id"], first["id"]);

    let note_url = format!("{}/user_notes/{}", app.server_url, first["id"].as_str().unwrap());
    let patched: serde_json::Value = app
        .client
        .patch(&note_url)
        .json(&json!({ "content": "first thought, revised" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(patched["content"], "first thought, revised");

    let resp = app.client.delete(&note_url).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let resp = app.client.get(&note_url).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_note_content_required() {
    let app = common::TestApp::spawn().await;
    common::signup_user(&app, &app.client, "empty", "empty@x.com").await;

    let url = format!("{}/user_notes", app.server_url);

    let resp = app.client.post(&url).json(&json!({ "content": "" })).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app.client.post(&url).json(&json!({})).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let created: serde_json::Value = app
        .client
        .post(&url)
        .json(&json!({ "content": "keep" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let note_url = format!("{}/user_notes/{}", app.server_url, created["id"].as_str().unwrap());

    let resp = app.client.patch(&note_url).json(&json!({ "content": "" })).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let unchanged: serde_json::Value =
        app.client.get(&note_url).send().await.unwrap().json().await.unwrap();
    assert_eq!(unchanged["content"], "keep");
}
