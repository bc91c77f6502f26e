use reqwest::StatusCode;
use soulspace_server::api::wellness::LOOP_BREAKER_PROMPTS;
use soulspace_server::storage::soul_note_repo::SoulNoteRepository;

mod common;

#[tokio::test]
async fn test_random_soul_note_empty_pool() {
    let app = common::TestApp::spawn().await;

    // No seeding has happened: an empty pool is "no content", not an error.
    let resp = app
        .client
        .get(format!("{}/soul_notes/random", app.server_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_random_soul_note_from_seeded_pool() {
    let app = common::TestApp::spawn().await;

    let repo = SoulNoteRepository::new(app.pool.clone());
    repo.create("You are not behind. You are on your own path.", Some("Encouragement"))
        .await
        .unwrap();

    // Soul notes are public: no session required.
    let resp = app
        .client
        .get(format!("{}/soul_notes/random", app.server_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let note: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(note["message"], "You are not behind. You are on your own path.");
    assert_eq!(note["category"], "Encouragement");
    assert!(note["id"].is_string());
}

#[tokio::test]
async fn test_loop_breaker_prompt_is_from_known_set() {
    let app = common::TestApp::spawn().await;

    for _ in 0..5 {
        let resp = app
            .client
            .get(format!("{}/loop_breaker/prompt", app.server_url))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = resp.json().await.unwrap();
        let prompt = body["prompt"].as_str().unwrap();
        assert!(LOOP_BREAKER_PROMPTS.contains(&prompt), "unexpected prompt: {prompt}");
    }
}

#[tokio::test]
async fn test_breath_ground_lists_techniques() {
    let app = common::TestApp::spawn().await;

    let resp = app
        .client
        .get(format!("{}/breath_ground", app.server_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    let techniques = body["techniques"].as_array().unwrap();
    assert!(!techniques.is_empty());
    for technique in techniques {
        assert!(technique["name"].is_string());
        assert!(technique["instructions"].is_string());
        assert!(technique["duration"].is_string());
    }
    let names: Vec<&str> =
        techniques.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert!(names.contains(&"Box Breathing"));
}
