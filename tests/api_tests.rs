// tests/api_tests.rs

use std::{sync::Arc, time::Duration};

use quiz_desk::{
    config::Config,
    routes,
    state::AppState,
    storage::{BlobStore, MemoryBlobStore},
    utils::credentials::AdminCredential,
};

const ADMIN_USER: &str = "admin";
const ADMIN_PASS: &str = "test_secret_for_integration_tests";

/// Spawns the app on a random port with an in-memory store.
/// Returns the base URL and the store, so tests can inspect blobs directly.
async fn spawn_app() -> (String, Arc<MemoryBlobStore>) {
    let store = Arc::new(MemoryBlobStore::new());

    let config = Config {
        admin_username: ADMIN_USER.to_string(),
        admin_password: ADMIN_PASS.to_string(),
        storage_root: ":memory:".to_string(),
        quizzes_prefix: "quizzes".to_string(),
        results_key: "interview_results.csv".to_string(),
        shortlist_key: "shortlisted_candidates.csv".to_string(),
        storage_timeout: Duration::from_secs(5),
        public_base_url: url::Url::parse("https://quiz.example.com").unwrap(),
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        static_dir: None,
        cors_origins: vec!["http://localhost:3000".to_string()],
        log_dir: std::env::temp_dir(),
        rust_log: "error".to_string(),
    };

    let state = AppState {
        store: store.clone(),
        config,
        admin: Arc::new(AdminCredential::new(ADMIN_USER, ADMIN_PASS).unwrap()),
    };

    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (address, store)
}

fn quiz_payload(name: &str) -> serde_json::Value {
    serde_json::json!({
        "quiz_name": name,
        "questions": [
            { "question": "First?", "options": ["A", "B", "C", "D"], "answer": "B" },
            { "question": "Second?", "options": ["A", "B", "C", "D"], "answer": "A" }
        ]
    })
}

async fn save_quiz(client: &reqwest::Client, address: &str, name: &str) {
    let response = client
        .post(format!("{}/api/admin/quizzes", address))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .json(&quiz_payload(name))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 201);
}

async fn submit(
    client: &reqwest::Client,
    address: &str,
    name: &str,
    answers: serde_json::Value,
) -> reqwest::Response {
    client
        .post(format!("{}/api/quiz/submit", address))
        .json(&serde_json::json!({
            "quiz_name": "dev",
            "name": name,
            "email": format!("{}@example.com", name.to_lowercase()),
            "answers": answers
        }))
        .send()
        .await
        .expect("Failed to execute request")
}

#[tokio::test]
async fn health_check_404() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/random_path_that_does_not_exist", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn admin_requires_credentials() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let anonymous = client
        .get(format!("{}/api/admin/quizzes", address))
        .send()
        .await
        .unwrap();
    assert_eq!(anonymous.status().as_u16(), 401);
    assert!(anonymous.headers().contains_key("www-authenticate"));

    let wrong = client
        .get(format!("{}/api/admin/quizzes", address))
        .basic_auth(ADMIN_USER, Some("nope"))
        .send()
        .await
        .unwrap();
    assert_eq!(wrong.status().as_u16(), 401);

    let right = client
        .get(format!("{}/api/admin/quizzes", address))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .send()
        .await
        .unwrap();
    assert_eq!(right.status().as_u16(), 200);
}

#[tokio::test]
async fn start_unknown_quiz_is_404() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/quiz/start", address))
        .json(&serde_json::json!({
            "quiz_name": "nonexistent",
            "name": "Ada",
            "email": "ada@example.com"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn start_hides_answers() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();
    save_quiz(&client, &address, "dev").await;

    let body: serde_json::Value = client
        .post(format!("{}/api/quiz/start", address))
        .json(&serde_json::json!({
            "quiz_name": "dev",
            "name": "Ada",
            "email": "ada@example.com"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 2);
    assert!(questions.iter().all(|q| q.get("answer").is_none()));
    assert_eq!(questions[1]["index"], 1);
}

#[tokio::test]
async fn save_quiz_rejects_three_options() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/admin/quizzes", address))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .json(&serde_json::json!({
            "quiz_name": "dev",
            "questions": [
                { "question": "Q", "options": ["A", "B", "C"], "answer": "A" }
            ]
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn submission_with_only_bad_keys_is_400() {
    let (address, store) = spawn_app().await;
    let client = reqwest::Client::new();
    save_quiz(&client, &address, "dev").await;

    let response = submit(&client, &address, "Ada", serde_json::json!({ "x": "B" })).await;

    assert_eq!(response.status().as_u16(), 400);
    assert!(store.get("interview_results.csv").await.is_err());
}

#[tokio::test]
async fn authoring_flow_uses_client_held_drafts() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let draft: serde_json::Value = client
        .post(format!("{}/api/admin/drafts", address))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .json(&serde_json::json!({ "quiz_name": "ops" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(draft["questions"].as_array().unwrap().len(), 0);

    let draft: serde_json::Value = client
        .post(format!("{}/api/admin/drafts/questions", address))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .json(&serde_json::json!({
            "draft": draft,
            "question": { "question": "Uptime?", "options": ["90", "99", "99.9", "100"], "answer": "99.9" }
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(draft["questions"].as_array().unwrap().len(), 1);

    // Nothing is stored until the draft is saved.
    let missing = client
        .get(format!("{}/api/admin/quizzes/ops", address))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status().as_u16(), 404);

    let saved = client
        .post(format!("{}/api/admin/quizzes", address))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .json(&draft)
        .send()
        .await
        .unwrap();
    assert_eq!(saved.status().as_u16(), 201);

    let quiz: serde_json::Value = client
        .get(format!("{}/api/admin/quizzes/ops", address))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(quiz["questions"][0]["answer"], "99.9");

    let link: serde_json::Value = client
        .get(format!("{}/api/admin/quizzes/ops/link", address))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(link["quiz_link"], "https://quiz.example.com/?quiz_name=ops");
}

#[tokio::test]
async fn take_quiz_then_shortlist_flow() {
    let (address, store) = spawn_app().await;
    let client = reqwest::Client::new();
    save_quiz(&client, &address, "dev").await;

    // Ada: both right. Bob: one right (form-style keys). Cy: none right.
    let ada = submit(&client, &address, "Ada", serde_json::json!({ "0": "B", "1": "A" })).await;
    assert_eq!(ada.status().as_u16(), 200);
    let ada: serde_json::Value = ada.json().await.unwrap();
    assert_eq!(ada["score"], 2);
    assert_eq!(ada["total_questions"], 2);

    let bob = submit(&client, &address, "Bob", serde_json::json!({ "q0": "B", "q1": "C" })).await;
    assert_eq!(bob.json::<serde_json::Value>().await.unwrap()["score"], 1);

    let cy = submit(&client, &address, "Cy", serde_json::json!({})).await;
    assert_eq!(cy.json::<serde_json::Value>().await.unwrap()["score"], 0);

    let results: Vec<serde_json::Value> = client
        .get(format!("{}/api/admin/results", address))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let names: Vec<&str> = results.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Ada", "Bob", "Cy"]);
    assert_eq!(results[0]["Role"], "dev");

    let shortlist: serde_json::Value = client
        .post(format!("{}/api/admin/shortlist", address))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .json(&serde_json::json!({ "qualifying_score": 1 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(shortlist["shortlisted_count"], 2);
    assert_eq!(shortlist["total_candidates"], 3);

    let download = client
        .get(format!("{}/api/admin/shortlist/download", address))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .send()
        .await
        .unwrap();
    assert_eq!(download.status().as_u16(), 200);
    assert!(
        download
            .headers()
            .get("content-disposition")
            .unwrap()
            .to_str()
            .unwrap()
            .contains("shortlisted_candidates.csv")
    );
    let body = download.bytes().await.unwrap();
    assert_eq!(
        &body[..],
        b"name,email,Role,score\r\nAda,ada@example.com,dev,2\r\nBob,bob@example.com,dev,1\r\n"
    );
    assert_eq!(
        store.get("shortlisted_candidates.csv").await.unwrap(),
        body.to_vec()
    );

    let ledger = client
        .get(format!("{}/api/admin/results/download", address))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(ledger.lines().count(), 4);
}

#[tokio::test]
async fn downloads_before_any_data_are_404() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    for path in ["results/download", "shortlist/download"] {
        let response = client
            .get(format!("{}/api/admin/{}", address, path))
            .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 404, "{}", path);
    }
}
