//! File pick → encode → request → display, against a local model endpoint.

use axum::Router;
use axum::extract::State;
use axum::routing::post;
use config::Map;
use identifier::{
    ANALYSIS_FAILURE_MESSAGE, AnalysisSession, FileHandle, GeminiVisionClient, IdentifierConfig,
    ViewKind,
};
use std::sync::{Arc, Mutex};

type Seen = Arc<Mutex<Vec<serde_json::Value>>>;

async fn start_model(reply: serde_json::Value, status: u16) -> (String, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route(
            "/v1beta/models/:call",
            post(
                |State((reply, status, seen)): State<(serde_json::Value, u16, Seen)>,
                 axum::Json(body): axum::Json<serde_json::Value>| async move {
                    seen.lock().expect("Lock not poisoned").push(body);
                    let status = axum::http::StatusCode::from_u16(status).expect("Valid status");
                    (status, axum::Json(reply))
                },
            ),
        )
        .with_state((reply, status, Arc::clone(&seen)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Bind model endpoint");
    let addr = listener.local_addr().expect("Local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Model endpoint runs");
    });

    (format!("http://{}/v1beta", addr), seen)
}

fn session_for(base_url: &str) -> AnalysisSession<GeminiVisionClient> {
    let overrides: Map<String, String> =
        [("IDENTIFIER_MODEL__BASE_URL".to_string(), base_url.to_string())].into();
    let environment = IdentifierConfig::environment().source(Some(overrides));
    let config = IdentifierConfig::load_with_env(None, environment).expect("Config loads");
    let settings = config.gemini_settings("test-key").expect("Settings build");
    let client = GeminiVisionClient::new(settings).expect("Client builds");
    AnalysisSession::new(client, config.model().prompt().as_str())
}

#[tokio::test]
async fn test_uploaded_file_reaches_model_and_result_is_shown() {
    let (base_url, seen) = start_model(
        serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "A stapler.\nOffice supply."}]},
                "finishReason": "STOP"
            }]
        }),
        200,
    )
    .await;
    let dir = tempfile::tempdir().expect("Create temp dir");
    let path = dir.path().join("desk.jpg");
    std::fs::write(&path, [0xFF, 0xD8, 0xFF, 0xE0]).expect("Write photo");
    let session = session_for(&base_url);

    assert!(session.upload(&FileHandle::new(&path)).await);
    session.analyze().await;

    let view = session.view();
    assert_eq!(view.kind, ViewKind::Result);
    assert_eq!(view.paragraphs, vec!["A stapler.", "Office supply."]);

    let requests = seen.lock().expect("Lock not poisoned").clone();
    assert_eq!(requests.len(), 1);
    let inline = &requests[0]["contents"][0]["parts"][1]["inlineData"];
    assert_eq!(inline["mimeType"], "image/jpeg");
    assert_eq!(inline["data"], "/9j/4A==");
}

#[tokio::test]
async fn test_model_failure_is_shown_as_generic_message() {
    let (base_url, _seen) = start_model(
        serde_json::json!({"error": {"code": 500, "message": "internal", "status": "INTERNAL"}}),
        500,
    )
    .await;
    let session = session_for(&base_url);
    session.select_asset(identifier::ImageAsset::new(vec![1, 2, 3], "image/png"));

    session.analyze().await;

    let view = session.view();
    assert_eq!(view.kind, ViewKind::Previewing);
    assert_eq!(view.error.as_deref(), Some(ANALYSIS_FAILURE_MESSAGE));
}
