//! Test utilities: a local stand-in for the Gemini REST endpoint.

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::IntoResponse;
use identifier_core::{AnalysisRequest, EncodedImage};
use std::sync::{Arc, Mutex};

/// A request the fake server received.
#[derive(Debug, Clone)]
pub struct Captured {
    pub path: String,
    pub api_key: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Debug)]
struct FakeState {
    status: StatusCode,
    body: String,
    seen: Mutex<Vec<Captured>>,
}

/// Handle to a running fake server.
pub struct FakeGemini {
    pub base_url: String,
    state: Arc<FakeState>,
}

impl FakeGemini {
    /// Starts a server that answers every request with `status` and `body`.
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        let state = Arc::new(FakeState {
            status,
            body: body.into(),
            seen: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .fallback(record)
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Bind fake server");
        let addr = listener.local_addr().expect("Local address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake server runs");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Starts a server that returns a successful answer with `text`.
    pub async fn answering(text: &str) -> Self {
        let body = serde_json::json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        });
        Self::start(StatusCode::OK, body.to_string()).await
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<Captured> {
        self.state.seen.lock().expect("Lock not poisoned").clone()
    }
}

async fn record(
    State(state): State<Arc<FakeState>>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let captured = Captured {
        path: uri.path().to_string(),
        api_key: headers
            .get("x-goog-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_str(&body).unwrap_or(serde_json::Value::Null),
    };
    state.seen.lock().expect("Lock not poisoned").push(captured);

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

/// A request with a tiny payload.
pub fn sample_request(prompt: &str) -> AnalysisRequest {
    AnalysisRequest::new(EncodedImage::new("iVBORw0KGgo=", "image/png"), prompt)
}
