//! Contact submission against a local endpoint.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use identifier_contact::{ContactClient, ContactForm, ContactFormState, SUCCESS_MESSAGE};
use identifier_error::{CONTACT_FAILURE_MESSAGE, ContactErrorKind};
use std::sync::{Arc, Mutex};

struct Endpoint {
    url: String,
    received: Arc<Mutex<Vec<serde_json::Value>>>,
}

async fn start_endpoint(status: StatusCode) -> Endpoint {
    let received = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route(
            "/api/contact",
            post(
                |State((status, seen)): State<(StatusCode, Arc<Mutex<Vec<serde_json::Value>>>)>,
                 axum::Json(body): axum::Json<serde_json::Value>| async move {
                    seen.lock().expect("Lock not poisoned").push(body);
                    status
                },
            ),
        )
        .with_state((status, Arc::clone(&received)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Bind contact endpoint");
    let addr = listener.local_addr().expect("Local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Contact endpoint runs");
    });

    Endpoint {
        url: format!("http://{}/api/contact", addr),
        received,
    }
}

fn form() -> ContactForm {
    ContactForm::new("Ada", "ada@example.com", "Your app found my keys.")
}

#[tokio::test]
async fn test_submit_posts_json_body() {
    let endpoint = start_endpoint(StatusCode::OK).await;
    let client = ContactClient::new(&endpoint.url).expect("Client builds");

    client.submit(&form()).await.expect("Delivered");

    let received = endpoint.received.lock().expect("Lock not poisoned").clone();
    assert_eq!(
        received,
        vec![serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Your app found my keys."
        })]
    );
}

#[tokio::test]
async fn test_any_2xx_is_success() {
    let endpoint = start_endpoint(StatusCode::NO_CONTENT).await;
    let client = ContactClient::new(&endpoint.url).expect("Client builds");

    assert!(client.submit(&form()).await.is_ok());
}

#[tokio::test]
async fn test_server_error_is_reported_with_status() {
    let endpoint = start_endpoint(StatusCode::INTERNAL_SERVER_ERROR).await;
    let client = ContactClient::new(&endpoint.url).expect("Client builds");

    let err = client.submit(&form()).await.unwrap_err();

    assert_eq!(err.kind, ContactErrorKind::Status(500));
}

#[tokio::test]
async fn test_invalid_form_never_reaches_network() {
    let endpoint = start_endpoint(StatusCode::OK).await;
    let client = ContactClient::new(&endpoint.url).expect("Client builds");

    let err = client
        .submit(&ContactForm::new("Ada", "not-an-address", "Hi"))
        .await
        .unwrap_err();

    assert!(matches!(err.kind, ContactErrorKind::InvalidEmail(_)));
    assert!(endpoint.received.lock().expect("Lock not poisoned").is_empty());
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    let client = ContactClient::new("http://127.0.0.1:9/api/contact").expect("Client builds");

    let err = client.submit(&form()).await.unwrap_err();

    assert!(matches!(err.kind, ContactErrorKind::Transport(_)));
}

#[tokio::test]
async fn test_form_state_success_clears_fields() {
    let endpoint = start_endpoint(StatusCode::OK).await;
    let client = ContactClient::new(&endpoint.url).expect("Client builds");
    let mut state = ContactFormState::new();
    state.set_form(form());

    assert!(state.submit(&client).await);

    assert_eq!(state.success(), Some(SUCCESS_MESSAGE));
    assert!(state.form().is_empty());
    assert!(!state.is_submitting());
}

#[tokio::test]
async fn test_form_state_failure_keeps_fields() {
    let endpoint = start_endpoint(StatusCode::BAD_GATEWAY).await;
    let client = ContactClient::new(&endpoint.url).expect("Client builds");
    let mut state = ContactFormState::new();
    state.set_form(form());

    assert!(!state.submit(&client).await);

    assert_eq!(state.error(), Some(CONTACT_FAILURE_MESSAGE));
    assert_eq!(state.form(), &form());
}
