mod common;

use axum::{http::StatusCode, routing::post, Router};
use common::{spawn_app, test_app, RecordingMailer};
use enquiry_core::{
    client::{QuoteProduct, NETWORK_ERROR_MESSAGE},
    EnquiryForm, FormStatus, HttpTransport, QuoteForm, SubmitOutcome,
};
use std::sync::Arc;
use std::time::Duration;

fn filled_form() -> EnquiryForm {
    let mut form = EnquiryForm::new();
    form.name = "Jane Doe".to_string();
    form.email = "jane@acme.com".to_string();
    form.message = "Need 500mt chromite".to_string();
    form.set_topic_slug("chromite");
    form
}

#[tokio::test]
async fn test_form_submission_end_to_end() {
    let mailer = Arc::new(RecordingMailer::default());
    let base_url = spawn_app(test_app(mailer.clone())).await;
    let transport = HttpTransport::new(&base_url, Duration::from_secs(5)).unwrap();

    let mut form = filled_form();
    let outcome = form.submit(&transport).await;

    assert_eq!(outcome, SubmitOutcome::Sent);
    assert_eq!(form.status(), &FormStatus::Success);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].reply_to, "jane@acme.com");
    assert!(sent[0].html.contains("<p><b>Topic:</b> Chromite (High Grade)</p>"));
    assert!(sent[0].html.contains("<p><b>Budget:</b> 200000 USD</p>"));
}

#[tokio::test]
async fn test_server_error_is_shown_on_form() {
    let mailer = Arc::new(RecordingMailer::failing());
    let base_url = spawn_app(test_app(mailer)).await;
    let transport = HttpTransport::new(&base_url, Duration::from_secs(5)).unwrap();

    let mut form = filled_form();
    assert_eq!(form.submit(&transport).await, SubmitOutcome::Failed);
    assert_eq!(form.status(), &FormStatus::Error("Email failed to send".to_string()));
}

#[tokio::test]
async fn test_gateway_error_page_uses_fallback_message() {
    let gateway = Router::new().route(
        "/api/contact",
        post(|| async { (StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>") }),
    );
    let base_url = spawn_app(gateway).await;
    let transport = HttpTransport::new(&base_url, Duration::from_secs(5)).unwrap();

    let mut form = filled_form();
    assert_eq!(form.submit(&transport).await, SubmitOutcome::Failed);
    assert_eq!(form.status(), &FormStatus::Error("Failed to send".to_string()));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    let transport = HttpTransport::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();

    let mut form = filled_form();
    assert_eq!(form.submit(&transport).await, SubmitOutcome::Failed);
    assert_eq!(form.status(), &FormStatus::Error(NETWORK_ERROR_MESSAGE.to_string()));
}

#[tokio::test]
async fn test_quote_request_end_to_end() {
    let mailer = Arc::new(RecordingMailer::default());
    let base_url = spawn_app(test_app(mailer.clone())).await;
    let transport = HttpTransport::new(&base_url, Duration::from_secs(5)).unwrap();

    let mut form = QuoteForm::for_product(QuoteProduct {
        slug: "manganese-ore".to_string(),
        name: "Manganese Ore".to_string(),
    });
    form.name = "Jane Doe".to_string();
    form.email = "jane@acme.com".to_string();
    form.destination = "Jebel Ali, UAE".to_string();

    assert_eq!(form.submit(&transport).await, SubmitOutcome::Sent);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    let html = &sent[0].html;
    assert!(html.contains("Quote request — Manganese Ore"));
    assert!(html.contains("<p><b>Budget:</b> - USD</p>"));
    assert!(html.contains("<p><b>Destination:</b> Jebel Ali, UAE</p>"));
}
