#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use enquiry_core::{create_app, AppConfig, AppState, MailError, Mailer, OutboundEmail};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const RECIPIENT: &str = "sales@hajariminerals.com";
pub const SENDER: &str = "Hajari Minerals <no-reply@hajariminerals.com>";

/// Mailer double that records messages and optionally fails or stalls every delivery.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundEmail>>,
    fail: bool,
    delay: Option<Duration>,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.sent.lock().unwrap().push(email.clone());
        if self.fail {
            return Err(MailError::Rejected {
                status: 403,
                body: "{\"message\":\"The domain is not verified\"}".to_string(),
            });
        }
        Ok(())
    }
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.mail.to = RECIPIENT.to_string();
    config.mail.from = SENDER.to_string();
    config
}

pub fn test_app(mailer: Arc<RecordingMailer>) -> Router {
    let state = AppState::with_mailer(mailer, &test_config());
    create_app(state)
}

pub fn json_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Serves the router on an ephemeral local port and returns its base URL.
pub async fn spawn_app(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
