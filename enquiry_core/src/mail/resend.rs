//! Reqwest-backed adapter for the Resend transactional email API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, info};

use super::{MailError, Mailer, OutboundEmail};

const USER_AGENT: &str = concat!("enquiry-relay/", env!("CARGO_PKG_VERSION"));
const PREVIEW_CHAR_LIMIT: usize = 160;

pub struct ResendMailer {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl ResendMailer {
    /// Build an adapter posting to `<api_base_url>/emails`.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL is malformed or the reqwest client
    /// cannot be constructed.
    pub fn new(api_base_url: &str, api_key: impl Into<String>, timeout: Duration) -> Result<Self, MailError> {
        let endpoint = format!("{}/emails", api_base_url.trim_end_matches('/'))
            .parse::<Url>()
            .map_err(|e| MailError::Client(format!("invalid api base url '{}': {}", api_base_url, e)))?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| MailError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        debug!(to = ?email.to, subject = %email.subject, "sending email via provider");

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(email)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.map_err(map_transport_error)?;
            return Err(map_status_error(status, body.as_ref()));
        }

        info!(status = status.as_u16(), "provider accepted email");
        Ok(())
    }
}

fn map_transport_error(error: reqwest::Error) -> MailError {
    if error.is_timeout() {
        MailError::Timeout(error.to_string())
    } else {
        MailError::Transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> MailError {
    MailError::Rejected {
        status: status.as_u16(),
        body: body_preview(body),
    }
}

fn body_preview(body: &[u8]) -> String {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
