//! Transport between a form and the contact endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use thiserror::Error;

use crate::handlers::routes::CONTACT_PATH;
use crate::models::{enquiry::EnquiryPayload, request::ContactResponse};

/// Fallback shown when the endpoint fails without saying why.
pub const SEND_FAILED_MESSAGE: &str = "Failed to send";

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("invalid endpoint: {0}")]
    Endpoint(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Sends one enquiry and returns the endpoint's verdict.
#[async_trait]
pub trait EnquiryTransport: Send + Sync {
    async fn post_enquiry(&self, payload: &EnquiryPayload) -> Result<ContactResponse, TransportError>;
}

pub struct HttpTransport {
    client: Client,
    endpoint: Url,
}

impl HttpTransport {
    /// Posts to `<base_url>/api/contact`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), CONTACT_PATH)
            .parse::<Url>()
            .map_err(|e| TransportError::Endpoint(format!("{}: {}", base_url, e)))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Endpoint(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl EnquiryTransport for HttpTransport {
    async fn post_enquiry(&self, payload: &EnquiryPayload) -> Result<ContactResponse, TransportError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if status.is_success() {
            return serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode(e.to_string()));
        }

        // Proxies and timeouts answer with bodies that are not ours.
        match serde_json::from_slice::<ContactResponse>(&bytes) {
            Ok(body) if !body.ok => Ok(body),
            Ok(_) => Ok(ContactResponse::failure(SEND_FAILED_MESSAGE)),
            Err(e) => {
                tracing::debug!(status = status.as_u16(), "non-JSON error body from endpoint: {}", e);
                Ok(ContactResponse::failure(SEND_FAILED_MESSAGE))
            }
        }
    }
}
