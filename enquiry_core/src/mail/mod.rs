//! Outbound email: message model, provider seam and the Resend adapter

pub mod resend;
pub mod template;

pub use resend::ResendMailer;
pub use template::{enquiry_subject, escape_html, render_enquiry_html};

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// A rendered message ready to hand to the provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Error, Debug)]
pub enum MailError {
    #[error("provider rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("provider request timed out: {0}")]
    Timeout(String),

    #[error("provider transport error: {0}")]
    Transport(String),

    #[error("mail client configuration error: {0}")]
    Client(String),
}

/// Transactional email provider.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}
