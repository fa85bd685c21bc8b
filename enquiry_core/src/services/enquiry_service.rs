use crate::{
    config::MailConfig,
    error::Result,
    mail::{enquiry_subject, render_enquiry_html, Mailer, OutboundEmail},
    models::enquiry::{Enquiry, EnquiryPayload},
};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Delivered,
    /// Honeypot filled in; accepted without sending anything.
    Discarded,
}

#[derive(Clone)]
pub struct EnquiryService {
    mailer: Arc<dyn Mailer>,
    from: String,
    to: String,
    brand: String,
}

impl EnquiryService {
    pub fn new(mailer: Arc<dyn Mailer>, from: impl Into<String>, to: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            mailer,
            from: from.into(),
            to: to.into(),
            brand: brand.into(),
        }
    }

    pub fn from_config(mailer: Arc<dyn Mailer>, config: &MailConfig) -> Self {
        Self::new(mailer, config.from.clone(), config.to.clone(), config.brand.clone())
    }

    pub fn recipient(&self) -> &str {
        &self.to
    }

    pub fn compose(&self, enquiry: &Enquiry) -> OutboundEmail {
        OutboundEmail {
            from: self.from.clone(),
            to: vec![self.to.clone()],
            reply_to: enquiry.email.clone(),
            subject: enquiry_subject(&enquiry.name, &self.brand),
            html: render_enquiry_html(enquiry, &self.brand),
        }
    }

    /// Validates the payload and relays it to the configured inbox.
    /// Incomplete or invalid payloads are rejected even when the honeypot
    /// is filled in; only well-formed trapped payloads are discarded silently.
    pub async fn submit(&self, payload: EnquiryPayload) -> Result<SubmissionOutcome> {
        let trapped = payload.is_trapped();
        let enquiry = Enquiry::try_from(payload)?;

        if trapped {
            warn!("Honeypot field filled in, discarding enquiry");
            return Ok(SubmissionOutcome::Discarded);
        }
        let email = self.compose(&enquiry);

        self.mailer.send(&email).await?;

        info!(topic = %enquiry.topic, "Enquiry from {} forwarded to {}", enquiry.email, self.to);
        Ok(SubmissionOutcome::Delivered)
    }
}
