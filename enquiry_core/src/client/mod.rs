//! Client-side model of the contact and quote request forms.
//!
//! The forms hold what the visitor typed, decide whether the send button is
//! enabled, and perform exactly one request per submission through an
//! [`EnquiryTransport`]. Nothing is retried.

pub mod form;
pub mod quote;
pub mod transport;

pub use form::{parse_amount, EnquiryForm};
pub use quote::{QuoteForm, QuotePrefs, QuoteProduct};
pub use transport::{EnquiryTransport, HttpTransport, TransportError};

use crate::models::enquiry::EnquiryPayload;
use tracing::warn;
use transport::SEND_FAILED_MESSAGE;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed or a submission is already in flight.
    Blocked,
    /// Honeypot filled in; aborted silently.
    Trapped,
    Sent,
    Failed,
}

/// Checks that run before any network activity, in the order the forms apply them.
fn gate(can_send: bool, status: &FormStatus, honeypot: &str) -> Option<SubmitOutcome> {
    if !can_send || *status == FormStatus::Sending {
        return Some(SubmitOutcome::Blocked);
    }
    if !honeypot.is_empty() {
        return Some(SubmitOutcome::Trapped);
    }
    None
}

async fn dispatch<T>(status: &mut FormStatus, transport: &T, payload: &EnquiryPayload) -> SubmitOutcome
where
    T: EnquiryTransport + ?Sized,
{
    *status = FormStatus::Sending;

    match transport.post_enquiry(payload).await {
        Ok(response) if response.ok => {
            *status = FormStatus::Success;
            SubmitOutcome::Sent
        }
        Ok(response) => {
            let message = response
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| SEND_FAILED_MESSAGE.to_string());
            *status = FormStatus::Error(message);
            SubmitOutcome::Failed
        }
        Err(e) => {
            warn!("Enquiry request failed: {}", e);
            *status = FormStatus::Error(NETWORK_ERROR_MESSAGE.to_string());
            SubmitOutcome::Failed
        }
    }
}
