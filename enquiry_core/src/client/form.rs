//! The contact section enquiry form

use super::{dispatch, gate, EnquiryTransport, FormStatus, SubmitOutcome};
use crate::models::enquiry::{Channel, EnquiryPayload, Incoterm, Quantity, Topic};
use crate::validation::EnquiryValidator;
use validator::Validate;

/// Typical minimum order quantity; smaller volumes only raise a warning.
pub const VOLUME_SOFT_MIN_MT: f64 = 25.0;
pub const VOLUME_WARNING: &str = "Typical MOQ is 25 mt, but smaller trials are welcome.";

pub const BUDGET_MIN_USD: f64 = 10_000.0;
pub const BUDGET_MAX_USD: f64 = 1_000_000.0;
pub const DEFAULT_BUDGET_USD: f64 = 200_000.0;

/// Parses a typed amount, ignoring thousands separators and spaces.
/// An empty entry reads as zero.
pub fn parse_amount(input: &str) -> Option<f64> {
    let cleaned: String = input.chars().filter(|c| *c != ',' && *c != ' ').collect();
    if cleaned.is_empty() {
        return Some(0.0);
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[derive(Debug, Clone)]
pub struct EnquiryForm {
    pub topic: Topic,
    pub name: String,
    pub company: String,
    pub email: String,
    pub volume: f64,
    pub budget: f64,
    pub message: String,
    /// Hidden input; people never see it, bots fill it in.
    pub honeypot: String,
    status: FormStatus,
}

impl Default for EnquiryForm {
    fn default() -> Self {
        Self {
            topic: Topic::General,
            name: String::new(),
            company: String::new(),
            email: String::new(),
            volume: VOLUME_SOFT_MIN_MT,
            budget: DEFAULT_BUDGET_USD,
            message: String::new(),
            honeypot: String::new(),
            status: FormStatus::Idle,
        }
    }
}

impl EnquiryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == FormStatus::Sending
    }

    pub fn can_send(&self) -> bool {
        EnquiryValidator::new(self.name.as_str(), self.email.as_str(), self.message.as_str())
            .validate()
            .is_ok()
    }

    pub fn volume_warning(&self) -> Option<&'static str> {
        (self.volume < VOLUME_SOFT_MIN_MT).then_some(VOLUME_WARNING)
    }

    /// Negative or unreadable volumes fall back to zero.
    pub fn set_volume_input(&mut self, raw: &str) {
        self.volume = parse_amount(raw).filter(|n| *n >= 0.0).unwrap_or(0.0);
    }

    /// Unreadable budgets are ignored; readable ones are clamped to the slider range.
    pub fn set_budget_input(&mut self, raw: &str) {
        if let Some(n) = parse_amount(raw) {
            self.budget = n.clamp(BUDGET_MIN_USD, BUDGET_MAX_USD);
        }
    }

    pub fn set_topic_slug(&mut self, slug: &str) {
        self.topic = Topic::from_slug(slug).unwrap_or_default();
    }

    pub fn payload(&self) -> EnquiryPayload {
        EnquiryPayload {
            honey: Some(String::new()),
            name: Some(self.name.clone()),
            company: Some(self.company.clone()),
            email: Some(self.email.clone()),
            topic: Some(self.topic.label().to_string()),
            volume: Some(Quantity::Number(self.volume)),
            budget: Some(Quantity::Number(self.budget)),
            message: Some(self.message.clone()),
            incoterm: Some(Incoterm::Fob),
            destination: Some(String::new()),
            channel: Some(Channel::Email),
        }
    }

    /// Sends the enquiry once. Does nothing when the form is not sendable,
    /// a send is in flight, or the honeypot is filled in.
    pub async fn submit<T>(&mut self, transport: &T) -> SubmitOutcome
    where
        T: EnquiryTransport + ?Sized,
    {
        if let Some(outcome) = gate(self.can_send(), &self.status, &self.honeypot) {
            return outcome;
        }

        let payload = self.payload();
        dispatch(&mut self.status, transport, &payload).await
    }

    pub fn reset_status(&mut self) {
        self.status = FormStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::{Reply, ScriptedTransport};
    use crate::client::NETWORK_ERROR_MESSAGE;

    fn filled_form() -> EnquiryForm {
        EnquiryForm {
            name: "Jane Doe".to_string(),
            email: "jane@acme.com".to_string(),
            message: "Need 500mt chromite".to_string(),
            ..EnquiryForm::default()
        }
    }

    #[test]
    fn test_can_send_rules() {
        assert!(filled_form().can_send());

        for email in ["jane.acme.com", "jane@acme", "jane@", "@acme.com", ""] {
            let form = EnquiryForm {
                email: email.to_string(),
                ..filled_form()
            };
            assert!(!form.can_send(), "email {:?} should block sending", email);
        }

        let form = EnquiryForm {
            name: " J ".to_string(),
            ..filled_form()
        };
        assert!(!form.can_send());

        let form = EnquiryForm {
            message: "hey".to_string(),
            ..filled_form()
        };
        assert!(!form.can_send());
    }

    #[tokio::test]
    async fn test_blocked_form_makes_no_request() {
        let transport = ScriptedTransport::new(Reply::Ok);
        let mut form = EnquiryForm {
            email: "not-an-email".to_string(),
            ..filled_form()
        };

        assert_eq!(form.submit(&transport).await, SubmitOutcome::Blocked);
        assert_eq!(transport.call_count(), 0);
        assert_eq!(form.status(), &FormStatus::Idle);
    }

    #[tokio::test]
    async fn test_in_flight_submission_is_blocked() {
        let transport = ScriptedTransport::new(Reply::Ok);
        let mut form = filled_form();
        form.status = FormStatus::Sending;

        assert_eq!(form.submit(&transport).await, SubmitOutcome::Blocked);
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_honeypot_aborts_silently() {
        let transport = ScriptedTransport::new(Reply::Ok);
        let mut form = filled_form();
        form.honeypot = "http://spam.example".to_string();

        assert_eq!(form.submit(&transport).await, SubmitOutcome::Trapped);
        assert_eq!(transport.call_count(), 0);
        assert_eq!(form.status(), &FormStatus::Idle);
    }

    #[tokio::test]
    async fn test_successful_submission_sends_all_fields() {
        let transport = ScriptedTransport::new(Reply::Ok);
        let mut form = filled_form();
        form.set_topic_slug("chromite");
        form.company = "Acme Steel".to_string();

        assert_eq!(form.submit(&transport).await, SubmitOutcome::Sent);
        assert_eq!(form.status(), &FormStatus::Success);
        assert_eq!(transport.call_count(), 1);

        let payload = transport.last_payload();
        assert_eq!(payload.topic.as_deref(), Some("Chromite (High Grade)"));
        assert_eq!(payload.company.as_deref(), Some("Acme Steel"));
        assert_eq!(payload.volume, Some(Quantity::Number(25.0)));
        assert_eq!(payload.budget, Some(Quantity::Number(200_000.0)));
        assert_eq!(payload.incoterm, Some(Incoterm::Fob));
        assert_eq!(payload.destination.as_deref(), Some(""));
        assert_eq!(payload.channel, Some(Channel::Email));
        assert_eq!(payload.honey.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_server_error_message_is_surfaced() {
        let transport = ScriptedTransport::new(Reply::Fail(Some("Email failed to send".to_string())));
        let mut form = filled_form();

        assert_eq!(form.submit(&transport).await, SubmitOutcome::Failed);
        assert_eq!(form.status(), &FormStatus::Error("Email failed to send".to_string()));
    }

    #[tokio::test]
    async fn test_failure_without_message_uses_fallback() {
        let transport = ScriptedTransport::new(Reply::Fail(None));
        let mut form = filled_form();

        form.submit(&transport).await;
        assert_eq!(form.status(), &FormStatus::Error("Failed to send".to_string()));
    }

    #[tokio::test]
    async fn test_network_failure_is_not_retried() {
        let transport = ScriptedTransport::new(Reply::Network);
        let mut form = filled_form();

        assert_eq!(form.submit(&transport).await, SubmitOutcome::Failed);
        assert_eq!(form.status(), &FormStatus::Error(NETWORK_ERROR_MESSAGE.to_string()));
        assert_eq!(transport.call_count(), 1);
    }

    #[test]
    fn test_volume_warning_below_soft_minimum() {
        let mut form = EnquiryForm::new();
        assert_eq!(form.volume_warning(), None);

        form.set_volume_input("10");
        assert_eq!(form.volume_warning(), Some(VOLUME_WARNING));
        // the warning never blocks sending
        form.name = "Jane Doe".to_string();
        form.email = "jane@acme.com".to_string();
        form.message = "Trial lot please".to_string();
        assert!(form.can_send());
    }

    #[test]
    fn test_amount_inputs() {
        let mut form = EnquiryForm::new();

        form.set_volume_input("1,250");
        assert_eq!(form.volume, 1250.0);
        form.set_volume_input("-5");
        assert_eq!(form.volume, 0.0);
        form.set_volume_input("lots");
        assert_eq!(form.volume, 0.0);

        form.set_budget_input("5 000 000");
        assert_eq!(form.budget, BUDGET_MAX_USD);
        form.set_budget_input("500");
        assert_eq!(form.budget, BUDGET_MIN_USD);
        form.set_budget_input("350,000");
        assert_eq!(form.budget, 350_000.0);
        form.set_budget_input("abc");
        assert_eq!(form.budget, 350_000.0);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(""), Some(0.0));
        assert_eq!(parse_amount("12,500.5"), Some(12500.5));
        assert_eq!(parse_amount("1e3"), Some(1000.0));
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("ten"), None);
    }
}
