//! The per-product quote request form

use super::{dispatch, form::parse_amount, gate, EnquiryTransport, FormStatus, SubmitOutcome};
use crate::models::enquiry::{Channel, EnquiryPayload, Incoterm, Quantity};
use crate::validation::QuoteValidator;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_QUOTE_VOLUME_MT: f64 = 200.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteProduct {
    pub slug: String,
    pub name: String,
}

/// Shipping preferences remembered between quote requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotePrefs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incoterm: Option<Incoterm>,
}

#[derive(Debug, Clone)]
pub struct QuoteForm {
    product: Option<QuoteProduct>,
    pub name: String,
    pub company: String,
    pub email: String,
    pub volume: f64,
    pub destination: String,
    pub incoterm: Incoterm,
    pub message: String,
    pub honeypot: String,
    status: FormStatus,
}

impl Default for QuoteForm {
    fn default() -> Self {
        Self {
            product: None,
            name: String::new(),
            company: String::new(),
            email: String::new(),
            volume: DEFAULT_QUOTE_VOLUME_MT,
            destination: String::new(),
            incoterm: Incoterm::Fob,
            message: String::new(),
            honeypot: String::new(),
            status: FormStatus::Idle,
        }
    }
}

impl QuoteForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_product(product: QuoteProduct) -> Self {
        let mut form = Self::default();
        form.open(product);
        form
    }

    /// Points the form at a product and clears the previous outcome.
    pub fn open(&mut self, product: QuoteProduct) {
        self.product = Some(product);
        self.status = FormStatus::Idle;
    }

    pub fn product(&self) -> Option<&QuoteProduct> {
        self.product.as_ref()
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn can_send(&self) -> bool {
        self.product.is_some()
            && QuoteValidator::new(self.name.as_str(), self.email.as_str(), self.destination.as_str())
                .validate()
                .is_ok()
    }

    pub fn set_volume_input(&mut self, raw: &str) {
        self.volume = parse_amount(raw).filter(|n| *n >= 0.0).unwrap_or(0.0);
    }

    pub fn prefs(&self) -> QuotePrefs {
        QuotePrefs {
            destination: Some(self.destination.clone()).filter(|d| !d.is_empty()),
            incoterm: Some(self.incoterm),
        }
    }

    pub fn apply_prefs(&mut self, prefs: &QuotePrefs) {
        if let Some(destination) = &prefs.destination {
            self.destination = destination.clone();
        }
        if let Some(incoterm) = prefs.incoterm {
            self.incoterm = incoterm;
        }
    }

    fn composed_notes(&self) -> String {
        let notes = self.message.trim();
        if notes.is_empty() {
            "—".to_string()
        } else {
            format!("Additional notes:\n{}", notes)
        }
    }

    /// `None` until a product is selected.
    pub fn payload(&self) -> Option<EnquiryPayload> {
        let product = self.product.as_ref()?;

        let message = format!(
            "Product: {}\nIncoterm: {}\nDestination: {}\nPreferred channel: {}\n\n{}",
            product.name,
            self.incoterm,
            self.destination,
            Channel::Email,
            self.composed_notes()
        );

        Some(EnquiryPayload {
            honey: Some(String::new()),
            name: Some(self.name.clone()),
            company: Some(self.company.clone()),
            email: Some(self.email.clone()),
            topic: Some(format!("Quote request — {}", product.name)),
            volume: Some(Quantity::Number(self.volume)),
            budget: Some(Quantity::Text(String::new())),
            message: Some(message),
            incoterm: Some(self.incoterm),
            destination: Some(self.destination.clone()),
            channel: Some(Channel::Email),
        })
    }

    pub async fn submit<T>(&mut self, transport: &T) -> SubmitOutcome
    where
        T: EnquiryTransport + ?Sized,
    {
        if let Some(outcome) = gate(self.can_send(), &self.status, &self.honeypot) {
            return outcome;
        }
        let Some(payload) = self.payload() else {
            return SubmitOutcome::Blocked;
        };

        dispatch(&mut self.status, transport, &payload).await
    }
}
