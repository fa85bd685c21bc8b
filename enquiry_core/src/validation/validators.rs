//! Validators for the enquiry and quote request forms

use super::{rules::*, Validatable};
use crate::error::AppError;
use crate::models::enquiry::{non_blank, Enquiry, EnquiryPayload, Topic};
use validator::Validate;

#[derive(Debug, Clone, Validate)]
pub struct EnquiryValidator {
    #[validate(custom(function = "validate_name", message = "Name is too short"))]
    pub name: String,

    #[validate(custom(function = "validate_email", message = "Invalid email address"))]
    pub email: String,

    #[validate(custom(function = "validate_message", message = "Message is too short"))]
    pub message: String,
}

impl EnquiryValidator {
    const FIELD_ORDER: [&'static str; 3] = ["name", "email", "message"];

    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// The message of the first failing field, in form order.
    pub fn first_error(&self) -> Option<String> {
        self.validate_comprehensive().first_error(&Self::FIELD_ORDER)
    }
}

#[derive(Debug, Clone, Validate)]
pub struct QuoteValidator {
    #[validate(custom(function = "validate_name", message = "Name is too short"))]
    pub name: String,

    #[validate(custom(function = "validate_email", message = "Invalid email address"))]
    pub email: String,

    #[validate(custom(function = "validate_destination", message = "Destination is required"))]
    pub destination: String,
}

impl QuoteValidator {
    pub fn new(name: impl Into<String>, email: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            destination: destination.into(),
        }
    }
}

impl TryFrom<EnquiryPayload> for Enquiry {
    type Error = AppError;

    fn try_from(payload: EnquiryPayload) -> Result<Self, Self::Error> {
        let (Some(name), Some(email), Some(message)) = (
            non_blank(payload.name),
            non_blank(payload.email),
            non_blank(payload.message),
        ) else {
            return Err(AppError::MissingFields);
        };

        if let Some(error) = EnquiryValidator::new(name.as_str(), email.as_str(), message.as_str()).first_error() {
            return Err(AppError::BadRequest(error));
        }

        Ok(Enquiry {
            name,
            company: non_blank(payload.company),
            email,
            topic: non_blank(payload.topic).unwrap_or_else(|| Topic::General.label().to_string()),
            volume: payload.volume.and_then(|v| v.display_value()),
            budget: payload.budget.and_then(|b| b.display_value()),
            message,
            incoterm: payload.incoterm.unwrap_or_default(),
            destination: non_blank(payload.destination),
            channel: payload.channel.unwrap_or_default(),
        })
    }
}
