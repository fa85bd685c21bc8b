//! Validation rules shared by the contact forms and the contact endpoint

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 4;
pub const DESTINATION_MIN_CHARS: usize = 2;
pub const EMAIL_MAX_LEN: usize = 254;

lazy_static! {
    // local@domain.tld, no whitespace and a single '@'
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    email.len() <= EMAIL_MAX_LEN && EMAIL_REGEX.is_match(email)
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::new("email_empty"));
    }

    if !is_valid_email(email) {
        return Err(ValidationError::new("email_format"));
    }

    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    validate_min_chars(name, NAME_MIN_CHARS, "name_too_short")
}

pub fn validate_message(message: &str) -> Result<(), ValidationError> {
    validate_min_chars(message, MESSAGE_MIN_CHARS, "message_too_short")
}

pub fn validate_destination(destination: &str) -> Result<(), ValidationError> {
    validate_min_chars(destination, DESTINATION_MIN_CHARS, "destination_too_short")
}

fn validate_min_chars(value: &str, min: usize, code: &'static str) -> Result<(), ValidationError> {
    if value.trim().chars().count() < min {
        return Err(ValidationError::new(code));
    }
    Ok(())
}
