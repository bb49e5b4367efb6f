use once_cell::sync::Lazy;
use regex::Regex;

use crate::handlers::site_dtos::ContactRequest;

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_PHONE_LEN: usize = 50;
pub const MAX_COMPANY_LEN: usize = 200;
pub const MAX_CONSULTATION_TYPE_LEN: usize = 100;
pub const MAX_MESSAGE_LEN: usize = 5000;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@.]+$").expect("email pattern compiles")
});

/// A contact request that passed validation, trimmed, with blank optional fields dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub consultation_type: Option<String>,
    pub message: String,
}

pub fn is_valid_email(email: &str) -> bool {
    email.len() <= MAX_EMAIL_LEN && EMAIL_RE.is_match(email)
}

fn required(value: &str, label: &str, max: usize) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{} is required", label));
    }
    if trimmed.chars().count() > max {
        return Err(format!("{} must be at most {} characters", label, max));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<&str>, label: &str, max: usize) -> Result<Option<String>, String> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) if v.chars().count() > max => {
            Err(format!("{} must be at most {} characters", label, max))
        }
        Some(v) => Ok(Some(v.to_string())),
    }
}

pub fn validate_contact(req: &ContactRequest) -> Result<ValidContact, String> {
    let name = required(&req.name, "Name", MAX_NAME_LEN)?;
    let email = required(&req.email, "Email", MAX_EMAIL_LEN)?;
    if !is_valid_email(&email) {
        return Err("Email address is not valid".to_string());
    }
    let message = required(&req.message, "Message", MAX_MESSAGE_LEN)?;

    Ok(ValidContact {
        name,
        email,
        phone: optional(req.phone.as_deref(), "Phone", MAX_PHONE_LEN)?,
        company: optional(req.company.as_deref(), "Company", MAX_COMPANY_LEN)?,
        consultation_type: optional(
            req.consultation_type.as_deref(),
            "Consultation type",
            MAX_CONSULTATION_TYPE_LEN,
        )?,
        message,
    })
}
