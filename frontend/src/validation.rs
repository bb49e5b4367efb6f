use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::content::ConsultationKind;
use crate::models::ContactInquiry;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@.]+$").expect("email pattern compiles")
});

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please tell us about your project.")]
    MissingMessage,
    #[error("Please choose a consultation type.")]
    UnknownConsultationType,
}

/// Raw values as typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InquiryFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub consultation_type: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    ConsultationType,
    Message,
}

impl InquiryFields {
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Company => &mut self.company,
            Field::ConsultationType => &mut self.consultation_type,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Checks the required fields and builds the payload sent to the backend.
pub fn validate_inquiry(fields: &InquiryFields) -> Result<ContactInquiry, ValidationError> {
    let name = fields.name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }

    let email = fields.email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    let message = fields.message.trim();
    if message.is_empty() {
        return Err(ValidationError::MissingMessage);
    }

    let consultation_type = match optional(&fields.consultation_type) {
        Some(slug) => match ConsultationKind::from_slug(&slug) {
            Some(kind) => Some(kind.slug().to_string()),
            None => return Err(ValidationError::UnknownConsultationType),
        },
        None => None,
    };

    Ok(ContactInquiry {
        name: name.to_string(),
        email: email.to_string(),
        phone: optional(&fields.phone),
        company: optional(&fields.company),
        consultation_type,
        message: message.to_string(),
    })
}

/// Newsletter sign-up only needs a plausible address.
pub fn validate_newsletter_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        Err(ValidationError::MissingEmail)
    } else if !is_valid_email(email) {
        Err(ValidationError::InvalidEmail)
    } else {
        Ok(email.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> InquiryFields {
        InquiryFields {
            name: "  Jane Doe ".into(),
            email: "jane@example.com".into(),
            phone: String::new(),
            company: "   ".into(),
            consultation_type: "strategy".into(),
            message: "We need a stock database".into(),
        }
    }

    #[test]
    fn trims_and_drops_blank_optionals() {
        let inquiry = validate_inquiry(&filled()).unwrap();
        assert_eq!(inquiry.name, "Jane Doe");
        assert_eq!(inquiry.phone, None);
        assert_eq!(inquiry.company, None);
        assert_eq!(inquiry.consultation_type.as_deref(), Some("strategy"));
    }

    #[test]
    fn required_fields_are_checked_in_order() {
        let mut fields = filled();
        fields.name = " ".into();
        fields.email.clear();
        assert_eq!(validate_inquiry(&fields), Err(ValidationError::MissingName));

        let mut fields = filled();
        fields.email = "not-an-email".into();
        assert_eq!(validate_inquiry(&fields), Err(ValidationError::InvalidEmail));

        let mut fields = filled();
        fields.message = "\n".into();
        assert_eq!(validate_inquiry(&fields), Err(ValidationError::MissingMessage));
    }

    #[test]
    fn consultation_type_must_be_a_known_slug() {
        let mut fields = filled();
        fields.consultation_type = "weekend-retreat".into();
        assert_eq!(
            validate_inquiry(&fields),
            Err(ValidationError::UnknownConsultationType)
        );

        fields.consultation_type.clear();
        assert_eq!(validate_inquiry(&fields).unwrap().consultation_type, None);
    }

    #[test]
    fn field_setter_targets_the_right_slot() {
        let mut fields = InquiryFields::default();
        fields.set(Field::Company, "Acme".into());
        fields.set(Field::Message, "hi".into());
        assert_eq!(fields.company, "Acme");
        assert_eq!(fields.message, "hi");
    }

    #[test]
    fn newsletter_email() {
        assert_eq!(validate_newsletter_email(" a@b.co "), Ok("a@b.co".to_string()));
        assert_eq!(validate_newsletter_email(""), Err(ValidationError::MissingEmail));
        assert_eq!(validate_newsletter_email("a@b"), Err(ValidationError::InvalidEmail));
    }
}
