//! HTTP client for the consulting API.

use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::models::{Ack, ContactInquiry, Testimonial};
use crate::submission::InquiryTransport;
use crate::testimonials::TestimonialSource;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("request was not accepted: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Acceptance rule for the POST endpoints: a 2xx status and a JSON body with
/// a truthy `success` field.
pub fn interpret_ack(status: u16, body: &str) -> Result<Ack, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Status(status));
    }
    let ack: Ack = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if ack.is_accepted() {
        Ok(ack)
    } else {
        Err(ApiError::Rejected(ack.message))
    }
}

pub fn parse_testimonials(status: u16, body: &str) -> Result<Vec<Testimonial>, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(config::get_backend_url())
    }
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), path)
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Ack, ApiError> {
        let response = Request::post(&self.endpoint(path))
            .header("Content-Type", "application/json")
            .json(body)?
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        interpret_ack(status, &text)
    }

    pub async fn subscribe_newsletter(&self, email: &str) -> Result<Ack, ApiError> {
        self.post_json("/api/newsletter", &serde_json::json!({ "email": email }))
            .await
    }
}

impl InquiryTransport for ApiClient {
    async fn send_inquiry(&self, inquiry: &ContactInquiry) -> Result<Ack, ApiError> {
        self.post_json("/api/contact", inquiry).await
    }
}

impl TestimonialSource for ApiClient {
    async fn fetch_testimonials(&self) -> Result<Vec<Testimonial>, ApiError> {
        let response = Request::get(&self.endpoint("/api/testimonials")).send().await?;
        let status = response.status();
        let text = response.text().await?;
        parse_testimonials(status, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_truthy_success_with_2xx() {
        let ack = interpret_ack(200, r#"{"success": true, "message": "Thanks", "id": "7"}"#).unwrap();
        assert_eq!(ack.message.as_deref(), Some("Thanks"));
        assert!(interpret_ack(201, r#"{"success": 1}"#).is_ok());
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(
            interpret_ack(200, r#"{"success": false, "message": "nope"}"#),
            Err(ApiError::Rejected(Some("nope".into())))
        );
        assert_eq!(interpret_ack(200, r#"{"message": "ok"}"#), Err(ApiError::Rejected(Some("ok".into()))));
        assert!(matches!(interpret_ack(200, "<html>"), Err(ApiError::Decode(_))));
        assert_eq!(interpret_ack(500, r#"{"success": true}"#), Err(ApiError::Status(500)));
        assert_eq!(interpret_ack(422, r#"{"success": false}"#), Err(ApiError::Status(422)));
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        assert_eq!(
            ApiClient::new("https://api.example.com/").endpoint("/api/contact"),
            "https://api.example.com/api/contact"
        );
        assert_eq!(ApiClient::new("").endpoint("/api/testimonials"), "/api/testimonials");
    }

    #[test]
    fn rejected_error_message() {
        assert_eq!(
            ApiError::Rejected(None).to_string(),
            "request was not accepted: no reason given"
        );
    }
}
