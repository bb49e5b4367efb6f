use std::sync::Arc;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::Utc;

use crate::{
    error::ApiError,
    handlers::site_dtos::{ContactRequest, ContactResponse, NewsletterRequest, NewsletterResponse},
    models::site_models::NewContactSubmission,
    repositories::inquiry_repository::{SubscribeOutcome, STATUS_NEW},
    utils::validation::{is_valid_email, validate_contact},
    AppState,
};

pub const CONTACT_THANK_YOU: &str =
    "Thank you for your message. We'll get back to you within 24 hours.";

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("Unreadable contact payload: {}", rejection);
        ApiError::Validation("Request body must be a JSON contact form".to_string())
    })?;

    let contact = validate_contact(&request).map_err(|reason| {
        tracing::info!("Rejected contact submission: {}", reason);
        ApiError::Validation(reason)
    })?;

    let id = state.inquiry_repository.create_submission(&NewContactSubmission {
        name: contact.name,
        email: contact.email,
        phone: contact.phone,
        company: contact.company,
        consultation_type: contact.consultation_type,
        message: contact.message,
        status: STATUS_NEW.to_string(),
        submitted_at: Utc::now().timestamp(),
    })?;
    tracing::info!("Stored contact submission {}", id);

    Ok(Json(ContactResponse {
        success: true,
        message: CONTACT_THANK_YOU.to_string(),
        id: id.to_string(),
    }))
}

pub async fn subscribe_newsletter(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewsletterRequest>, JsonRejection>,
) -> Result<Json<NewsletterResponse>, ApiError> {
    let Json(request) = payload
        .map_err(|_| ApiError::Validation("Request body must be JSON with an email".to_string()))?;

    let email = request.email.trim().to_lowercase();
    if !is_valid_email(&email) {
        return Err(ApiError::Validation("Email address is not valid".to_string()));
    }

    let message = match state.inquiry_repository.subscribe(&email, Utc::now().timestamp())? {
        SubscribeOutcome::Subscribed => {
            tracing::info!("New newsletter subscription");
            "Successfully subscribed to newsletter"
        }
        SubscribeOutcome::AlreadySubscribed => "Email already subscribed",
    };

    Ok(Json(NewsletterResponse {
        success: true,
        message: message.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use crate::test_support::{post_json, test_app};

    #[tokio::test]
    async fn accepted_submission_is_stored_as_new() {
        let (app, state) = test_app();
        let (status, body) = post_json(
            &app,
            "/api/contact",
            json!({
                "name": "James Wilson",
                "email": "james.wilson@techcorp.co.uk",
                "phone": "07123456789",
                "company": "TechCorp Solutions Ltd",
                "consultationType": "Database Consulting",
                "message": "We need help optimizing our Access database."
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], super::CONTACT_THANK_YOU);
        let id: i32 = body["id"].as_str().unwrap().parse().unwrap();

        let stored = state.inquiry_repository.find_submission(id).unwrap().unwrap();
        assert_eq!(stored.status, "new");
        assert_eq!(stored.consultation_type.as_deref(), Some("Database Consulting"));
        assert_eq!(stored.phone.as_deref(), Some("07123456789"));
    }

    #[tokio::test]
    async fn minimal_submission_is_accepted() {
        let (app, _) = test_app();
        let (status, body) = post_json(
            &app,
            "/api/contact",
            json!({"name": "Jane Doe", "email": "jane@example.com", "message": "Need a database"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn invalid_submissions_are_rejected_and_not_stored() {
        let (app, state) = test_app();
        let bodies = [
            json!({"name": "Jane Doe", "email": "jane@example.com", "message": ""}),
            json!({"name": "Jane Doe", "email": "not-an-email", "message": "Hello"}),
            json!({"email": "jane@example.com", "message": "Hello"}),
            json!("just some text"),
        ];
        for body in bodies {
            let (status, response) = post_json(&app, "/api/contact", body).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(response["success"], false);
            assert!(response["error"].is_string());
        }
        assert_eq!(state.inquiry_repository.count_submissions().unwrap(), 0);
    }

    #[tokio::test]
    async fn newsletter_subscription_is_idempotent() {
        let (app, state) = test_app();

        let (status, first) = post_json(&app, "/api/newsletter", json!({"email": "reader@example.co.uk"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["message"], "Successfully subscribed to newsletter");

        let (status, second) = post_json(&app, "/api/newsletter", json!({"email": " Reader@Example.co.uk "})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(second["success"], true);
        assert_eq!(second["message"], "Email already subscribed");

        assert_eq!(state.inquiry_repository.count_subscriptions().unwrap(), 1);
    }

    #[tokio::test]
    async fn newsletter_rejects_bad_email() {
        let (app, _) = test_app();
        let (status, body) = post_json(&app, "/api/newsletter", json!({"email": "nope"})).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
    }
}
