use std::sync::Arc;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use crate::{
    error::{ApiError, RepositoryError},
    handlers::site_dtos::{BlogPostResponse, BlogQuery, ServiceResponse, TestimonialResponse},
    AppState,
};

const DEFAULT_BLOG_LIMIT: i64 = 10;

pub async fn api_root() -> Json<Value> {
    Json(json!({"message": "Christopher Merrick Database Consulting API"}))
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn list_testimonials(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TestimonialResponse>>, ApiError> {
    let rows = state.content_repository.published_testimonials()?;
    tracing::debug!("Serving {} testimonials", rows.len());
    Ok(Json(rows.into_iter().map(TestimonialResponse::from).collect()))
}

pub async fn list_services(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ServiceResponse>>, ApiError> {
    let rows = state.content_repository.published_services()?;
    let services = rows
        .into_iter()
        .map(ServiceResponse::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(RepositoryError::from)?;
    Ok(Json(services))
}

pub async fn list_blog_posts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BlogQuery>,
) -> Result<Json<Vec<BlogPostResponse>>, ApiError> {
    let skip = query.skip.unwrap_or(0);
    let limit = query.limit.unwrap_or(DEFAULT_BLOG_LIMIT);
    let rows = state.content_repository.published_blog_posts(skip, limit)?;
    Ok(Json(rows.into_iter().map(BlogPostResponse::from).collect()))
}

pub async fn get_blog_post(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPostResponse>, ApiError> {
    match state.content_repository.find_published_blog_post(&slug)? {
        Some(post) => Ok(Json(BlogPostResponse::from(post))),
        None => Err(ApiError::NotFound("Blog post")),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::models::site_models::NewTestimonial;
    use crate::test_support::{get, seeded_app, test_app};

    #[tokio::test]
    async fn testimonials_are_published_only_and_newest_first() {
        let (app, state) = test_app();
        let repo = &state.content_repository;
        for (name, published, created_at) in [("Old", true, 100), ("Hidden", false, 300), ("New", true, 200)] {
            repo.insert_testimonial(&NewTestimonial {
                name: name.to_string(),
                company: "Co".to_string(),
                location: "Sheffield".to_string(),
                text: "Great".to_string(),
                rating: 4,
                published,
                created_at,
            })
            .unwrap();
        }

        let (status, body) = get(&app, "/api/testimonials").await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["New", "Old"]);
        assert!(body[0]["id"].is_string());
        assert_eq!(body[0]["rating"], 4);
        assert!(body[0]["createdAt"].as_str().unwrap().starts_with("1970-01-01T00:03:20"));
    }

    #[tokio::test]
    async fn seeded_content_is_served() {
        let app = seeded_app();

        let (_, testimonials) = get(&app, "/api/testimonials").await;
        assert_eq!(testimonials.as_array().unwrap().len(), 3);
        assert_eq!(testimonials[0]["name"], "Sarah Johnson");

        let (status, services) = get(&app, "/api/services").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(services[0]["title"], "Custom Access Databases");
        assert_eq!(services[0]["features"].as_array().unwrap().len(), 4);
        assert_eq!(services[0]["pricing"]["basic"], "£750 - £2,000");
        assert!(services[1].get("pricing").is_none());
    }

    #[tokio::test]
    async fn blog_listing_pages_and_unknown_slug_is_404() {
        let app = seeded_app();

        let (status, page) = get(&app, "/api/blog?skip=1&limit=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page.as_array().unwrap().len(), 1);
        assert_eq!(page[0]["slug"], "microsoft-access-vs-excel");

        let (status, post) = get(&app, "/api/blog/microsoft-access-vs-excel").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(post["readTime"], "7 min read");

        let (status, body) = get(&app, "/api/blog/no-such-post").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn root_and_health() {
        let (app, _) = test_app();
        let (status, body) = get(&app, "/api/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Christopher Merrick Database Consulting API");

        let (status, _) = get(&app, "/api/health").await;
        assert_eq!(status, StatusCode::OK);
    }
}
