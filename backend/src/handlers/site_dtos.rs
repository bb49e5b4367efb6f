use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::models::site_models::{BlogPost, Service, Testimonial};

fn to_rfc3339(epoch: i64) -> String {
    chrono::DateTime::from_timestamp(epoch, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}

// Every field defaults so a missing field reaches validation and gets a readable error
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default, rename = "consultationType")]
    pub consultation_type: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct NewsletterRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct NewsletterResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct BlogQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialResponse {
    pub id: String,
    pub name: String,
    pub company: String,
    pub location: String,
    pub text: String,
    pub rating: i32,
    pub created_at: String,
}

impl From<Testimonial> for TestimonialResponse {
    fn from(t: Testimonial) -> Self {
        Self {
            id: t.id.to_string(),
            name: t.name,
            company: t.company,
            location: t.location,
            text: t.text,
            rating: t.rating,
            created_at: to_rfc3339(t.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ServiceResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<BTreeMap<String, String>>,
    pub order: i32,
}

impl TryFrom<Service> for ServiceResponse {
    type Error = serde_json::Error;

    fn try_from(s: Service) -> Result<Self, Self::Error> {
        let pricing = match s.pricing.as_deref() {
            Some(raw) => Some(serde_json::from_str(raw)?),
            None => None,
        };
        Ok(Self {
            id: s.id.to_string(),
            title: s.title,
            description: s.description,
            icon: s.icon,
            features: serde_json::from_str(&s.features)?,
            pricing,
            order: s.sort_order,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub read_time: String,
    pub publish_date: String,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

impl From<BlogPost> for BlogPostResponse {
    fn from(p: BlogPost) -> Self {
        Self {
            id: p.id.to_string(),
            title: p.title,
            slug: p.slug,
            excerpt: p.excerpt,
            content: p.content,
            category: p.category,
            read_time: p.read_time,
            publish_date: to_rfc3339(p.publish_date),
            seo_title: p.seo_title,
            seo_description: p.seo_description,
        }
    }
}
