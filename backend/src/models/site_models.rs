use diesel::prelude::*;
use crate::schema::testimonials;
use crate::schema::services;
use crate::schema::blog_posts;
use crate::schema::contact_submissions;
use crate::schema::newsletter_subscriptions;


#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = testimonials)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[allow(dead_code)]
pub struct Testimonial {
    pub id: i32,
    pub name: String,
    pub company: String,
    pub location: String, // city shown under the company name
    pub text: String,
    pub rating: i32, // 1-5, enforced by a CHECK constraint
    pub published: bool,
    pub created_at: i64, // epoch seconds
}

#[derive(Insertable)]
#[diesel(table_name = testimonials)]
pub struct NewTestimonial {
    pub name: String,
    pub company: String,
    pub location: String,
    pub text: String,
    pub rating: i32,
    pub published: bool,
    pub created_at: i64,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = services)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[allow(dead_code)]
pub struct Service {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub features: String, // JSON array of strings
    pub pricing: Option<String>, // JSON object of tier -> price label
    pub published: bool,
    pub sort_order: i32,
}

#[derive(Insertable)]
#[diesel(table_name = services)]
#[diesel(treat_none_as_default_value = false)] // lets SQLite batch-insert the seed rows
pub struct NewService {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub features: String,
    pub pricing: Option<String>,
    pub published: bool,
    pub sort_order: i32,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = blog_posts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[allow(dead_code)]
pub struct BlogPost {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub read_time: String,
    pub published: bool,
    pub publish_date: i64,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = blog_posts)]
#[diesel(treat_none_as_default_value = false)] // lets SQLite batch-insert the seed rows
pub struct NewBlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub read_time: String,
    pub published: bool,
    pub publish_date: i64,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

// Read back only by the repository tests
#[cfg(test)]
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = contact_submissions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[allow(dead_code)]
pub struct ContactSubmission {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub consultation_type: Option<String>,
    pub message: String,
    pub status: String, // new, contacted, completed
    pub submitted_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = contact_submissions)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub consultation_type: Option<String>,
    pub message: String,
    pub status: String,
    pub submitted_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = newsletter_subscriptions)]
pub struct NewNewsletterSubscription {
    pub email: String,
    pub subscribed_at: i64,
}
