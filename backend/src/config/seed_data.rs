use std::collections::BTreeMap;
use once_cell::sync::Lazy;
use crate::models::site_models::{NewBlogPost, NewService, NewTestimonial};

pub struct SeedTestimonial {
    pub name: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub text: &'static str,
    pub rating: i32,
}

pub struct SeedService {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
    pub pricing: &'static [(&'static str, &'static str)],
}

pub struct SeedBlogPost {
    pub title: &'static str,
    pub slug: &'static str,
    pub excerpt: &'static str,
    pub content: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
    pub days_ago: i64,
}

pub static TESTIMONIALS: Lazy<Vec<SeedTestimonial>> = Lazy::new(|| {
    vec![
        SeedTestimonial {
            name: "Sarah Johnson",
            company: "Johnson Manufacturing Ltd",
            location: "Manchester",
            text: "Christopher created an amazing system to track all our inventory and orders. It's saved us countless hours and improved our accuracy dramatically.",
            rating: 5,
        },
        SeedTestimonial {
            name: "David Wright",
            company: "Wright Consulting",
            location: "Birmingham",
            text: "The database solution Christopher built has transformed how we manage client data. Professional service and excellent results.",
            rating: 5,
        },
        SeedTestimonial {
            name: "Emma Thompson",
            company: "Thompson Logistics",
            location: "Leeds",
            text: "Highly recommend Christopher's services. He understood our complex requirements and delivered exactly what we needed.",
            rating: 5,
        },
    ]
});

pub static SERVICES: Lazy<Vec<SeedService>> = Lazy::new(|| {
    vec![
        SeedService {
            title: "Custom Access Databases",
            description: "Bespoke Microsoft Access databases designed to streamline your operations and unlock your organisation's potential.",
            icon: "Database",
            features: &["Custom forms and reports", "Data relationships", "User-friendly interfaces", "Scalable solutions"],
            pricing: &[("basic", "£750 - £2,000"), ("intermediate", "£2,000 - £7,500"), ("advanced", "£7,500+")],
        },
        SeedService {
            title: "Data Analysis & Insights",
            description: "Transform raw data into actionable insights that drive informed business decisions and competitive advantage.",
            icon: "BarChart3",
            features: &["Data visualization", "Performance metrics", "Trend analysis", "Custom reporting"],
            pricing: &[],
        },
        SeedService {
            title: "Database Consulting",
            description: "Expert guidance on data strategy, optimization, and system integration. Available from 1-hour sessions to full-day reviews.",
            icon: "Users",
            features: &["System optimization", "Data strategy", "Process improvement", "Staff training"],
            pricing: &[("hourly", "£80/hour"), ("halfDay", "£300"), ("fullDay", "£550")],
        },
    ]
});

pub static BLOG_POSTS: Lazy<Vec<SeedBlogPost>> = Lazy::new(|| {
    vec![
        SeedBlogPost {
            title: "5 Signs Your Business Needs a Custom Database Solution",
            slug: "5-signs-your-business-needs-a-custom-database",
            excerpt: "Discover when it's time to move beyond spreadsheets and invest in a proper database system.",
            content: "Spreadsheets are a great place to start, but most growing businesses eventually hit the same walls: duplicated data, conflicting versions and hours lost to manual admin. This post walks through the five most common warning signs.",
            category: "Database Strategy",
            read_time: "5 min read",
            days_ago: 4,
        },
        SeedBlogPost {
            title: "Microsoft Access vs. Excel: Which is Right for Your Business?",
            slug: "microsoft-access-vs-excel",
            excerpt: "Understanding the key differences and when to make the switch from Excel to Access.",
            content: "Excel is a calculation tool; Access is a relational database. Knowing where one ends and the other begins saves both time and money.",
            category: "Technology Comparison",
            read_time: "7 min read",
            days_ago: 9,
        },
        SeedBlogPost {
            title: "GDPR Compliance for UK Businesses: Database Best Practices",
            slug: "gdpr-compliance-database-best-practices",
            excerpt: "Essential guidelines for ensuring your database systems meet UK data protection requirements.",
            content: "Personal data stored in business databases falls squarely under UK GDPR. Retention, access control and the right to erasure all have practical consequences for schema design.",
            category: "Compliance",
            read_time: "6 min read",
            days_ago: 14,
        },
    ]
});

const DAY_SECONDS: i64 = 24 * 60 * 60;

// Spaced one second apart so "newest first" keeps the listed order
pub fn default_testimonials(now: i64) -> Vec<NewTestimonial> {
    TESTIMONIALS
        .iter()
        .enumerate()
        .map(|(i, t)| NewTestimonial {
            name: t.name.to_string(),
            company: t.company.to_string(),
            location: t.location.to_string(),
            text: t.text.to_string(),
            rating: t.rating,
            published: true,
            created_at: now - i as i64,
        })
        .collect()
}

pub fn default_services() -> Result<Vec<NewService>, serde_json::Error> {
    SERVICES
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let pricing = if s.pricing.is_empty() {
                None
            } else {
                let tiers: BTreeMap<&str, &str> = s.pricing.iter().copied().collect();
                Some(serde_json::to_string(&tiers)?)
            };
            Ok(NewService {
                title: s.title.to_string(),
                description: s.description.to_string(),
                icon: s.icon.to_string(),
                features: serde_json::to_string(s.features)?,
                pricing,
                published: true,
                sort_order: i as i32,
            })
        })
        .collect()
}

pub fn default_blog_posts(now: i64) -> Vec<NewBlogPost> {
    BLOG_POSTS
        .iter()
        .map(|p| NewBlogPost {
            title: p.title.to_string(),
            slug: p.slug.to_string(),
            excerpt: p.excerpt.to_string(),
            content: p.content.to_string(),
            category: p.category.to_string(),
            read_time: p.read_time.to_string(),
            published: true,
            publish_date: now - p.days_ago * DAY_SECONDS,
            seo_title: Some(format!("{} | Christopher Merrick", p.title)),
            seo_description: Some(p.excerpt.to_string()),
        })
        .collect()
}
