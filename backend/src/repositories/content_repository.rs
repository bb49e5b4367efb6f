use diesel::prelude::*;
#[cfg(test)]
use crate::models::site_models::NewTestimonial;
use crate::{
    error::RepositoryError,
    models::site_models::{
        BlogPost, Service, Testimonial,
    },
    schema::{blog_posts, services, testimonials},
    DbPool,
};

const MAX_TESTIMONIALS: i64 = 100;
pub const MAX_BLOG_PAGE: i64 = 50;

pub struct ContentRepository {
    pool: DbPool
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub testimonials: usize,
    pub services: usize,
    pub blog_posts: usize,
}

impl ContentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    // Published testimonials, newest first
    pub fn published_testimonials(&self) -> Result<Vec<Testimonial>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let rows = testimonials::table
            .filter(testimonials::published.eq(true))
            .order((testimonials::created_at.desc(), testimonials::id.desc()))
            .limit(MAX_TESTIMONIALS)
            .select(Testimonial::as_select())
            .load(&mut conn)?;
        Ok(rows)
    }

    pub fn published_services(&self) -> Result<Vec<Service>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let rows = services::table
            .filter(services::published.eq(true))
            .order((services::sort_order.asc(), services::id.asc()))
            .select(Service::as_select())
            .load(&mut conn)?;
        Ok(rows)
    }

    // `limit` is clamped to 1..=MAX_BLOG_PAGE
    pub fn published_blog_posts(&self, skip: i64, limit: i64) -> Result<Vec<BlogPost>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let rows = blog_posts::table
            .filter(blog_posts::published.eq(true))
            .order((blog_posts::publish_date.desc(), blog_posts::id.desc()))
            .offset(skip.max(0))
            .limit(limit.clamp(1, MAX_BLOG_PAGE))
            .select(BlogPost::as_select())
            .load(&mut conn)?;
        Ok(rows)
    }

    pub fn find_published_blog_post(&self, search_slug: &str) -> Result<Option<BlogPost>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let post = blog_posts::table
            .filter(blog_posts::slug.eq(search_slug))
            .filter(blog_posts::published.eq(true))
            .select(BlogPost::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(post)
    }

    #[cfg(test)]
    pub fn insert_testimonial(&self, new_testimonial: &NewTestimonial) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get()?;
        diesel::insert_into(testimonials::table)
            .values(new_testimonial)
            .execute(&mut conn)?;
        Ok(())
    }

    // Fill each empty table with the default marketing content. Tables that
    // already hold rows are left alone so edits made in the database survive restarts.
    pub fn seed_defaults(&self, now: i64) -> Result<SeedReport, RepositoryError> {
        let mut report = SeedReport::default();
        let mut conn = self.pool.get()?;

        let testimonial_count: i64 = testimonials::table.count().get_result(&mut conn)?;
        if testimonial_count == 0 {
            let rows = crate::config::seed_data::default_testimonials(now);
            diesel::insert_into(testimonials::table)
                .values(&rows)
                .execute(&mut conn)?;
            report.testimonials = rows.len();
        }

        let service_count: i64 = services::table.count().get_result(&mut conn)?;
        if service_count == 0 {
            let rows = crate::config::seed_data::default_services()?;
            diesel::insert_into(services::table)
                .values(&rows)
                .execute(&mut conn)?;
            report.services = rows.len();
        }

        let post_count: i64 = blog_posts::table.count().get_result(&mut conn)?;
        if post_count == 0 {
            let rows = crate::config::seed_data::default_blog_posts(now);
            diesel::insert_into(blog_posts::table)
                .values(&rows)
                .execute(&mut conn)?;
            report.blog_posts = rows.len();
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_pool, prepare_database};

    fn repository() -> ContentRepository {
        let pool = build_pool(":memory:").unwrap();
        prepare_database(&pool).unwrap();
        ContentRepository::new(pool)
    }

    #[test]
    fn seeding_only_fills_empty_tables() {
        let repo = repository();
        let first = repo.seed_defaults(1_700_000_000).unwrap();
        assert_eq!(first, SeedReport { testimonials: 3, services: 3, blog_posts: 3 });

        let second = repo.seed_defaults(1_700_000_000).unwrap();
        assert_eq!(second, SeedReport::default());
        assert_eq!(repo.published_testimonials().unwrap().len(), 3);
    }

    #[test]
    fn blog_limit_is_clamped() {
        let repo = repository();
        repo.seed_defaults(1_700_000_000).unwrap();
        assert_eq!(repo.published_blog_posts(0, 0).unwrap().len(), 1);
        assert_eq!(repo.published_blog_posts(-5, 500).unwrap().len(), 3);
        assert!(repo.published_blog_posts(10, 10).unwrap().is_empty());
    }

    #[test]
    fn services_keep_their_sort_order() {
        let repo = repository();
        repo.seed_defaults(1_700_000_000).unwrap();
        let titles: Vec<String> = repo
            .published_services()
            .unwrap()
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, ["Custom Access Databases", "Data Analysis & Insights", "Database Consulting"]);
    }
}
