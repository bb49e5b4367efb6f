use diesel::prelude::*;
#[cfg(test)]
use crate::models::site_models::ContactSubmission;
use crate::{
    error::RepositoryError,
    models::site_models::{
        NewContactSubmission, NewNewsletterSubscription,
    },
    schema::{contact_submissions, newsletter_subscriptions},
    DbPool,
};

pub const STATUS_NEW: &str = "new";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Subscribed,
    AlreadySubscribed,
}

pub struct InquiryRepository {
    pool: DbPool
}

impl InquiryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    // Store a contact form submission and return its row id
    pub fn create_submission(&self, new_submission: &NewContactSubmission) -> Result<i32, RepositoryError> {
        let mut conn = self.pool.get()?;
        let id = diesel::insert_into(contact_submissions::table)
            .values(new_submission)
            .returning(contact_submissions::id)
            .get_result::<i32>(&mut conn)?;
        Ok(id)
    }

    #[cfg(test)]
    pub fn find_submission(&self, submission_id: i32) -> Result<Option<ContactSubmission>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let submission = contact_submissions::table
            .find(submission_id)
            .select(ContactSubmission::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(submission)
    }

    #[cfg(test)]
    pub fn count_submissions(&self) -> Result<i64, RepositoryError> {
        let mut conn = self.pool.get()?;
        let count = contact_submissions::table.count().get_result(&mut conn)?;
        Ok(count)
    }

    // The email column is UNIQUE, so a repeated address is ignored rather than duplicated
    pub fn subscribe(&self, email: &str, now: i64) -> Result<SubscribeOutcome, RepositoryError> {
        let mut conn = self.pool.get()?;
        let inserted = diesel::insert_or_ignore_into(newsletter_subscriptions::table)
            .values(&NewNewsletterSubscription {
                email: email.to_string(),
                subscribed_at: now,
            })
            .execute(&mut conn)?;

        if inserted == 0 {
            Ok(SubscribeOutcome::AlreadySubscribed)
        } else {
            Ok(SubscribeOutcome::Subscribed)
        }
    }

    #[cfg(test)]
    pub fn count_subscriptions(&self) -> Result<i64, RepositoryError> {
        let mut conn = self.pool.get()?;
        let count = newsletter_subscriptions::table.count().get_result(&mut conn)?;
        Ok(count)
    }
}
