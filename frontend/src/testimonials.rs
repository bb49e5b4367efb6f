use log::warn;

use crate::api::ApiError;
use crate::content;
use crate::models::Testimonial;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Remote,
    Fallback,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TestimonialList {
    pub items: Vec<Testimonial>,
    pub origin: Origin,
}

impl TestimonialList {
    pub fn fallback() -> Self {
        Self {
            items: content::fallback_testimonials(),
            origin: Origin::Fallback,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum TestimonialsState {
    #[default]
    Loading,
    Ready(TestimonialList),
}

#[allow(async_fn_in_trait)]
pub trait TestimonialSource {
    async fn fetch_testimonials(&self) -> Result<Vec<Testimonial>, ApiError>;
}

/// One read from `source`. Any error, or an empty list, yields the bundled
/// fallback so the section always has something to show.
pub async fn load_testimonials<S: TestimonialSource>(source: &S) -> TestimonialList {
    match source.fetch_testimonials().await {
        Ok(items) if !items.is_empty() => TestimonialList {
            items,
            origin: Origin::Remote,
        },
        // An empty but successful reply still shows the bundled list.
        Ok(_) => {
            warn!("Testimonials endpoint returned no entries, using bundled list");
            TestimonialList::fallback()
        }
        Err(e) => {
            warn!("Failed to fetch testimonials, using bundled list: {}", e);
            TestimonialList::fallback()
        }
    }
}
