use wasm_bindgen_futures::spawn_local;
use tokio_util::sync::CancellationToken;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::rating::StarRating;
use crate::components::skeleton::SkeletonCards;
use crate::models::Testimonial;
use crate::testimonials::{load_testimonials, TestimonialsState};

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let t = &props.testimonial;
    html! {
        <div class="card testimonial-card">
            <StarRating stars={t.stars()} />
            <blockquote>{format!("\u{201c}{}\u{201d}", t.text)}</blockquote>
            <div class="testimonial-author">
                <span class="avatar">{t.initials()}</span>
                <div>
                    <strong>{&t.name}</strong>
                    <small>
                        {&t.company}
                        if !t.location.is_empty() {
                            {format!(", {}", t.location)}
                        }
                    </small>
                </div>
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let state = use_state(TestimonialsState::default);

    {
        let state = state.clone();
        use_effect_with_deps(move |_| {
            let token = CancellationToken::new();
            let guard = token.clone().drop_guard();
            spawn_local(async move {
                let list = load_testimonials(&ApiClient::default()).await;
                if !token.is_cancelled() {
                    state.set(TestimonialsState::Ready(list));
                }
            });
            move || drop(guard)
        }, ());
    }

    let body = match &*state {
        TestimonialsState::Loading => html! { <SkeletonCards count={3} /> },
        TestimonialsState::Ready(list) => html! {
            <>
                { for list.items.iter().map(|t| html! {
                    <TestimonialCard testimonial={t.clone()} />
                }) }
            </>
        },
    };

    html! {
        <section id="testimonials" class="section">
            <div class="container">
                <div class="section-heading">
                    <span class="badge">{"Testimonials"}</span>
                    <h2>{"What Our Clients Say"}</h2>
                    <p>{"Don't just take our word for it. Here's what UK businesses say about working with us."}</p>
                </div>
                <div class="card-grid">{body}</div>
            </div>
        </section>
    }
}
