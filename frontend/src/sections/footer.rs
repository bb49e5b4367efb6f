use chrono::Datelike;
use gloo_timers::callback::Timeout;
use log::error;
use tokio_util::sync::CancellationToken;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::content::SITE;
use crate::lifecycle::SubmitGate;
use crate::submission::{SubmissionState, SUCCESS_RESET_MS};
use crate::validation::validate_newsletter_email;

const SUBSCRIBE_FAILURE_MESSAGE: &str = "Subscription failed. Please try again.";

#[function_component(Newsletter)]
fn newsletter() -> Html {
    let email = use_state(String::new);
    let state = use_state(SubmissionState::default);
    let gate = use_state(SubmitGate::new);
    let alive = use_state(CancellationToken::new);

    {
        let alive = (*alive).clone();
        use_effect_with_deps(move |_| {
            let guard = alive.drop_guard();
            move || drop(guard)
        }, ());
    }

    {
        let state = state.clone();
        let succeeded = *state == SubmissionState::Succeeded;
        use_effect_with_deps(move |&succeeded| {
            let timer = succeeded.then(|| {
                Timeout::new(SUCCESS_RESET_MS, move || state.set(SubmissionState::Idle))
            });
            move || drop(timer)
        }, succeeded);
    }

    let onsubmit = {
        let email = email.clone();
        let state = state.clone();
        let gate = (*gate).clone();
        let alive = (*alive).clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let address = match validate_newsletter_email(&email) {
                Ok(address) => address,
                Err(err) => {
                    state.set(SubmissionState::Failed(err.to_string()));
                    return;
                }
            };
            let Some(pass) = gate.try_enter() else {
                return;
            };

            state.set(SubmissionState::Submitting);
            let email = email.clone();
            let state = state.clone();
            let alive = alive.clone();
            spawn_local(async move {
                let result = ApiClient::default().subscribe_newsletter(&address).await;
                drop(pass);
                if alive.is_cancelled() {
                    return;
                }
                match result {
                    Ok(_) => {
                        email.set(String::new());
                        state.set(SubmissionState::Succeeded);
                    }
                    Err(e) => {
                        error!("Newsletter subscription failed: {}", e);
                        state.set(SubmissionState::Failed(SUBSCRIBE_FAILURE_MESSAGE.to_string()));
                    }
                }
            });
        })
    };

    let oninput = {
        let email = email.clone();
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            if state.failure().is_some() {
                state.set(SubmissionState::Idle);
            }
        })
    };

    let submitting = state.is_submitting();

    html! {
        <div class="newsletter">
            <h4>{"Stay Updated"}</h4>
            <p>{"Get database tips and insights delivered to your inbox."}</p>
            {
                match &*state {
                    SubmissionState::Succeeded => html! {
                        <p class="newsletter-success">{"Thanks for subscribing!"}</p>
                    },
                    other => html! {
                        <form class="newsletter-form" {onsubmit}>
                            <input type="email" placeholder="Your email" required=true
                                disabled={submitting} value={(*email).clone()} {oninput} />
                            <button type="submit" class="button button-primary" disabled={submitting}>
                                { if submitting { "..." } else { "Subscribe" } }
                            </button>
                            if let Some(reason) = other.failure() {
                                <p class="newsletter-error">{reason}</p>
                            }
                        </form>
                    },
                }
            }
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();
    let footer = &SITE.footer;
    let contact = &SITE.contact;

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <a href="#home" class="nav-logo">
                        <span class="logo-mark">{SITE.brand.monogram}</span>
                        <span class="logo-text">
                            <strong>{SITE.brand.name}</strong>
                            <small>{SITE.brand.tagline}</small>
                        </span>
                    </a>
                    <p>{footer.blurb}</p>
                    <p>{contact.phone}<br />{contact.email}<br />{contact.address}</p>
                </div>
                { for footer.groups.iter().map(|group| html! {
                    <div class="footer-group">
                        <h4>{group.title}</h4>
                        <ul>
                            { for group.links.iter().map(|link| html! {
                                <li><a href={link.href}>{link.label}</a></li>
                            }) }
                        </ul>
                    </div>
                }) }
                <Newsletter />
            </div>
            <div class="container footer-bottom">
                <span>{format!("© {} {}. All rights reserved.", year, SITE.brand.name)}</span>
                <span class="socials">
                    { for footer.socials.iter().map(|link| html! {
                        <a href={link.href} aria-label={link.label}>{link.label}</a>
                    }) }
                </span>
            </div>
        </footer>
    }
}
