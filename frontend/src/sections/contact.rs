use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api::ApiClient;
use crate::content::{ConsultationOffering, SITE};
use tokio_util::sync::CancellationToken;

use crate::lifecycle::SubmitGate;
use crate::submission::{submit, success_reset, ContactForm, FormAction, SubmissionState, SUCCESS_RESET_MS};
use crate::validation::{validate_inquiry, Field};

#[derive(Properties, PartialEq)]
struct OfferingCardProps {
    offering: &'static ConsultationOffering,
}

#[function_component(OfferingCard)]
fn offering_card(props: &OfferingCardProps) -> Html {
    let offering = props.offering;
    html! {
        <div class="offering">
            <div class="offering-head">
                <h4>{offering.name}</h4>
                <span class="offering-price">{offering.price.label()}</span>
            </div>
            <small class="offering-duration">{offering.duration}</small>
            <p>{offering.description}</p>
            <ul class="feature-list compact">
                { for offering.features.iter().map(|f| html! { <li><span class="check">{"✓"}</span>{*f}</li> }) }
            </ul>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_reducer(ContactForm::default);
    let gate = use_state(SubmitGate::new);
    let alive = use_state(CancellationToken::new);

    {
        let alive = (*alive).clone();
        use_effect_with_deps(move |_| {
            let guard = alive.drop_guard();
            move || drop(guard)
        }, ());
    }

    // Success panel stays up for SUCCESS_RESET_MS. The timer is dropped on
    // unmount or on a newer success, and the callback checks `alive` as well.
    {
        let dispatcher = form.dispatcher();
        let reset = success_reset(&form, (*alive).clone(), move |action| dispatcher.dispatch(action));
        let succeeded = form.state == SubmissionState::Succeeded;
        use_effect_with_deps(move |_| {
            let timer = reset.map(|fire| Timeout::new(SUCCESS_RESET_MS, fire));
            move || drop(timer)
        }, (succeeded, form.generation));
    }

    let onsubmit = {
        let form = form.clone();
        let gate = (*gate).clone();
        let alive = (*alive).clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if gate.is_busy() {
                return;
            }
            let inquiry = match validate_inquiry(&form.fields) {
                Ok(inquiry) => inquiry,
                Err(err) => {
                    form.dispatch(FormAction::Rejected(err));
                    return;
                }
            };
            let Some(pass) = gate.try_enter() else {
                return;
            };

            form.dispatch(FormAction::Started);
            let dispatcher = form.dispatcher();
            let alive = alive.clone();
            spawn_local(async move {
                let outcome = submit(&ApiClient::default(), &inquiry).await;
                drop(pass);
                if !alive.is_cancelled() {
                    dispatcher.dispatch(FormAction::Finished(outcome));
                }
            });
        })
    };

    let edit = |field: Field| {
        let dispatcher = form.dispatcher();
        Callback::from(move |value: String| dispatcher.dispatch(FormAction::Edit(field, value)))
    };
    let input_value = |e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value();

    let submitting = form.state.is_submitting();
    let fields = &form.fields;

    let body = match &form.state {
        SubmissionState::Succeeded => html! {
            <div class="form-success" role="status">
                <div class="success-icon">{"✓"}</div>
                <h3>{"Message Sent Successfully!"}</h3>
                <p>{"Thank you for your inquiry. We'll get back to you within 24 hours."}</p>
            </div>
        },
        state @ (SubmissionState::Idle | SubmissionState::Submitting | SubmissionState::Failed(_)) => html! {
            <form class="contact-form" {onsubmit}>
                if let Some(reason) = state.failure() {
                    <div class="form-error" role="alert">{reason}</div>
                }
                if let Some(err) = &form.validation {
                    <div class="form-error" role="alert">{err.to_string()}</div>
                }
                <div class="form-row">
                    <label>
                        {"Name *"}
                        <input type="text" required=true disabled={submitting}
                            value={fields.name.clone()}
                            oninput={edit(Field::Name).reform(input_value)} />
                    </label>
                    <label>
                        {"Email *"}
                        <input type="email" required=true disabled={submitting}
                            value={fields.email.clone()}
                            oninput={edit(Field::Email).reform(input_value)} />
                    </label>
                </div>
                <div class="form-row">
                    <label>
                        {"Phone"}
                        <input type="tel" disabled={submitting}
                            value={fields.phone.clone()}
                            oninput={edit(Field::Phone).reform(input_value)} />
                    </label>
                    <label>
                        {"Company"}
                        <input type="text" disabled={submitting}
                            value={fields.company.clone()}
                            oninput={edit(Field::Company).reform(input_value)} />
                    </label>
                </div>
                <label>
                    {"Consultation Type"}
                    <select disabled={submitting}
                        onchange={edit(Field::ConsultationType).reform(|e: Event| {
                            e.target_unchecked_into::<HtmlSelectElement>().value()
                        })}>
                        <option value="" selected={fields.consultation_type.is_empty()}>
                            {"Select consultation type"}
                        </option>
                        { for SITE.consultations.iter().map(|c| html! {
                            <option value={c.id.slug()} selected={fields.consultation_type == c.id.slug()}>
                                {format!("{} ({})", c.name, c.price.label())}
                            </option>
                        }) }
                    </select>
                    if let Some(chosen) = SITE.consultation_for_slug(&fields.consultation_type) {
                        <small class="offering-duration">
                            {format!("{} • {}", chosen.duration, chosen.price.label())}
                        </small>
                    }
                </label>
                <label>
                    {"Message *"}
                    <textarea rows="5" required=true disabled={submitting}
                        placeholder="Tell us about your project or data challenges..."
                        value={fields.message.clone()}
                        oninput={edit(Field::Message).reform(|e: InputEvent| {
                            e.target_unchecked_into::<HtmlTextAreaElement>().value()
                        })} />
                </label>
                <button type="submit" class="button button-primary button-block" disabled={submitting}>
                    { if submitting { "Sending..." } else { "Send Message" } }
                </button>
                <p class="gdpr-notice">
                    {"We respect your privacy. Your information is processed in line with UK GDPR and is never shared with third parties."}
                </p>
            </form>
        },
    };

    let details = &SITE.contact;

    html! {
        <section id="contact" class="section section-muted">
            <div class="container">
                <div class="section-heading">
                    <span class="badge">{"Contact"}</span>
                    <h2>{"Get Your Free Consultation"}</h2>
                    <p>{"Ready to transform your data management? Get in touch for a free, no-obligation consultation."}</p>
                </div>
                <div class="contact-grid">
                    <div class="card">{body}</div>
                    <aside class="contact-info">
                        <div class="card">
                            <h3>{"Contact Information"}</h3>
                            <p><strong>{"Phone: "}</strong><a href={format!("tel:{}", details.phone.replace(' ', ""))}>{details.phone}</a></p>
                            <p><strong>{"Email: "}</strong><a href={format!("mailto:{}", details.email)}>{details.email}</a></p>
                            <p><strong>{"Location: "}</strong>{details.address}</p>
                            <p><strong>{"Hours: "}</strong>{details.hours}</p>
                        </div>
                        <div class="card">
                            <h3>{"Consultation Options"}</h3>
                            { for SITE.consultations.iter().map(|offering| html! { <OfferingCard {offering} /> }) }
                        </div>
                    </aside>
                </div>
            </div>
        </section>
    }
}
