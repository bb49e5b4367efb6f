use yew::prelude::*;

use crate::content::{ServiceOffering, SITE};

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    offering: &'static ServiceOffering,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let offering = props.offering;
    html! {
        <div class="card service-card">
            <div class="service-icon">{offering.icon.glyph()}</div>
            <h3>{offering.title}</h3>
            <p>{offering.description}</p>
            <ul class="feature-list">
                { for offering.features.iter().map(|feature| html! {
                    <li><span class="check">{"✓"}</span>{*feature}</li>
                }) }
            </ul>
            if !offering.pricing.is_empty() {
                <div class="pricing">
                    <h4>{"Pricing"}</h4>
                    { for offering.pricing.iter().map(|tier| html! {
                        <div class="pricing-row">
                            <span>{tier.label}</span>
                            <strong>{tier.amount}</strong>
                        </div>
                    }) }
                </div>
            }
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let services = &SITE.services;
    html! {
        <section id="services" class="section section-muted">
            <div class="container">
                <div class="section-heading">
                    <span class="badge">{services.badge}</span>
                    <h2>{services.heading}</h2>
                    <p>{services.intro}</p>
                </div>
                <div class="card-grid">
                    { for services.offerings.iter().map(|offering| html! {
                        <ServiceCard {offering} />
                    }) }
                </div>
            </div>
        </section>
    }
}
