use yew::prelude::*;

use crate::content::SITE;

#[function_component(Hero)]
pub fn hero() -> Html {
    let hero = &SITE.hero;
    let about = &SITE.about;

    html! {
        <section id="home" class="hero">
            <div class="container hero-grid">
                <div class="hero-copy">
                    <span class="badge">{hero.kicker}</span>
                    <h1>
                        {hero.title_lead}
                        <span class="highlight">{hero.title_highlight}</span>
                        {hero.title_tail}
                    </h1>
                    <p class="hero-subtitle">{hero.subtitle}</p>
                    <div class="hero-actions">
                        <a href="#contact" class="button button-primary">{hero.cta}</a>
                        <a href="#services" class="button button-outline">{"View Services"}</a>
                    </div>
                    <ul class="trust-points">
                        { for hero.trust_points.iter().map(|point| html! {
                            <li><span class="check">{"✓"}</span>{*point}</li>
                        }) }
                    </ul>
                </div>
                <div class="hero-visual">
                    <img src={hero.image} alt={hero.image_alt} loading="lazy" />
                    <div class="hero-card">
                        <span class="logo-mark">{SITE.brand.monogram}</span>
                        <div>
                            <strong>{about.name}</strong>
                            <small>{hero.card_title}</small>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
