use yew::prelude::*;

use crate::content::SITE;

#[function_component(About)]
pub fn about() -> Html {
    let about = &SITE.about;
    html! {
        <section id="about" class="section section-muted">
            <div class="container split">
                <div class="about-portrait">
                    <img src={about.portrait} alt={about.name} loading="lazy" />
                    <div class="stats">
                        { for about.stats.iter().map(|stat| html! {
                            <div class="stat">
                                <strong>{stat.value}</strong>
                                <span>{stat.label}</span>
                            </div>
                        }) }
                    </div>
                </div>
                <div>
                    <span class="badge">{"About"}</span>
                    <h2>{about.name}</h2>
                    <p class="about-title">{about.title}</p>
                    <p class="about-location">{"📍 "}{about.location}</p>
                    <p>{about.description}</p>
                    <h3>{"Areas of Expertise"}</h3>
                    <ul class="feature-list">
                        { for about.expertise.iter().map(|item| html! {
                            <li><span class="check">{"✓"}</span>{*item}</li>
                        }) }
                    </ul>
                </div>
            </div>
            <div class="container card-grid values">
                { for about.values.iter().map(|value| html! {
                    <div class="card">
                        <h3>{value.title}</h3>
                        <p>{value.text}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
