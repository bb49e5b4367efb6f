use yew::prelude::*;

use crate::content::SITE;

#[function_component(ProblemIdentification)]
pub fn problem_identification() -> Html {
    let problems = &SITE.problems;
    html! {
        <section id="problems" class="section">
            <div class="container split">
                <div>
                    <span class="badge badge-warning">{problems.badge}</span>
                    <h2>
                        {problems.heading_lead}
                        <span class="highlight">{problems.heading_highlight}</span>
                    </h2>
                    <p>{problems.intro}</p>
                    <ul class="pain-points">
                        { for problems.pain_points.iter().map(|point| html! {
                            <li><span class="cross">{"✗"}</span>{*point}</li>
                        }) }
                    </ul>
                    <div class="callout">
                        <h3>{problems.solution_title}</h3>
                        <p>{problems.solution_text}</p>
                        <a href="#contact" class="button button-primary">{"Let's Solve Them Together"}</a>
                    </div>
                </div>
                <div class="split-visual">
                    <img src={problems.image} alt={problems.image_alt} loading="lazy" />
                </div>
            </div>
        </section>
    }
}
