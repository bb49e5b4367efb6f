use yew::prelude::*;

use crate::sections::{
    about::About, contact::Contact, footer::Footer, hero::Hero,
    problems::ProblemIdentification, services::Services, testimonials::Testimonials,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <main>
                <Hero />
                <Services />
                <ProblemIdentification />
                <About />
                <Testimonials />
                <Contact />
            </main>
            <Footer />
        </>
    }
}
