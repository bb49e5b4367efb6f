use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod api;
mod config;
mod content;
mod lifecycle;
mod models;
mod submission;
mod testimonials;
mod validation;
mod components {
    pub mod rating;
    pub mod skeleton;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod problems;
    pub mod services;
    pub mod testimonials;
}
mod pages {
    pub mod home;
}

use pages::home::Home;
use sections::header::Header;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
