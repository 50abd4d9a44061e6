use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod reveal;
mod theme;
mod transition;

mod components {
    pub mod footer;
    pub mod nav;
    pub mod reveal;
}
mod sections {
    pub mod contact;
    pub mod faq;
    pub mod hero;
    pub mod proof;
    pub mod steps;
    pub mod tiers;
}
mod pages {
    pub mod landing;
    pub mod legal;
}

use components::{footer::Footer, nav::Nav};
use pages::{
    landing::Landing,
    legal::{LegalNotice, PrivacyPolicy},
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/mentions-legales")]
    Legal,
    #[at("/confidentialite")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Legal => {
            info!("Rendering Legal notice page");
            html! { <LegalNotice /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Landing /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{ theme::stylesheet() }</style>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
