use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{BRAND_NAME, BRAND_TAGLINE, NAV_CTA, NAV_LINKS};
use crate::Route;

#[function_component(Nav)]
pub fn nav() -> Html {
    html! {
        <nav class="nav">
            <Link<Route> to={Route::Home}>
                <div class="nav-logo">{BRAND_NAME}</div>
                <div class="nav-sub">{BRAND_TAGLINE}</div>
            </Link<Route>>
            <div class="nav-links">
                { for NAV_LINKS.iter().map(|link| html! {
                    <a href={link.href} key={link.href}>{link.label}</a>
                }) }
                <a href={NAV_CTA.href} class="nav-cta">{NAV_CTA.label}</a>
            </div>
        </nav>
    }
}
