use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONTACT_EMAIL;
use crate::content::BRAND_NAME;
use crate::Route;

pub fn copyright(year: i32) -> String {
    format!("© {} La Loge", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="footer">
            <div>
                <div class="footer-logo">{BRAND_NAME}</div>
                <div class="footer-tagline">{"Conciergerie Beauté"}</div>
            </div>
            <div class="footer-links">
                <Link<Route> to={Route::Legal}>{"Mentions légales"}</Link<Route>>
                <Link<Route> to={Route::Privacy}>{"Confidentialité"}</Link<Route>>
                <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
            </div>
            <div class="footer-copy">{copyright(year)}</div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_the_year() {
        assert_eq!(copyright(2026), "© 2026 La Loge");
    }
}
