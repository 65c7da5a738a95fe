//! Site header with primary navigation and a mobile menu toggle.

use leptos::prelude::*;

use content::routes::SiteRoute;

use crate::state::disclosure::{Disclosure, IndependentDisclosure};

const MOBILE_MENU: &str = "mobile-menu";

#[component]
pub fn Header() -> impl IntoView {
    let menus = RwSignal::new(IndependentDisclosure::<&'static str>::new());
    let menu_open = move || menus.with(|m| m.is_open(&MOBILE_MENU));
    let close_menu = move |_| menus.update(|m| m.close(&MOBILE_MENU));

    view! {
        <header class="site-header" class:site-header--menu-open=menu_open>
            <a class="site-header__brand" href=SiteRoute::Home.path() on:click=close_menu>
                <span class="site-header__logo">"LumiqAI"</span>
                <span class="site-header__partner">"× Santander"</span>
            </a>
            <button
                class="site-header__menu-toggle"
                aria-label="Toggle navigation"
                aria-expanded=move || menu_open().to_string()
                on:click=move |_| menus.update(|m| m.toggle(MOBILE_MENU))
            >
                <span class="site-header__menu-icon"></span>
            </button>
            <nav class="site-header__nav" class:site-header__nav--open=menu_open>
                {SiteRoute::ALL
                    .into_iter()
                    .filter(|route| route.in_nav())
                    .map(|route| {
                        let is_cta = route == SiteRoute::Pilot;
                        view! {
                            <a
                                class="site-header__link"
                                class:site-header__link--cta=is_cta
                                href=route.path()
                                on:click=close_menu
                            >
                                {route.title()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
