//! Site footer.

use leptos::prelude::*;

use content::routes::SiteRoute;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__brand">
                <span class="site-footer__logo">"LumiqAI"</span>
                <p>"Alternative-data credit scoring for consumer lenders."</p>
            </div>
            <nav class="site-footer__links">
                {SiteRoute::ALL
                    .into_iter()
                    .filter(|route| route.in_nav())
                    .map(|route| view! { <a href=route.path()>{route.title()}</a> })
                    .collect_view()}
            </nav>
            <p class="site-footer__legal">
                "Figures shown are illustrative pilot projections. Santander is a trademark of its respective owner."
            </p>
        </footer>
    }
}
