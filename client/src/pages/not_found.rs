//! Fallback page for unknown routes.

use leptos::prelude::*;
use leptos_meta::Title;

use content::routes::SiteRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page not found"/>
        <section class="page-hero page-hero--centered">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist or has moved."</p>
            <a class="button button--primary" href=SiteRoute::Home.path()>"Back to home"</a>
        </section>
    }
}
