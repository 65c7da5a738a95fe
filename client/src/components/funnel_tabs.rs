//! Per-vertical application funnel with tab switching.
//!
//! DESIGN
//! ======
//! The active tab is the only state. Stage bars, stage-to-stage losses and
//! the recovery projection are all derived from the registry dataset for the
//! active key, so switching tabs never fetches or caches anything.

use leptos::prelude::*;

use content::ContentRegistry;
use content::funnel::FunnelVertical;

use crate::state::tabs::TabSwitcher;
use crate::util::format::{format_eur, format_number};

#[component]
pub fn FunnelTabs(#[prop(optional)] initial: FunnelVertical) -> impl IntoView {
    let registry = expect_context::<ContentRegistry>();
    let tabs = RwSignal::new(TabSwitcher::new(initial));
    let dataset = move || *registry.funnel(tabs.with(TabSwitcher::active));

    let select = move |vertical: FunnelVertical| {
        if tabs.with_untracked(|t| t.is_active(vertical)) {
            return;
        }
        tabs.update(|t| {
            t.select(vertical);
        });
    };
    let on_select_change = move |ev: leptos::ev::Event| match event_target_value(&ev).parse::<FunnelVertical>() {
        Ok(vertical) => select(vertical),
        Err(err) => leptos::logging::warn!("{err}"),
    };

    view! {
        <section class="funnel">
            <div class="funnel__tabs" role="tablist">
                {FunnelVertical::ALL
                    .into_iter()
                    .map(|vertical| {
                        let active = move || tabs.with(|t| t.is_active(vertical));
                        view! {
                            <button
                                class="funnel__tab"
                                class:funnel__tab--active=active
                                role="tab"
                                aria-selected=move || active().to_string()
                                on:click=move |_| select(vertical)
                            >
                                {vertical.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <select
                class="funnel__select"
                aria-label="Lending vertical"
                prop:value=move || tabs.with(|t| t.active().key())
                on:change=on_select_change
            >
                {FunnelVertical::ALL
                    .into_iter()
                    .map(|vertical| view! { <option value=vertical.key()>{vertical.label()}</option> })
                    .collect_view()}
            </select>

            <div class="funnel__stages" role="tabpanel">
                {move || {
                    let data = dataset();
                    data.stages
                        .iter()
                        .enumerate()
                        .map(|(index, stage)| {
                            let count = data.stage_count(index).unwrap_or_default();
                            view! {
                                <div class="funnel__stage">
                                    <span class="funnel__stage-name">{stage.name}</span>
                                    <span class="funnel__bar" style:width=format!("{}%", stage.share_pct)></span>
                                    <span class="funnel__stage-count">{format_number(f64::from(count), 0)}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <ul class="funnel__losses">
                {move || {
                    dataset()
                        .losses()
                        .into_iter()
                        .map(|loss| {
                            view! {
                                <li class="funnel__loss">
                                    <span>{format!("{} → {}", loss.from, loss.to)}</span>
                                    <strong>{format!("-{}", format_number(f64::from(loss.lost), 0))}</strong>
                                    <span class="funnel__loss-pct">{format!("{}%", format_number(loss.lost_pct, 1))}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>

            <div class="funnel__recovery">
                <div class="funnel__figure">
                    <span class="funnel__figure-value">
                        {move || format_number(f64::from(dataset().total_lost()), 0)}
                    </span>
                    <span class="funnel__figure-label">"applicants lost each month"</span>
                </div>
                <div class="funnel__figure">
                    <span class="funnel__figure-value">
                        {move || format_number(f64::from(dataset().recovered_applicants()), 0)}
                    </span>
                    <span class="funnel__figure-label">"recoverable with LumiqAI"</span>
                </div>
                <div class="funnel__figure funnel__figure--accent">
                    <span class="funnel__figure-value">{move || format_eur(dataset().recovered_volume_eur())}</span>
                    <span class="funnel__figure-label">"additional monthly lending volume"</span>
                </div>
            </div>
        </section>
    }
}
