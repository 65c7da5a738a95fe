//! Count-up metric tiles.
//!
//! DESIGN
//! ======
//! Each tile owns a [`CountUpState`] signal and a [`MountScope`]. The first
//! time the tile scrolls into view an `IntersectionObserver` triggers the
//! counter. On unmount the scope stops the frame chain, disconnects the
//! observer and frees its callback, whether or not the tile was ever seen.
//! Without a browser the tile stays at zero, matching an untriggered counter.

#[cfg(test)]
#[path = "count_up_test.rs"]
mod count_up_test;

use leptos::prelude::*;

use content::ContentRegistry;
use content::metrics::{MetricDatum, MetricSet};

use crate::state::counter::CountUpState;
use crate::util::format::format_metric;
use crate::util::lifetime::Lifetime;
use crate::util::mount::MountScope;
use crate::util::tween;

/// Share of the tile that must be visible before counting starts.
#[cfg(feature = "csr")]
const VISIBLE_THRESHOLD: f64 = 0.3;

/// Single animated statistic.
#[component]
pub fn CountUp(datum: MetricDatum) -> impl IntoView {
    let counter = RwSignal::new(CountUpState::new(datum.target));
    let host_ref = NodeRef::<leptos::html::Div>::new();
    let scope = MountScope::new();

    #[cfg(feature = "csr")]
    {
        Effect::new(move || {
            let Some(host) = host_ref.get() else {
                return;
            };
            let mounted = scope.lifetime().clone();
            observe_once(&host, &scope, move || start_counter(counter, &mounted));
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = scope;

    let display = move || format_metric(counter.get().display, &datum);

    view! {
        <div class=format!("metric {}", datum.color.css_class()) node_ref=host_ref>
            <span class="metric__value" aria-live="polite">{display}</span>
            <span class="metric__label">{datum.label}</span>
        </div>
    }
}

/// Row of count-up tiles for one metric set from the registry.
#[component]
pub fn MetricStrip(set: MetricSet) -> impl IntoView {
    let registry = expect_context::<ContentRegistry>();
    view! {
        <div class="metric-strip">
            {registry
                .metrics(set)
                .iter()
                .map(|datum| view! { <CountUp datum=*datum/> })
                .collect_view()}
        </div>
    }
}

/// Trigger the counter once and drive it until done or unmounted.
pub(crate) fn start_counter(counter: RwSignal<CountUpState>, mounted: &Lifetime) {
    if !mounted.is_alive() {
        return;
    }
    let Some(Some(tween)) = counter.try_update(CountUpState::trigger) else {
        return;
    };
    tween::run(tween, mounted, move |value, done| {
        counter.try_update(|c| c.tick(value, done));
    });
}

/// Fire `on_visible` the first time `target` intersects the viewport. The
/// observer and its callback live until `scope` ends.
#[cfg(feature = "csr")]
fn observe_once(target: &web_sys::Element, scope: &MountScope, on_visible: impl FnOnce() + 'static) {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    if !scope.is_alive() {
        return;
    }
    let pending: Rc<RefCell<Option<Box<dyn FnOnce()>>>> = Rc::new(RefCell::new(Some(Box::new(on_visible))));
    let fire = {
        let pending = Rc::clone(&pending);
        move || {
            let next = pending.borrow_mut().take();
            if let Some(on_visible) = next {
                on_visible();
            }
        }
    };

    let fire_on_entry = fire.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .dyn_into::<web_sys::IntersectionObserverEntry>()
                    .is_ok_and(|entry| entry.is_intersecting())
            });
            if visible {
                observer.disconnect();
                fire_on_entry();
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(VISIBLE_THRESHOLD));
    let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init);
    match observer {
        Ok(observer) => {
            observer.observe(target);
            scope.defer(move || {
                observer.disconnect();
                drop(callback);
            });
        }
        Err(_) => {
            log::warn!("IntersectionObserver unavailable; starting counter immediately");
            fire();
        }
    }
}
