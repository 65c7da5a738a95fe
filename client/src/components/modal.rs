//! Dialog overlay closed by the close button, Escape, or a backdrop click.

use leptos::prelude::*;

#[component]
pub fn Modal(title: &'static str, on_close: Callback<()>, children: Children) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    #[cfg(feature = "csr")]
    Effect::new(move || {
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.focus();
        }
    });

    view! {
        <div class="modal__backdrop" on:click=on_backdrop>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-label=title
                tabindex="0"
                node_ref=dialog_ref
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="modal__header">
                    <h2>{title}</h2>
                    <button class="modal__close" on:click=on_close_click title="Close" aria-label="Close">
                        "✕"
                    </button>
                </div>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}
