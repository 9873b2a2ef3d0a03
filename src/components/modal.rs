//! Modal Shell Component
//!
//! Shared overlay and panel chrome for every dialog. Clicking the
//! backdrop or the close button runs `on_close`.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: String,
    /// Text direction for the panel body ("rtl" or "ltr")
    dir: &'static str,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-overlay">
            <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
            <div class="modal-panel" dir=dir>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="modal-close-btn" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
