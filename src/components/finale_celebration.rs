//! Finale Celebration Component
//!
//! Full-screen congratulations card shown once when every task is done.
//! Clicking the backdrop or the button dismisses it.

use leptos::prelude::*;

#[component]
pub fn FinaleCelebration(#[prop(into)] on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <div class="finale-overlay" on:click=move |_| on_dismiss.run(())>
            <div class="finale-card" on:click=move |ev| ev.stop_propagation()>
                <div class="finale-emoji">"🎉"</div>
                <h1 class="finale-title">"מזל טוב!"</h1>
                <p class="finale-text">"אַלץ איז גרייט פאַר דער חתונה!"</p>
                <button
                    type="button"
                    class="submit-btn"
                    on:click=move |_| on_dismiss.run(())
                >
                    "פארמאַכן"
                </button>
            </div>
        </div>
    }
}
