//! Live Feed Component
//!
//! Newest-first update feed. Relative time labels re-render on a slow
//! tick so they never go stale.

use std::time::Duration;

use leptos::prelude::*;

use crate::components::UpdateItem;
use crate::context::{ActiveModal, AppContext};
use crate::derived;
use crate::store::use_event_store;

#[component]
pub fn LiveFeed() -> impl IntoView {
    let store = use_event_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Bump every 30s to refresh the "n minutes ago" labels
    let (tick, set_tick) = signal(0u32);
    if let Ok(handle) =
        set_interval_with_handle(move || set_tick.update(|t| *t += 1), Duration::from_secs(30))
    {
        on_cleanup(move || handle.clear());
    }

    let rows = Memo::new(move |_| derived::feed_rows(&store.read()));

    view! {
        <div class="glass-card live-feed" dir="rtl">
            <div class="feed-header">
                <span class="feed-count">{move || format!("{} אַפּדעיטס", rows.get().len())}</span>
                <button
                    type="button"
                    class="feed-add-btn"
                    on:click=move |_| ctx.open(ActiveModal::NewUpdate)
                >
                    "+ נייע"
                </button>
            </div>
            <div class="feed-list">
                <For
                    each=move || rows.get()
                    key=|row| row.clone()
                    children=move |row| view! { <UpdateItem row=row tick=tick/> }
                />
                <Show when=move || rows.get().is_empty()>
                    <div class="empty-state">
                        <p>"קיין אַפּדעיטס נאָך"</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
