//! Update Item Component
//!
//! One feed entry with its author, relative time and kind marker.
//! Tapping it opens the editor.

use chrono::Utc;
use leptos::prelude::*;

use crate::context::{ActiveModal, AppContext};
use crate::derived::{self, FeedRow};
use crate::models::UpdateKind;

#[component]
pub fn UpdateItem(row: FeedRow, tick: ReadSignal<u32>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let created_at = row.created_at;
    let edit_row = row.clone();
    let relative = move || {
        tick.track();
        derived::relative_time(created_at, Utc::now())
    };

    view! {
        <div
            class="update-item"
            on:click=move |_| ctx.open(ActiveModal::EditUpdate(edit_row.clone()))
        >
            <div class="update-body">
                <div class="update-head">
                    <span class="update-author">{row.author.clone()}</span>
                    <span class="update-time">{relative}</span>
                </div>
                <p class="update-message">{row.message.clone()}</p>
            </div>
            {match row.kind {
                UpdateKind::Completed => {
                    Some(view! { <span class="update-marker completed">"✓"</span> })
                }
                UpdateKind::Milestone => {
                    Some(view! { <span class="update-marker milestone">"🎉"</span> })
                }
                UpdateKind::Update => None,
            }}
        </div>
    }
}
