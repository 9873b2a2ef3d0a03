//! Person Avatar Component
//!
//! One member of the avatar strip: emoji circle, live dot, name and
//! task counts. Tapping it opens the go-live dialog for that person.

use leptos::prelude::*;

use crate::context::{ActiveModal, AppContext};
use crate::derived::PersonSummary;

#[component]
pub fn PersonAvatar(summary: PersonSummary) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let person = summary.person.clone();
    let is_live = summary.person.is_live;
    let live_task = summary.live_task_name.clone().filter(|_| is_live);

    view! {
        <div
            class="person-avatar"
            on:click=move |_| ctx.open(ActiveModal::GoLive(person.clone()))
        >
            <div class="avatar-circle-wrap">
                <div class="avatar-circle">{summary.person.emoji.clone()}</div>
                <Show when=move || is_live>
                    <span class="avatar-live-dot"></span>
                </Show>
            </div>
            <p class="avatar-name">{summary.person.name.clone()}</p>
            <p class="avatar-count">{format!("{}/{}", summary.done, summary.assigned)}</p>
            {live_task.map(|name| view! { <p class="avatar-live-task">{name}</p> })}
        </div>
    }
}
