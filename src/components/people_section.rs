//! People Section Component
//!
//! Horizontally scrolling avatar strip with the live count row and the
//! add-person button.

use leptos::prelude::*;

use crate::components::{LiveIndicator, PersonAvatar};
use crate::context::{ActiveModal, AppContext};
use crate::derived;
use crate::store::use_event_store;

#[component]
pub fn PeopleSection() -> impl IntoView {
    let store = use_event_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let summaries = Memo::new(move |_| derived::person_summaries(&store.read()));
    let live_count = move || {
        summaries
            .get()
            .iter()
            .filter(|summary| summary.person.is_live)
            .count()
    };

    view! {
        <div class="people-section" dir="rtl">
            <Show when=move || { live_count() > 0 }>
                <div class="live-count-row">
                    <LiveIndicator/>
                    <span class="live-count">{move || format!("{} לייוו", live_count())}</span>
                </div>
            </Show>
            <div class="people-row">
                <For
                    each=move || summaries.get()
                    key=|summary| {
                        // Tuple of the rendered fields so edits re-render the avatar
                        (
                            summary.person.id.clone(),
                            summary.person.name.clone(),
                            summary.person.emoji.clone(),
                            summary.person.is_live,
                            summary.done,
                            summary.assigned,
                            summary.live_task_name.clone(),
                        )
                    }
                    children=move |summary| view! { <PersonAvatar summary=summary/> }
                />
                <button class="add-person-btn" on:click=move |_| ctx.open(ActiveModal::NewPerson)>
                    <div class="add-person-circle">"+"</div>
                    <span class="add-person-label">"הוסף"</span>
                </button>
            </div>
        </div>
    }
}
