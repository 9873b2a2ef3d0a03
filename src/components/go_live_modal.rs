//! Go Live Modal
//!
//! Pick an open task and mark a person as working on it right now, or
//! stop an ongoing live session.

use leptos::prelude::*;

use crate::components::Modal;
use crate::context::AppContext;
use crate::models::{Person, PersonPatch, Stage};
use crate::store::{dispatch, use_event_store, Command, EventStateStoreFields};

#[component]
pub fn GoLiveModal(person: Person) -> impl IntoView {
    let store = use_event_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (task_id, set_task_id) = signal(person.live_task_id.clone().unwrap_or_default());
    let is_live = person.is_live;
    let go_person_id = person.id.clone();
    let stop_person_id = person.id.clone();

    // Only open work can be gone live on
    let open_tasks = move || {
        store
            .tasks()
            .get()
            .into_iter()
            .filter(|task| task.stage == Stage::Active || task.stage == Stage::Backlog)
            .collect::<Vec<_>>()
    };

    let go_live = move |_| {
        let selected = task_id.get();
        if selected.is_empty() {
            return;
        }
        dispatch(
            &store,
            Command::UpdatePerson {
                id: go_person_id.clone(),
                patch: PersonPatch {
                    is_live: Some(true),
                    live_task_id: Some(Some(selected)),
                    ..Default::default()
                },
            },
        );
        ctx.close();
    };

    let stop_live = move |_| {
        dispatch(
            &store,
            Command::UpdatePerson {
                id: stop_person_id.clone(),
                patch: PersonPatch {
                    is_live: Some(false),
                    live_task_id: Some(None),
                    ..Default::default()
                },
            },
        );
        ctx.close();
    };

    view! {
        <Modal title="גיין לייוו" dir="rtl" on_close=move || ctx.close()>
            <div class="modal-form">
                <div class="golive-person">
                    <span class="golive-emoji">{person.emoji.clone()}</span>
                    <span class="golive-name">{person.name.clone()}</span>
                </div>
                {if is_live {
                    view! {
                        <button type="button" class="stop-live-btn" on:click=stop_live>
                            "⏹ האַלט אָפּ לייוו"
                        </button>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="form-field">
                            <label class="form-label">"אויף וואָס אַרבעטסטו?"</label>
                            <select
                                class="form-select"
                                prop:value=move || task_id.get()
                                on:change=move |ev| set_task_id.set(event_target_value(&ev))
                            >
                                <option value="">"קלייב אַ טאַסק..."</option>
                                <For
                                    each=open_tasks
                                    key=|task| task.id.clone()
                                    children=move |task| {
                                        view! {
                                            <option value=task.id.clone()>{task.name}</option>
                                        }
                                    }
                                />
                            </select>
                        </div>
                        <button type="button" class="go-live-btn" on:click=go_live>
                            "🔴 גיי לייוו!"
                        </button>
                    }
                        .into_any()
                }}
            </div>
        </Modal>
    }
}
