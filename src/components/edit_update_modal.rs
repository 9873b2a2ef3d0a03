//! Edit Update Modal
//!
//! Edit a feed entry's author, message and kind, or delete it.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{DeleteConfirmButton, Modal};
use crate::context::AppContext;
use crate::derived::FeedRow;
use crate::models::{UpdateKind, UpdatePatch};
use crate::store::{dispatch, use_event_store, Command, EventStateStoreFields};

/// Kind buttons in display order
const UPDATE_KINDS: &[(UpdateKind, &str, &str)] = &[
    (UpdateKind::Update, "Update", "💬"),
    (UpdateKind::Completed, "Completed", "✓"),
    (UpdateKind::Milestone, "Milestone", "🎉"),
];

#[component]
pub fn EditUpdateModal(row: FeedRow) -> impl IntoView {
    let store = use_event_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (person_id, set_person_id) = signal(row.person_id.clone());
    let (message, set_message) = signal(row.message.clone());
    let (kind, set_kind) = signal(row.kind);

    let update_id = row.id.clone();
    let delete_id = row.id.clone();

    let save_update = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let person_id = person_id.get();
        let message = message.get().trim().to_string();
        if person_id.is_empty() || message.is_empty() {
            return;
        }
        dispatch(
            &store,
            Command::UpdateUpdate {
                id: update_id.clone(),
                patch: UpdatePatch {
                    person_id: Some(person_id),
                    message: Some(message),
                    kind: Some(kind.get()),
                    ..Default::default()
                },
            },
        );
        ctx.close();
    };

    let delete_update = move || {
        dispatch(&store, Command::DeleteUpdate { id: delete_id.clone() });
        ctx.close();
    };

    view! {
        <Modal title="Edit Update" dir="ltr" on_close=move || ctx.close()>
            <form class="modal-form" on:submit=save_update>
                <div class="form-field">
                    <label class="form-label">"Who posted this?"</label>
                    <select
                        class="form-select"
                        prop:value=move || person_id.get()
                        on:change=move |ev| set_person_id.set(event_target_value(&ev))
                    >
                        <option value="">"Select person..."</option>
                        <For
                            each=move || store.people().get()
                            key=|person| person.id.clone()
                            children=move |person| {
                                let label = format!("{} {}", person.emoji, person.name);
                                view! { <option value=person.id.clone()>{label}</option> }
                            }
                        />
                    </select>
                </div>

                <div class="form-field">
                    <label class="form-label">"Message"</label>
                    <textarea
                        class="form-textarea"
                        rows="4"
                        prop:value=move || message.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                            set_message.set(area.value());
                        }
                    ></textarea>
                </div>

                <div class="form-field">
                    <label class="form-label">"Type"</label>
                    <div class="stage-btn-row">
                        {UPDATE_KINDS
                            .iter()
                            .map(|&(option, label, icon)| {
                                let is_selected = move || kind.get() == option;
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if is_selected() {
                                                "stage-pick-btn selected"
                                            } else {
                                                "stage-pick-btn"
                                            }
                                        }
                                        on:click=move |_| set_kind.set(option)
                                    >
                                        {format!("{} {}", icon, label)}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="form-actions">
                    <DeleteConfirmButton label="🗑" on_confirm=delete_update/>
                    <button type="submit" class="submit-btn">
                        "Save Changes"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
