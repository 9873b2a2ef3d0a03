//! Edit Task Modal
//!
//! Edit a task's name, category, stage and assignee, or delete it.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{DeleteConfirmButton, Modal};
use crate::context::AppContext;
use crate::derived::{category_by_id, person_by_id, TaskRow};
use crate::models::{Stage, TaskPatch};
use crate::store::{dispatch, use_event_store, Command, EventStateStoreFields};

/// Stage buttons in display order
const STAGES: &[Stage] = &[Stage::Backlog, Stage::Active, Stage::Done];

#[component]
pub fn EditTaskModal(row: TaskRow) -> impl IntoView {
    let store = use_event_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Dangling references start out as "none selected", so saving
    // without touching the select clears them
    let initial_category = category_by_id(&store.categories().read(), &row.category_id)
        .map(|c| c.id.clone())
        .unwrap_or_default();
    let initial_assignee = row
        .assignee_id
        .as_deref()
        .filter(|id| person_by_id(&store.people().read(), id).is_some())
        .map(str::to_string)
        .unwrap_or_default();

    let (name, set_name) = signal(row.name.clone());
    let (stage, set_stage) = signal(row.stage);
    let (category_id, set_category_id) = signal(initial_category);
    let (assignee_id, set_assignee_id) = signal(initial_assignee);

    let task_id = row.id.clone();
    let delete_id = row.id.clone();

    let save_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get().trim().to_string();
        if name.is_empty() {
            return;
        }
        let assignee = assignee_id.get();
        dispatch(
            &store,
            Command::UpdateTask {
                id: task_id.clone(),
                patch: TaskPatch {
                    name: Some(name),
                    stage: Some(stage.get()),
                    category_id: Some(category_id.get()),
                    assigned_to: Some(if assignee.is_empty() { None } else { Some(assignee) }),
                    ..Default::default()
                },
            },
        );
        ctx.close();
    };

    let delete_task = move || {
        dispatch(&store, Command::DeleteTask { id: delete_id.clone() });
        ctx.close();
    };

    view! {
        <Modal title="Edit Task" dir="ltr" on_close=move || ctx.close()>
            <form class="modal-form" on:submit=save_task>
                <div class="form-field">
                    <label class="form-label">"Task Name"</label>
                    <input
                        type="text"
                        class="form-input"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_name.set(input.value());
                        }
                    />
                </div>

                <div class="form-field">
                    <label class="form-label">"Category"</label>
                    <select
                        class="form-select"
                        prop:value=move || category_id.get()
                        on:change=move |ev| set_category_id.set(event_target_value(&ev))
                    >
                        <option value="">"No category"</option>
                        <For
                            each=move || store.categories().get()
                            key=|category| category.id.clone()
                            children=move |category| {
                                let label = format!("{} {}", category.emoji, category.name);
                                view! { <option value=category.id.clone()>{label}</option> }
                            }
                        />
                    </select>
                </div>

                <div class="form-field">
                    <label class="form-label">"Status"</label>
                    <div class="stage-btn-row">
                        {STAGES
                            .iter()
                            .map(|&option| {
                                let is_selected = move || stage.get() == option;
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
                                        on:click=move |_| set_stage.set(option)
                                    >
                                        {option.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="form-field">
                    <label class="form-label">"Assigned To"</label>
                    <select
                        class="form-select"
                        prop:value=move || assignee_id.get()
                        on:change=move |ev| set_assignee_id.set(event_target_value(&ev))
                    >
                        <option value="">"Unassigned"</option>
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

                <div class="form-actions">
                    <DeleteConfirmButton label="🗑" on_confirm=delete_task/>
                    <button type="submit" class="submit-btn">
                        "Save Changes"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
