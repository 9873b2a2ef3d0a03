//! New Task Modal
//!
//! Form for adding a task, with inline sub-forms for creating a
//! category or a person without leaving the dialog.

use chrono::Utc;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::Modal;
use crate::context::AppContext;
use crate::ids::generate_id;
use crate::models::{Category, Person, Stage, Task};
use crate::store::{dispatch, use_event_store, Command, EventStateStoreFields};

const PERSON_EMOJI_OPTIONS: &[&str] = &[
    "👤", "👨", "👩", "👴", "👵", "🧔", "👨‍💼", "👩‍💼", "🤵", "👰",
];
const CATEGORY_EMOJI_OPTIONS: &[&str] = &[
    "📋", "🎉", "🍽️", "📸", "🚗", "💒", "🎁", "✈️", "🏨", "💄",
];

/// Emoji picker strip shared by the two inline sub-forms
#[component]
fn EmojiPicker(
    options: &'static [&'static str],
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="emoji-row">
            {options
                .iter()
                .map(|&option| {
                    let is_selected = move || value.get() == option;
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if is_selected() { "emoji-btn selected" } else { "emoji-btn" }
                            }
                            on:click=move |_| set_value.set(option.to_string())
                        >
                            {option}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn NewTaskModal() -> impl IntoView {
    let store = use_event_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (category_id, set_category_id) = signal(String::new());
    let (assignee_id, set_assignee_id) = signal(String::new());

    // Inline new category form
    let (show_new_category, set_show_new_category) = signal(false);
    let (new_category_name, set_new_category_name) = signal(String::new());
    let (new_category_emoji, set_new_category_emoji) = signal(String::from("📋"));

    // Inline new person form
    let (show_new_person, set_show_new_person) = signal(false);
    let (new_person_name, set_new_person_name) = signal(String::new());
    let (new_person_emoji, set_new_person_emoji) = signal(String::from("👤"));

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get().trim().to_string();
        if name.is_empty() {
            return;
        }

        // No selection falls back to the first category
        let selected = category_id.get();
        let category_id = if selected.is_empty() {
            store
                .categories()
                .read()
                .first()
                .map(|c| c.id.clone())
                .unwrap_or_default()
        } else {
            selected
        };
        let assignee = assignee_id.get();
        let assigned_to = if assignee.is_empty() { None } else { Some(assignee) };

        dispatch(
            &store,
            Command::AddTask(Task {
                id: generate_id("task"),
                category_id,
                name,
                stage: Stage::Backlog,
                assigned_to,
                created_at: Utc::now(),
                stuck_since: None,
            }),
        );
        ctx.close();
    };

    let add_category = move |_| {
        let name = new_category_name.get().trim().to_string();
        if name.is_empty() {
            return;
        }
        let order = store.categories().read().len() as i32 + 1;
        dispatch(
            &store,
            Command::AddCategory(Category {
                id: generate_id("cat"),
                name,
                emoji: new_category_emoji.get(),
                order,
            }),
        );
        set_new_category_name.set(String::new());
        set_new_category_emoji.set(String::from("📋"));
        set_show_new_category.set(false);
    };

    let add_person = move |_| {
        let name = new_person_name.get().trim().to_string();
        if name.is_empty() {
            return;
        }
        let short_name = name
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string();
        dispatch(
            &store,
            Command::AddPerson(Person {
                id: generate_id("person"),
                name,
                short_name,
                emoji: new_person_emoji.get(),
                is_live: false,
                live_task_id: None,
                created_at: Utc::now(),
            }),
        );
        set_new_person_name.set(String::new());
        set_new_person_emoji.set(String::from("👤"));
        set_show_new_person.set(false);
    };

    view! {
        <Modal title="Add New Task" dir="ltr" on_close=move || ctx.close()>
            <form class="modal-form" on:submit=create_task>
                <div class="form-field">
                    <label class="form-label">"Task Name"</label>
                    <input
                        type="text"
                        class="form-input"
                        placeholder="What needs to be done?"
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
                    <div class="select-row">
                        <select
                            class="form-select"
                            prop:value=move || category_id.get()
                            on:change=move |ev| set_category_id.set(event_target_value(&ev))
                        >
                            <option value="">"Select category..."</option>
                            <For
                                each=move || store.categories().get()
                                key=|category| category.id.clone()
                                children=move |category| {
                                    let label = format!("{} {}", category.emoji, category.name);
                                    view! { <option value=category.id.clone()>{label}</option> }
                                }
                            />
                        </select>
                        <button
                            type="button"
                            class="inline-add-btn"
                            on:click=move |_| set_show_new_category.set(true)
                        >
                            "+ Add"
                        </button>
                    </div>
                </div>

                <Show when=move || show_new_category.get()>
                    <div class="inline-form">
                        <p class="inline-form-title">"Add New Category"</p>
                        <input
                            type="text"
                            class="form-input"
                            placeholder="Category name"
                            prop:value=move || new_category_name.get()
                            on:input=move |ev| set_new_category_name.set(event_target_value(&ev))
                        />
                        <p class="inline-form-hint">"Select icon:"</p>
                        <EmojiPicker
                            options=CATEGORY_EMOJI_OPTIONS
                            value=new_category_emoji
                            set_value=set_new_category_emoji
                        />
                        <div class="inline-form-actions">
                            <button
                                type="button"
                                class="cancel-form-btn"
                                on:click=move |_| set_show_new_category.set(false)
                            >
                                "Cancel"
                            </button>
                            <button type="button" class="inline-add-btn" on:click=add_category>
                                "+ Add"
                            </button>
                        </div>
                    </div>
                </Show>

                <div class="form-field">
                    <label class="form-label">"Assigned To"</label>
                    <div class="select-row">
                        <select
                            class="form-select"
                            prop:value=move || assignee_id.get()
                            on:change=move |ev| set_assignee_id.set(event_target_value(&ev))
                        >
                            <option value="">"Who is responsible?"</option>
                            <For
                                each=move || store.people().get()
                                key=|person| person.id.clone()
                                children=move |person| {
                                    let label = format!("{} {}", person.emoji, person.name);
                                    view! { <option value=person.id.clone()>{label}</option> }
                                }
                            />
                        </select>
                        <button
                            type="button"
                            class="inline-add-btn green"
                            on:click=move |_| set_show_new_person.set(true)
                        >
                            "+ Add"
                        </button>
                    </div>
                </div>

                <Show when=move || show_new_person.get()>
                    <div class="inline-form">
                        <p class="inline-form-title">"Add New Person"</p>
                        <input
                            type="text"
                            class="form-input"
                            placeholder="Person's name"
                            prop:value=move || new_person_name.get()
                            on:input=move |ev| set_new_person_name.set(event_target_value(&ev))
                        />
                        <p class="inline-form-hint">"Select emoji:"</p>
                        <EmojiPicker
                            options=PERSON_EMOJI_OPTIONS
                            value=new_person_emoji
                            set_value=set_new_person_emoji
                        />
                        <div class="inline-form-actions">
                            <button
                                type="button"
                                class="cancel-form-btn"
                                on:click=move |_| set_show_new_person.set(false)
                            >
                                "Cancel"
                            </button>
                            <button type="button" class="inline-add-btn green" on:click=add_person>
                                "+ Add"
                            </button>
                        </div>
                    </div>
                </Show>

                <button type="submit" class="submit-btn">
                    "Add Task"
                </button>
            </form>
        </Modal>
    }
}
