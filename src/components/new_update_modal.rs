//! New Update Modal
//!
//! Form for posting a feed update, with an optional go-live flag and an
//! inline add-person sub-form reached through the author select.

use chrono::Utc;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::Modal;
use crate::context::AppContext;
use crate::ids::generate_id;
use crate::models::{Person, PersonPatch, Update, UpdateKind};
use crate::store::{dispatch, use_event_store, Command, EventStateStoreFields};

const EMOJI_OPTIONS: &[&str] = &[
    "👤", "👨", "👩", "👴", "👵", "🧔", "👨‍💼", "👩‍💼", "🤵", "👰",
];

/// Sentinel option value that opens the inline add-person form
const NEW_PERSON_VALUE: &str = "__new__";

#[component]
pub fn NewUpdateModal() -> impl IntoView {
    let store = use_event_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (person_id, set_person_id) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (go_live, set_go_live) = signal(false);

    let (show_new_person, set_show_new_person) = signal(false);
    let (new_person_name, set_new_person_name) = signal(String::new());
    let (new_person_emoji, set_new_person_emoji) = signal(String::from("👤"));

    let post_update = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let person_id = person_id.get();
        let message = message.get().trim().to_string();
        if person_id.is_empty() || message.is_empty() {
            return;
        }

        dispatch(
            &store,
            Command::AddUpdate(Update {
                id: generate_id("update"),
                person_id: person_id.clone(),
                message,
                kind: UpdateKind::Update,
                task_id: None,
                created_at: Utc::now(),
            }),
        );
        if go_live.get() {
            dispatch(
                &store,
                Command::UpdatePerson {
                    id: person_id,
                    patch: PersonPatch {
                        is_live: Some(true),
                        ..Default::default()
                    },
                },
            );
        }
        ctx.close();
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
        <Modal title="Post Update" dir="ltr" on_close=move || ctx.close()>
            <form class="modal-form" on:submit=post_update>
                <div class="form-field">
                    <label class="form-label">"Who are you?"</label>
                    <select
                        class="form-select"
                        prop:value=move || person_id.get()
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            if value == NEW_PERSON_VALUE {
                                set_show_new_person.set(true);
                            } else {
                                set_person_id.set(value);
                            }
                        }
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
                        <option value=NEW_PERSON_VALUE>"+ Add new person..."</option>
                    </select>
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
                        <div class="emoji-row">
                            {EMOJI_OPTIONS
                                .iter()
                                .map(|&option| {
                                    let is_selected = move || new_person_emoji.get() == option;
                                    view! {
                                        <button
                                            type="button"
                                            class=move || {
                                                if is_selected() {
                                                    "emoji-btn selected"
                                                } else {
                                                    "emoji-btn"
                                                }
                                            }
                                            on:click=move |_| {
                                                set_new_person_emoji.set(option.to_string())
                                            }
                                        >
                                            {option}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
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

                <div class="form-field">
                    <label class="form-label">"What's the update?"</label>
                    <textarea
                        class="form-textarea"
                        rows="4"
                        placeholder="Write your update..."
                        prop:value=move || message.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                            set_message.set(area.value());
                        }
                    ></textarea>
                </div>

                <label class="checkbox-row">
                    <input
                        type="checkbox"
                        prop:checked=move || go_live.get()
                        on:change=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_go_live.set(input.checked());
                        }
                    />
                    <span>"🔴 I'm working on this now"</span>
                </label>

                <button type="submit" class="submit-btn">
                    "Post Update"
                </button>
            </form>
        </Modal>
    }
}
