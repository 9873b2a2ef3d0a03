//! New Person Modal
//!
//! Form for adding a family member or helper, with an emoji picker.

use chrono::Utc;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::Modal;
use crate::context::AppContext;
use crate::ids::generate_id;
use crate::models::Person;
use crate::store::{dispatch, use_event_store, Command};

/// Avatar emoji options
const EMOJI_OPTIONS: &[&str] = &["👩", "👨", "👴", "👵", "🧑", "👤"];

#[component]
pub fn NewPersonModal() -> impl IntoView {
    let store = use_event_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (short_name, set_short_name) = signal(String::new());
    let (emoji, set_emoji) = signal(String::from("👤"));

    let create_person = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get().trim().to_string();
        let short = short_name.get().trim().to_string();
        if name.is_empty() || short.is_empty() {
            return;
        }

        dispatch(
            &store,
            Command::AddPerson(Person {
                id: generate_id("person"),
                name,
                short_name: short,
                emoji: emoji.get(),
                is_live: false,
                live_task_id: None,
                created_at: Utc::now(),
            }),
        );
        ctx.close();
    };

    view! {
        <Modal title="צולייג נייעם מענטש" dir="rtl" on_close=move || ctx.close()>
            <form class="modal-form" on:submit=create_person>
                <div class="form-field">
                    <label class="form-label">"נאָמען"</label>
                    <input
                        type="text"
                        class="form-input"
                        placeholder="פולער נאָמען"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_name.set(input.value());
                        }
                    />
                </div>
                <div class="form-field">
                    <label class="form-label">"קורצער נאָמען"</label>
                    <input
                        type="text"
                        class="form-input"
                        placeholder="פאר אַוואַטאַר"
                        prop:value=move || short_name.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_short_name.set(input.value());
                        }
                    />
                </div>
                <div class="form-field">
                    <label class="form-label">"עמאָדזשי"</label>
                    <div class="emoji-row">
                        {EMOJI_OPTIONS
                            .iter()
                            .map(|&option| {
                                let is_selected = move || emoji.get() == option;
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
                                        on:click=move |_| set_emoji.set(option.to_string())
                                    >
                                        {option}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <button type="submit" class="submit-btn">
                    "צולייגן מענטש"
                </button>
            </form>
        </Modal>
    }
}
