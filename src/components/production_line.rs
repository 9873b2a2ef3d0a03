//! Production Line Component
//!
//! The task board: stage tabs with counts, the per-stage list, and the
//! add-task button.

use leptos::prelude::*;

use crate::components::TaskCard;
use crate::context::{ActiveModal, AppContext};
use crate::derived;
use crate::models::Stage;
use crate::store::use_event_store;

/// Tab order across the board
const STAGE_TABS: &[Stage] = &[Stage::Backlog, Stage::Active, Stage::Done];

#[component]
pub fn ProductionLine() -> impl IntoView {
    let store = use_event_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (active_tab, set_active_tab) = signal(Stage::Backlog);

    let rows = Memo::new(move |_| derived::task_rows(&store.read()));
    let visible = Memo::new(move |_| {
        let tab = active_tab.get();
        rows.get()
            .into_iter()
            .filter(|row| row.stage == tab)
            .collect::<Vec<_>>()
    });
    let count_for = move |stage: Stage| rows.get().iter().filter(|row| row.stage == stage).count();

    view! {
        <div class="production-line" dir="ltr">
            <div class="stage-tabs">
                {STAGE_TABS
                    .iter()
                    .map(|&stage| {
                        let is_active = move || active_tab.get() == stage;
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if is_active() { "stage-tab active" } else { "stage-tab" }
                                }
                                on:click=move |_| set_active_tab.set(stage)
                            >
                                {move || format!("{} ({})", stage.label(), count_for(stage))}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="task-list">
                <For
                    each=move || visible.get()
                    key=|row| row.clone()
                    children=move |row| view! { <TaskCard row=row/> }
                />
                <Show when=move || visible.get().is_empty()>
                    <div class="empty-state">
                        <p>"No tasks"</p>
                    </div>
                </Show>
            </div>
            <div class="add-task-row">
                <button
                    type="button"
                    class="add-task-btn"
                    on:click=move |_| ctx.open(ActiveModal::NewTask)
                >
                    "+ Add Task"
                </button>
            </div>
        </div>
    }
}
