//! Task Card Component
//!
//! One row on the board. The stage icon advances the task on tap, the
//! rest of the row opens the editor.

use leptos::prelude::*;

use crate::context::{ActiveModal, AppContext};
use crate::derived::TaskRow;
use crate::models::Stage;
use crate::store::{dispatch, use_event_store, Command};

fn stage_icon(stage: Stage) -> &'static str {
    match stage {
        Stage::Backlog => "○",
        Stage::Active => "◔",
        Stage::Done => "✓",
    }
}

fn stage_class(stage: Stage) -> &'static str {
    match stage {
        Stage::Backlog => "stage-btn backlog",
        Stage::Active => "stage-btn active",
        Stage::Done => "stage-btn done",
    }
}

#[component]
pub fn TaskCard(row: TaskRow) -> impl IntoView {
    let store = use_event_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let stage = row.stage;
    let is_done = stage == Stage::Done;
    let task_id = row.id.clone();
    let edit_row = row.clone();

    let cycle_stage = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        dispatch(
            &store,
            Command::MoveTask {
                id: task_id.clone(),
                stage: stage.next(),
            },
        );
    };

    view! {
        <div
            class="task-card"
            dir="rtl"
            on:click=move |_| ctx.open(ActiveModal::EditTask(edit_row.clone()))
        >
            <button type="button" class=stage_class(stage) on:click=cycle_stage>
                {stage_icon(stage)}
            </button>
            <div class="task-body">
                <p class="task-name" class:done=is_done>
                    {row.name.clone()}
                </p>
                <div class="task-meta">
                    <span class="task-category">
                        {format!("{} {}", row.category_emoji, row.category_name)}
                    </span>
                    {row
                        .assignee
                        .clone()
                        .map(|assignee| {
                            view! { <span class="task-assignee">{format!("• {}", assignee)}</span> }
                        })}
                </div>
            </div>
            <span class="task-chevron">"›"</span>
        </div>
    }
}
