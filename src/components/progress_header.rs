//! Progress Header Component
//!
//! Sticky bar with stage counts and a segmented completion bar.

use leptos::prelude::*;

use crate::derived;
use crate::store::{use_event_store, EventStateStoreFields};

#[component]
pub fn ProgressHeader() -> impl IntoView {
    let store = use_event_store();
    let summary = Memo::new(move |_| derived::progress(&store.tasks().read()));

    let to_do = move || {
        let s = summary.get();
        s.total - s.done - s.in_progress
    };
    let done_width = move || {
        let s = summary.get();
        if s.total == 0 {
            0.0
        } else {
            s.done as f64 / s.total as f64 * 100.0
        }
    };
    let active_width = move || {
        let s = summary.get();
        if s.total == 0 {
            0.0
        } else {
            s.in_progress as f64 / s.total as f64 * 100.0
        }
    };

    view! {
        <div class="progress-header">
            <div class="progress-header-inner" dir="ltr">
                <div class="progress-stats">
                    <div class="stat">
                        <span class="stat-value">{to_do}</span>
                        <span class="stat-label">"To Do"</span>
                    </div>
                    <div class="stat">
                        <span class="stat-value active">{move || summary.get().in_progress}</span>
                        <span class="stat-label">"In Progress"</span>
                    </div>
                    <div class="stat">
                        <span class="stat-value done">{move || summary.get().done}</span>
                        <span class="stat-label">"Done"</span>
                    </div>
                    <div class="progress-summary">
                        <span class="summary-text">
                            {move || {
                                let s = summary.get();
                                format!("{} of {} tasks done", s.done, s.total)
                            }}
                        </span>
                        <span class="summary-percentage">
                            {move || format!("{}%", summary.get().percentage)}
                        </span>
                    </div>
                </div>
                <div class="progress-track">
                    <div
                        class="progress-segment done"
                        style=move || format!("width: {}%", done_width())
                    ></div>
                    <div
                        class="progress-segment active"
                        style=move || format!("width: {}%", active_width())
                    ></div>
                </div>
            </div>
        </div>
    }
}
