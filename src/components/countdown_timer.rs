//! Countdown Timer Component
//!
//! Ticks once a second toward the event date from settings.

use std::time::Duration;

use chrono::Utc;
use leptos::prelude::*;

use crate::derived;
use crate::store::{use_event_store, EventStateStoreFields};

/// One digit group of the countdown row
#[component]
fn TimeUnit(#[prop(into)] value: Signal<i64>, label: &'static str) -> impl IntoView {
    view! {
        <div class="time-unit">
            <div class="time-value">{move || format!("{:02}", value.get())}</div>
            <span class="time-label">{label}</span>
        </div>
    }
}

#[component]
pub fn CountdownTimer() -> impl IntoView {
    let store = use_event_store();
    let (now, set_now) = signal(Utc::now());

    // Re-read the clock every second; stop when the component unmounts
    if let Ok(handle) =
        set_interval_with_handle(move || set_now.set(Utc::now()), Duration::from_secs(1))
    {
        on_cleanup(move || handle.clear());
    }

    let time_left = Memo::new(move |_| {
        derived::time_remaining(store.settings().read().event_date, now.get())
    });

    view! {
        <div class="glass-card countdown" dir="rtl">
            <div class="countdown-row" dir="ltr">
                <TimeUnit value=Signal::derive(move || time_left.get().days) label="טעג"/>
                <span class="countdown-sep">":"</span>
                <TimeUnit value=Signal::derive(move || time_left.get().hours) label="שעות"/>
                <span class="countdown-sep">":"</span>
                <TimeUnit value=Signal::derive(move || time_left.get().minutes) label="מינוט"/>
                <span class="countdown-sep">":"</span>
                <TimeUnit value=Signal::derive(move || time_left.get().seconds) label="סעק׳"/>
            </div>
            <p class="countdown-subtitle">"ביז חופה וקידושין"</p>
            <Show when=move || time_left.get().is_urgent()>
                <div class="urgency-row">
                    <span class="urgency-badge">"⚡ פחות מ-3 ימים!"</span>
                </div>
            </Show>
        </div>
    }
}
