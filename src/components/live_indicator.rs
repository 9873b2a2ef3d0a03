//! Live Indicator Component
//!
//! Pulsing "LIVE" badge with three bouncing dots.

use leptos::prelude::*;

#[component]
pub fn LiveIndicator() -> impl IntoView {
    view! {
        <div class="live-indicator" dir="ltr">
            <span class="live-label">"🔴 LIVE"</span>
            <span class="live-dot d1"></span>
            <span class="live-dot d2"></span>
            <span class="live-dot d3"></span>
        </div>
    }
}
