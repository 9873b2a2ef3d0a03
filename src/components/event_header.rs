//! Event Header Component
//!
//! Monogram title block with the flourish line and the date and place.

use leptos::prelude::*;

#[component]
pub fn EventHeader() -> impl IntoView {
    view! {
        <header class="event-header" dir="rtl">
            <div class="monogram">"💍"</div>
            <h1 class="event-title">"חתונה בבית לאנדא"</h1>
            <div class="header-flourish">
                <span class="flourish-glyph">"❧"</span>
                <div class="flourish-line"></div>
                <span class="flourish-glyph">"☙"</span>
            </div>
            <p class="event-subtitle">"י״ח טבת • וויליאַמסבורג"</p>
        </header>
    }
}
