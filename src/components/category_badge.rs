//! Category Badge Components
//!
//! Per-category progress pills, tiered by completion percentage.

use leptos::prelude::*;

use crate::derived;
use crate::models::Category;
use crate::store::{use_event_store, EventStateStoreFields};

/// Styling tier for a completion percentage
fn tier_class(percentage: u32) -> &'static str {
    if percentage >= 100 {
        "category-badge complete"
    } else if percentage >= 70 {
        "category-badge high"
    } else if percentage >= 40 {
        "category-badge mid"
    } else {
        "category-badge low"
    }
}

#[component]
pub fn CategoryBadge(category: Category) -> impl IntoView {
    let store = use_event_store();
    let category_id = category.id.clone();
    let percentage = Memo::new(move |_| {
        derived::category_progress(&store.tasks().read(), &category_id).percentage
    });

    view! {
        <div class=move || tier_class(percentage.get())>
            <span class="badge-emoji">{category.emoji}</span>
            <span class="badge-name">{category.name}</span>
            <span class="badge-percentage">{move || format!("{}%", percentage.get())}</span>
            <Show when=move || { percentage.get() >= 100 }>
                <span class="badge-spark">"✦"</span>
            </Show>
        </div>
    }
}

/// Scrolling strip of badges for every category
#[component]
pub fn CategoryBadgeRow() -> impl IntoView {
    let store = use_event_store();

    view! {
        <div class="category-badge-row" dir="ltr">
            <For
                each=move || store.categories().get()
                key=|category| category.id.clone()
                children=move |category| view! { <CategoryBadge category=category/> }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_class_boundaries() {
        assert_eq!(tier_class(100), "category-badge complete");
        assert_eq!(tier_class(99), "category-badge high");
        assert_eq!(tier_class(70), "category-badge high");
        assert_eq!(tier_class(69), "category-badge mid");
        assert_eq!(tier_class(40), "category-badge mid");
        assert_eq!(tier_class(39), "category-badge low");
        assert_eq!(tier_class(0), "category-badge low");
    }
}
