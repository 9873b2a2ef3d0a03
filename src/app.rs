//! Chasene Board App
//!
//! Main application component: seeds the store, provides contexts and
//! lays out the dashboard sections.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    CategoryBadgeRow, CountdownTimer, EditTaskModal, EditUpdateModal, EventHeader,
    FinaleCelebration, GoLiveModal, InvitationCard, LiveFeed, NewPersonModal, NewTaskModal,
    NewUpdateModal, PeopleSection, ProductionLine, ProgressHeader,
};
use crate::context::{ActiveModal, AppContext};
use crate::derived;
use crate::store::{EventState, EventStateStoreFields, EventStore};

#[component]
pub fn App() -> impl IntoView {
    let store: EventStore = Store::new(EventState::seed());
    web_sys::console::log_1(&"[APP] Store seeded, mounting board".into());

    let (active_modal, set_active_modal) = signal::<Option<ActiveModal>>(None);
    let (show_finale, set_show_finale) = signal(false);
    let (finale_shown, set_finale_shown) = signal(false);

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new((active_modal, set_active_modal)));

    // Show the finale once, the first time everything is done
    Effect::new(move |_| {
        let percentage = derived::progress(&store.tasks().read()).percentage;
        if percentage >= 100 && !finale_shown.get_untracked() {
            web_sys::console::log_1(&"[APP] Every task done, running finale".into());
            set_show_finale.set(true);
            set_finale_shown.set(true);
        }
    });

    view! {
        <div class="app-shell" dir="rtl">
            // Sticky progress bar
            <ProgressHeader/>

            <Show when=move || show_finale.get()>
                <FinaleCelebration on_dismiss=move || set_show_finale.set(false)/>
            </Show>

            <div class="page-container">
                <EventHeader/>

                <CountdownTimer/>

                <section>
                    <div class="section-header">"הזמנה"</div>
                    <InvitationCard/>
                </section>

                <section>
                    <div class="section-header">"משפּחה"</div>
                    <PeopleSection/>
                </section>

                <section>
                    <div class="section-header">"Tasks"</div>
                    <CategoryBadgeRow/>
                    <div class="glass-card board-card">
                        <ProductionLine/>
                    </div>
                </section>

                <section class="feed-section">
                    <div class="section-header">"אַפּדעיטס"</div>
                    <LiveFeed/>
                </section>
            </div>

            // Modal routing
            {move || match active_modal.get() {
                Some(ActiveModal::NewTask) => view! { <NewTaskModal/> }.into_any(),
                Some(ActiveModal::NewPerson) => view! { <NewPersonModal/> }.into_any(),
                Some(ActiveModal::NewUpdate) => view! { <NewUpdateModal/> }.into_any(),
                Some(ActiveModal::EditTask(row)) => {
                    view! { <EditTaskModal row=row/> }.into_any()
                }
                Some(ActiveModal::EditUpdate(row)) => {
                    view! { <EditUpdateModal row=row/> }.into_any()
                }
                Some(ActiveModal::GoLive(person)) => {
                    view! { <GoLiveModal person=person/> }.into_any()
                }
                None => view! { <div></div> }.into_any(),
            }}
        </div>
    }
}
