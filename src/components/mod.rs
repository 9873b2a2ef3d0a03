//! UI Components
//!
//! Reusable Leptos components.

mod category_badge;
mod countdown_timer;
mod delete_confirm_button;
mod edit_task_modal;
mod edit_update_modal;
mod event_header;
mod finale_celebration;
mod go_live_modal;
mod invitation_card;
mod live_feed;
mod live_indicator;
mod modal;
mod new_person_modal;
mod new_task_modal;
mod new_update_modal;
mod people_section;
mod person_avatar;
mod production_line;
mod progress_header;
mod task_card;
mod update_item;

pub use category_badge::CategoryBadgeRow;
pub use countdown_timer::CountdownTimer;
pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_task_modal::EditTaskModal;
pub use edit_update_modal::EditUpdateModal;
pub use event_header::EventHeader;
pub use finale_celebration::FinaleCelebration;
pub use go_live_modal::GoLiveModal;
pub use invitation_card::InvitationCard;
pub use live_feed::LiveFeed;
pub use live_indicator::LiveIndicator;
pub use modal::Modal;
pub use new_person_modal::NewPersonModal;
pub use new_task_modal::NewTaskModal;
pub use new_update_modal::NewUpdateModal;
pub use people_section::PeopleSection;
pub use person_avatar::PersonAvatar;
pub use production_line::ProductionLine;
pub use progress_header::ProgressHeader;
pub use task_card::TaskCard;
pub use update_item::UpdateItem;
