//! Application Context
//!
//! UI-only signals provided via the Leptos Context API. Domain state lives
//! in the event store, never here.

use leptos::prelude::*;

use crate::derived::{FeedRow, TaskRow};
use crate::models::Person;

/// Which modal is currently open, with its subject where one exists
#[derive(Clone, Debug, PartialEq)]
pub enum ActiveModal {
    NewTask,
    NewPerson,
    NewUpdate,
    EditTask(TaskRow),
    EditUpdate(FeedRow),
    GoLive(Person),
}

/// App-wide UI signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently open modal - read
    pub active_modal: ReadSignal<Option<ActiveModal>>,
    /// Currently open modal - write
    set_active_modal: WriteSignal<Option<ActiveModal>>,
}

impl AppContext {
    pub fn new(
        active_modal: (ReadSignal<Option<ActiveModal>>, WriteSignal<Option<ActiveModal>>),
    ) -> Self {
        Self {
            active_modal: active_modal.0,
            set_active_modal: active_modal.1,
        }
    }

    /// Open a modal, replacing whichever one is showing
    pub fn open(&self, modal: ActiveModal) {
        self.set_active_modal.set(Some(modal));
    }

    /// Close the open modal
    pub fn close(&self) {
        self.set_active_modal.set(None);
    }
}
