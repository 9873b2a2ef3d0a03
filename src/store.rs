//! Event Board State Store
//!
//! Single source of truth for the board. `EventState` is plain data with a
//! synchronous command interface; the Leptos reactive wrapper lives at the
//! bottom of this module.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{
    Category, CategoryPatch, Person, PersonPatch, Settings, SettingsPatch, Stage, Task, TaskPatch,
    Update, UpdatePatch,
};

/// The five collections that make up the board
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct EventState {
    /// Event settings singleton
    pub settings: Settings,
    /// Family / helpers, insertion order
    pub people: Vec<Person>,
    /// Task groupings, insertion order
    pub categories: Vec<Category>,
    /// Board tasks, insertion order
    pub tasks: Vec<Task>,
    /// Feed entries, newest first
    pub updates: Vec<Update>,
}

/// The closed command set accepted by the store.
///
/// Every command is total: a missing id is a silent no-op, never an error.
/// Callers construct complete entities (ids included) before dispatching.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    SetSettings(Settings),
    UpdateSettings(SettingsPatch),
    AddPerson(Person),
    UpdatePerson { id: String, patch: PersonPatch },
    DeletePerson { id: String },
    AddCategory(Category),
    UpdateCategory { id: String, patch: CategoryPatch },
    DeleteCategory { id: String },
    AddTask(Task),
    UpdateTask { id: String, patch: TaskPatch },
    DeleteTask { id: String },
    MoveTask { id: String, stage: Stage },
    AddUpdate(Update),
    UpdateUpdate { id: String, patch: UpdatePatch },
    DeleteUpdate { id: String },
}

impl Command {
    /// Short name for console breadcrumbs
    pub fn name(&self) -> &'static str {
        match self {
            Command::SetSettings(_) => "SetSettings",
            Command::UpdateSettings(_) => "UpdateSettings",
            Command::AddPerson(_) => "AddPerson",
            Command::UpdatePerson { .. } => "UpdatePerson",
            Command::DeletePerson { .. } => "DeletePerson",
            Command::AddCategory(_) => "AddCategory",
            Command::UpdateCategory { .. } => "UpdateCategory",
            Command::DeleteCategory { .. } => "DeleteCategory",
            Command::AddTask(_) => "AddTask",
            Command::UpdateTask { .. } => "UpdateTask",
            Command::DeleteTask { .. } => "DeleteTask",
            Command::MoveTask { .. } => "MoveTask",
            Command::AddUpdate(_) => "AddUpdate",
            Command::UpdateUpdate { .. } => "UpdateUpdate",
            Command::DeleteUpdate { .. } => "DeleteUpdate",
        }
    }
}

impl EventState {
    /// Apply one command. Synchronous, infallible, no side effects beyond
    /// the in-memory mutation; composition is the caller's concern.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SetSettings(settings) => self.settings = settings,
            Command::UpdateSettings(patch) => self.settings.merge(patch),

            Command::AddPerson(person) => self.people.push(person),
            Command::UpdatePerson { id, patch } => {
                if let Some(person) = self.people.iter_mut().find(|p| p.id == id) {
                    person.merge(patch);
                }
            }
            Command::DeletePerson { id } => self.people.retain(|p| p.id != id),

            Command::AddCategory(category) => self.categories.push(category),
            Command::UpdateCategory { id, patch } => {
                if let Some(category) = self.categories.iter_mut().find(|c| c.id == id) {
                    category.merge(patch);
                }
            }
            Command::DeleteCategory { id } => self.categories.retain(|c| c.id != id),

            Command::AddTask(task) => self.tasks.push(task),
            Command::UpdateTask { id, patch } => {
                if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                    task.merge(patch);
                }
            }
            Command::DeleteTask { id } => self.tasks.retain(|t| t.id != id),
            Command::MoveTask { id, stage } => {
                // Any stage is reachable from any stage; the board supports
                // manual correction.
                if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                    task.stage = stage;
                }
            }

            // Feed shows newest first
            Command::AddUpdate(update) => self.updates.insert(0, update),
            Command::UpdateUpdate { id, patch } => {
                if let Some(update) = self.updates.iter_mut().find(|u| u.id == id) {
                    update.merge(patch);
                }
            }
            Command::DeleteUpdate { id } => self.updates.retain(|u| u.id != id),
        }
    }
}

// ========================
// Reactive wrapper
// ========================

/// Type alias for the store
pub type EventStore = Store<EventState>;

/// Get the event store from context
pub fn use_event_store() -> EventStore {
    expect_context::<EventStore>()
}

/// Apply a command to the store as one atomic write.
pub fn dispatch(store: &EventStore, command: Command) {
    web_sys::console::log_1(&format!("[STORE] apply {}", command.name()).into());
    store.write().apply(command);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_person(id: &str, name: &str) -> Person {
        Person {
            id: id.to_string(),
            name: name.to_string(),
            short_name: name.to_string(),
            emoji: "👤".to_string(),
            is_live: false,
            live_task_id: None,
            created_at: Utc::now(),
        }
    }

    fn make_task(id: &str, category_id: &str, stage: Stage) -> Task {
        Task {
            id: id.to_string(),
            category_id: category_id.to_string(),
            name: format!("Task {}", id),
            stage,
            assigned_to: None,
            created_at: Utc::now(),
            stuck_since: None,
        }
    }

    fn make_update(id: &str, person_id: &str, message: &str) -> Update {
        Update {
            id: id.to_string(),
            person_id: person_id.to_string(),
            message: message.to_string(),
            kind: crate::models::UpdateKind::Update,
            task_id: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_set_settings_replaces_whole_record() {
        let mut state = EventState::seed();
        let replacement = Settings {
            id: "settings-2".to_string(),
            event_name: "חתונה".to_string(),
            event_date: Utc::now(),
            location: "Brooklyn".to_string(),
            groom_name: "אליהו".to_string(),
            bride_name: "שיינדל".to_string(),
        };
        state.apply(Command::SetSettings(replacement.clone()));
        assert_eq!(state.settings, replacement);
    }

    #[test]
    fn test_update_settings_merges_partial_fields() {
        let mut state = EventState::seed();
        let before = state.settings.clone();
        state.apply(Command::UpdateSettings(SettingsPatch {
            location: Some("Atere Avrohom".to_string()),
            ..Default::default()
        }));
        assert_eq!(state.settings.location, "Atere Avrohom");
        assert_eq!(state.settings.event_name, before.event_name);
        assert_eq!(state.settings.event_date, before.event_date);
    }

    #[test]
    fn test_add_update_prepends() {
        let mut state = EventState::seed();
        state.apply(Command::AddUpdate(make_update("update-3", "person-1", "ערשטער")));
        state.apply(Command::AddUpdate(make_update("update-4", "person-1", "צווייטער")));
        assert_eq!(state.updates[0].id, "update-4");
        assert_eq!(state.updates[1].id, "update-3");
        assert_eq!(state.updates.last().unwrap().id, "update-2");
    }

    #[test]
    fn test_update_count_tracks_adds_and_deletes() {
        let mut state = EventState::seed();
        let initial = state.updates.len();
        state.apply(Command::AddUpdate(make_update("update-a", "person-1", "a")));
        state.apply(Command::AddUpdate(make_update("update-b", "person-2", "b")));
        state.apply(Command::AddUpdate(make_update("update-c", "person-3", "c")));
        state.apply(Command::DeleteUpdate { id: "update-b".to_string() });
        assert_eq!(state.updates.len(), initial + 3 - 1);
    }

    #[test]
    fn test_mixed_command_run_keeps_counts_and_bounds() {
        // long deterministic walk over the command set: the update ledger
        // and the percentage bound must hold after every single step
        let mut state = EventState::seed();
        let mut expected_updates = state.updates.len();
        let stages = [Stage::Backlog, Stage::Active, Stage::Done];
        for i in 0..500usize {
            match i % 5 {
                0 => {
                    state.apply(Command::AddUpdate(make_update(
                        &format!("update-run-{}", i),
                        "person-1",
                        "נאך אַ טריט",
                    )));
                    expected_updates += 1;
                }
                1 => {
                    state.apply(Command::MoveTask {
                        id: format!("task-{}", (i / 5) % 15 + 1),
                        stage: stages[i % 3],
                    });
                }
                2 => {
                    // removes the entry added two steps earlier
                    state.apply(Command::DeleteUpdate { id: format!("update-run-{}", i - 2) });
                    expected_updates -= 1;
                }
                3 => {
                    state.apply(Command::UpdateTask {
                        id: "task-nonexistent".to_string(),
                        patch: TaskPatch {
                            name: Some("וואו?".to_string()),
                            ..Default::default()
                        },
                    });
                }
                _ => {
                    state.apply(Command::DeleteUpdate { id: "update-nonexistent".to_string() });
                }
            }
            let summary = crate::derived::progress(&state.tasks);
            assert!(summary.percentage <= 100);
            assert_eq!(summary.total, state.tasks.len());
            assert_eq!(state.updates.len(), expected_updates);
        }
        // every entry added during the run was removed again
        assert_eq!(state.updates.len(), 2);
    }

    #[test]
    fn test_move_task_allows_any_transition() {
        let mut state = EventState::default();
        state.apply(Command::AddTask(make_task("task-x", "cat-1", Stage::Done)));
        for &stage in &[Stage::Backlog, Stage::Done, Stage::Active, Stage::Backlog] {
            state.apply(Command::MoveTask { id: "task-x".to_string(), stage });
            assert_eq!(state.tasks[0].stage, stage);
        }
    }

    #[test]
    fn test_move_task_seed_scenario() {
        let mut state = EventState::seed();
        state.apply(Command::MoveTask { id: "task-6".to_string(), stage: Stage::Active });

        let task = state.tasks.iter().find(|t| t.id == "task-6").unwrap();
        assert_eq!(task.stage, Stage::Active);

        let active = state.tasks.iter().filter(|t| t.stage == Stage::Active).count();
        let backlog = state.tasks.iter().filter(|t| t.stage == Stage::Backlog).count();
        let done = state.tasks.iter().filter(|t| t.stage == Stage::Done).count();
        assert_eq!(active, 7);
        assert_eq!(backlog, 2);
        assert_eq!(done, 6);
        assert_eq!(crate::derived::progress(&state.tasks).percentage, 40);
    }

    #[test]
    fn test_update_with_missing_id_is_noop() {
        let mut state = EventState::seed();
        let before = state.clone();
        state.apply(Command::UpdatePerson {
            id: "person-999".to_string(),
            patch: PersonPatch { is_live: Some(true), ..Default::default() },
        });
        state.apply(Command::UpdateTask {
            id: "task-999".to_string(),
            patch: TaskPatch { stage: Some(Stage::Done), ..Default::default() },
        });
        state.apply(Command::UpdateCategory {
            id: "cat-999".to_string(),
            patch: CategoryPatch { name: Some("גארנישט".to_string()), ..Default::default() },
        });
        state.apply(Command::UpdateUpdate {
            id: "update-999".to_string(),
            patch: UpdatePatch { message: Some("גארנישט".to_string()), ..Default::default() },
        });
        state.apply(Command::MoveTask { id: "task-999".to_string(), stage: Stage::Done });
        assert_eq!(state, before);
    }

    #[test]
    fn test_double_delete_is_noop() {
        let mut state = EventState::seed();
        let initial = state.tasks.len();
        state.apply(Command::DeleteTask { id: "task-1".to_string() });
        state.apply(Command::DeleteTask { id: "task-1".to_string() });
        assert_eq!(state.tasks.len(), initial - 1);
        assert!(state.tasks.iter().all(|t| t.id != "task-1"));
    }

    #[test]
    fn test_delete_person_keeps_references_dangling() {
        let mut state = EventState::seed();
        // task-1 is assigned to person-2, update-1 authored by person-2
        state.apply(Command::DeletePerson { id: "person-2".to_string() });
        let task = state.tasks.iter().find(|t| t.id == "task-1").unwrap();
        assert_eq!(task.assigned_to.as_deref(), Some("person-2"));
        let update = state.updates.iter().find(|u| u.id == "update-1").unwrap();
        assert_eq!(update.person_id, "person-2");
    }

    #[test]
    fn test_go_live_and_stop_live_patches() {
        let mut state = EventState::default();
        state.apply(Command::AddPerson(make_person("person-a", "חתן")));
        state.apply(Command::UpdatePerson {
            id: "person-a".to_string(),
            patch: PersonPatch {
                is_live: Some(true),
                live_task_id: Some(Some("task-8".to_string())),
                ..Default::default()
            },
        });
        assert!(state.people[0].is_live);
        assert_eq!(state.people[0].live_task_id.as_deref(), Some("task-8"));

        state.apply(Command::UpdatePerson {
            id: "person-a".to_string(),
            patch: PersonPatch {
                is_live: Some(false),
                live_task_id: Some(None),
                ..Default::default()
            },
        });
        assert!(!state.people[0].is_live);
        assert_eq!(state.people[0].live_task_id, None);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut state = EventState::default();
        state.apply(Command::AddCategory(Category {
            id: "cat-a".to_string(),
            name: "Invitations".to_string(),
            emoji: "💌".to_string(),
            order: 1,
        }));
        state.apply(Command::AddCategory(Category {
            id: "cat-b".to_string(),
            name: "Venue".to_string(),
            emoji: "🏛️".to_string(),
            order: 1,
        }));
        state.apply(Command::AddPerson(make_person("person-a", "שווער")));
        state.apply(Command::AddPerson(make_person("person-b", "מחותן")));
        let category_ids: Vec<&str> = state.categories.iter().map(|c| c.id.as_str()).collect();
        let people_ids: Vec<&str> = state.people.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(category_ids, ["cat-a", "cat-b"]);
        assert_eq!(people_ids, ["person-a", "person-b"]);
    }
}
