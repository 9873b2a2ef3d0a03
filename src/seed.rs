//! Seed Data
//!
//! The board starts from a fixed snapshot; there is no persistence layer
//! behind it. Ids here are stable so the fixtures can be referenced.

use chrono::{TimeZone, Utc};

use crate::models::{Category, Person, Settings, Stage, Task, Update, UpdateKind};
use crate::store::EventState;

fn person(id: &str, name: &str, emoji: &str) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        short_name: name.to_string(),
        emoji: emoji.to_string(),
        is_live: false,
        live_task_id: None,
        created_at: Utc::now(),
    }
}

fn category(id: &str, name: &str, emoji: &str, order: i32) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        emoji: emoji.to_string(),
        order,
    }
}

fn task(id: &str, category_id: &str, name: &str, stage: Stage, assigned_to: Option<&str>) -> Task {
    Task {
        id: id.to_string(),
        category_id: category_id.to_string(),
        name: name.to_string(),
        stage,
        assigned_to: assigned_to.map(str::to_string),
        created_at: Utc::now(),
        stuck_since: None,
    }
}

fn update(id: &str, person_id: &str, message: &str, kind: UpdateKind, task_id: &str) -> Update {
    Update {
        id: id.to_string(),
        person_id: person_id.to_string(),
        message: message.to_string(),
        kind,
        task_id: Some(task_id.to_string()),
        created_at: Utc::now(),
    }
}

impl EventState {
    /// Initial board contents: the chasene preparations as they stand.
    pub fn seed() -> Self {
        let settings = Settings {
            id: "settings-1".to_string(),
            event_name: "חתונת יואל ועדן".to_string(),
            event_date: Utc.with_ymd_and_hms(2026, 1, 7, 18, 0, 0).unwrap(),
            location: "Eden Hall".to_string(),
            groom_name: "יואל".to_string(),
            bride_name: "עדן".to_string(),
        };

        let people = vec![
            person("person-1", "חתן", "🤵"),
            person("person-2", "כלה", "👰"),
            person("person-3", "שווער", "👨‍👦"),
            person("person-4", "שוויגער", "👩‍👦"),
            person("person-5", "מחותן", "🤝"),
        ];

        let categories = vec![
            category("cat-1", "Invitations", "💌", 1),
            category("cat-2", "Venue", "🏛️", 2),
            category("cat-3", "Music", "🎵", 3),
            category("cat-4", "Flowers", "💐", 4),
            category("cat-5", "Attire", "👗", 5),
            category("cat-6", "Bentschers", "📖", 6),
            category("cat-7", "Catering", "🍽️", 7),
            category("cat-8", "Photography", "📸", 8),
        ];

        let tasks = vec![
            task("task-1", "cat-1", "דיזיין הזמנות", Stage::Done, Some("person-2")),
            task("task-2", "cat-1", "דרוקן הזמנות", Stage::Done, Some("person-3")),
            task("task-3", "cat-1", "שיקן הזמנות", Stage::Active, Some("person-4")),
            task("task-4", "cat-2", "באַשטעטיקן זאַל", Stage::Done, Some("person-3")),
            task("task-5", "cat-2", "פלאַן טיש סידור", Stage::Active, Some("person-5")),
            task("task-6", "cat-2", "דעקאָראַציעס", Stage::Backlog, None),
            task("task-7", "cat-3", "באַשטעלן באַנד", Stage::Done, Some("person-1")),
            task("task-8", "cat-3", "זינגער פֿאַר חופה", Stage::Active, Some("person-1")),
            task("task-9", "cat-3", "ליד ליסטע", Stage::Active, None),
            task("task-10", "cat-4", "בלומען פֿאַר חופה", Stage::Active, Some("person-2")),
            task("task-11", "cat-4", "טיש בלומען", Stage::Backlog, None),
            task("task-12", "cat-5", "כלה קלייד", Stage::Done, Some("person-2")),
            task("task-13", "cat-5", "חתן בגדים", Stage::Active, Some("person-1")),
            task("task-14", "cat-6", "דיזיין בענטשער", Stage::Done, Some("person-2")),
            task("task-15", "cat-6", "דרוקן בענטשערס", Stage::Backlog, None),
        ];

        let updates = vec![
            update("update-1", "person-2", "הזמנות זענען פארטיק!", UpdateKind::Completed, "task-1"),
            update("update-2", "person-3", "זאַל איז באַשטעטיקט", UpdateKind::Milestone, "task-4"),
        ];

        Self {
            settings,
            people,
            categories,
            tasks,
            updates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derived;

    #[test]
    fn test_seed_collection_sizes() {
        let state = EventState::seed();
        assert_eq!(state.settings.id, "settings-1");
        assert_eq!(state.people.len(), 5);
        assert_eq!(state.categories.len(), 8);
        assert_eq!(state.tasks.len(), 15);
        assert_eq!(state.updates.len(), 2);
    }

    #[test]
    fn test_seed_stage_distribution() {
        let state = EventState::seed();
        let partition = derived::partition_by_stage(&state.tasks);
        assert_eq!(partition.done.len(), 6);
        assert_eq!(partition.active.len(), 6);
        assert_eq!(partition.backlog.len(), 3);

        // 6 of 15 done rounds to 40%
        assert_eq!(derived::progress(&state.tasks).percentage, 40);
    }

    #[test]
    fn test_seed_references_resolve() {
        let state = EventState::seed();
        for task in &state.tasks {
            assert!(derived::category_by_id(&state.categories, &task.category_id).is_some());
            if let Some(person_id) = &task.assigned_to {
                assert!(derived::person_by_id(&state.people, person_id).is_some());
            }
        }
        for update in &state.updates {
            assert!(derived::person_by_id(&state.people, &update.person_id).is_some());
        }
    }
}
