//! Domain Models
//!
//! Entities held by the event store, plus the patch structs used for
//! partial updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle position of a task on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Backlog,
    Active,
    Done,
}

impl Stage {
    /// Tab / button label for this stage
    pub fn label(self) -> &'static str {
        match self {
            Stage::Backlog => "To Do",
            Stage::Active => "In Progress",
            Stage::Done => "Done",
        }
    }

    /// Next stage in the tap-to-advance cycle (wraps around)
    pub fn next(self) -> Self {
        match self {
            Stage::Backlog => Stage::Active,
            Stage::Active => Stage::Done,
            Stage::Done => Stage::Backlog,
        }
    }
}

/// Kind of feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateKind {
    Update,
    Completed,
    Milestone,
}

/// Event settings singleton
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub id: String,
    pub event_name: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub groom_name: String,
    pub bride_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            id: String::new(),
            event_name: String::new(),
            event_date: DateTime::UNIX_EPOCH,
            location: String::new(),
            groom_name: String::new(),
            bride_name: String::new(),
        }
    }
}

/// Family member / helper who posts updates and owns tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub emoji: String,
    pub is_live: bool,
    #[serde(default)]
    pub live_task_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Task grouping with a display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub order: i32,
}

/// A unit of work on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub stage: Stage,
    #[serde(default)]
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub stuck_since: Option<DateTime<Utc>>,
}

/// A feed entry posted by a person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub id: String,
    pub person_id: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: UpdateKind,
    #[serde(default)]
    pub task_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ========================
// Patches
// ========================
//
// `None` leaves a field untouched. Optional entity fields use a double
// option: `Some(None)` clears, `Some(Some(v))` sets.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch {
    pub event_name: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub groom_name: Option<String>,
    pub bride_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonPatch {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub emoji: Option<String>,
    pub is_live: Option<bool>,
    pub live_task_id: Option<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub emoji: Option<String>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub category_id: Option<String>,
    pub stage: Option<Stage>,
    pub assigned_to: Option<Option<String>>,
    pub stuck_since: Option<Option<DateTime<Utc>>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePatch {
    pub person_id: Option<String>,
    pub message: Option<String>,
    pub kind: Option<UpdateKind>,
    pub task_id: Option<Option<String>>,
}

impl Settings {
    pub fn merge(&mut self, patch: SettingsPatch) {
        if let Some(event_name) = patch.event_name {
            self.event_name = event_name;
        }
        if let Some(event_date) = patch.event_date {
            self.event_date = event_date;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(groom_name) = patch.groom_name {
            self.groom_name = groom_name;
        }
        if let Some(bride_name) = patch.bride_name {
            self.bride_name = bride_name;
        }
    }
}

impl Person {
    pub fn merge(&mut self, patch: PersonPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(short_name) = patch.short_name {
            self.short_name = short_name;
        }
        if let Some(emoji) = patch.emoji {
            self.emoji = emoji;
        }
        if let Some(is_live) = patch.is_live {
            self.is_live = is_live;
        }
        if let Some(live_task_id) = patch.live_task_id {
            self.live_task_id = live_task_id;
        }
    }
}

impl Category {
    pub fn merge(&mut self, patch: CategoryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(emoji) = patch.emoji {
            self.emoji = emoji;
        }
        if let Some(order) = patch.order {
            self.order = order;
        }
    }
}

impl Task {
    pub fn merge(&mut self, patch: TaskPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id;
        }
        if let Some(stage) = patch.stage {
            self.stage = stage;
        }
        if let Some(assigned_to) = patch.assigned_to {
            self.assigned_to = assigned_to;
        }
        if let Some(stuck_since) = patch.stuck_since {
            self.stuck_since = stuck_since;
        }
    }
}

impl Update {
    pub fn merge(&mut self, patch: UpdatePatch) {
        if let Some(person_id) = patch.person_id {
            self.person_id = person_id;
        }
        if let Some(message) = patch.message {
            self.message = message;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(task_id) = patch.task_id {
            self.task_id = task_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_wire_strings() {
        assert_eq!(serde_json::to_string(&Stage::Backlog).unwrap(), "\"backlog\"");
        assert_eq!(serde_json::to_string(&Stage::Active).unwrap(), "\"active\"");
        assert_eq!(serde_json::to_string(&Stage::Done).unwrap(), "\"done\"");
        assert_eq!(serde_json::from_str::<Stage>("\"active\"").unwrap(), Stage::Active);
    }

    #[test]
    fn test_update_kind_serializes_as_type() {
        let update = Update {
            id: "update-1".to_string(),
            person_id: "person-1".to_string(),
            message: "הזמנות זענען פארטיק!".to_string(),
            kind: UpdateKind::Milestone,
            task_id: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["type"], "milestone");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_stage_cycle_wraps() {
        assert_eq!(Stage::Backlog.next(), Stage::Active);
        assert_eq!(Stage::Active.next(), Stage::Done);
        assert_eq!(Stage::Done.next(), Stage::Backlog);
    }

    #[test]
    fn test_task_patch_double_option() {
        let mut task = Task {
            id: "task-1".to_string(),
            category_id: "cat-1".to_string(),
            name: "דיזיין הזמנות".to_string(),
            stage: Stage::Active,
            assigned_to: Some("person-2".to_string()),
            created_at: Utc::now(),
            stuck_since: None,
        };

        // None leaves the assignee alone
        task.merge(TaskPatch {
            name: Some("דרוקן הזמנות".to_string()),
            ..Default::default()
        });
        assert_eq!(task.assigned_to.as_deref(), Some("person-2"));

        // Some(None) clears it
        task.merge(TaskPatch {
            assigned_to: Some(None),
            ..Default::default()
        });
        assert_eq!(task.assigned_to, None);
    }
}
