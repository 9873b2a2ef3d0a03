//! Derived Views
//!
//! Pure read-side computations over the board state. Everything here is
//! recomputed from scratch on each call; the reactive closures in the
//! components decide when to re-run. Nothing in this module mutates state.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Category, Person, Stage, Task, UpdateKind};
use crate::store::EventState;

/// Shown when a task's category id no longer resolves
pub const FALLBACK_CATEGORY_NAME: &str = "אַנדערע";
pub const FALLBACK_CATEGORY_EMOJI: &str = "📌";
/// Shown when an update's author id no longer resolves
pub const FALLBACK_AUTHOR_NAME: &str = "אַנאָנים";

/// Task counts plus the rounded done-percentage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    pub total: usize,
    pub done: usize,
    pub in_progress: usize,
    pub percentage: u32,
}

/// Overall progress across a task slice. Percentage is
/// `round(done / total * 100)`, 0 for an empty slice.
pub fn progress(tasks: &[Task]) -> ProgressSummary {
    let total = tasks.len();
    let done = tasks.iter().filter(|t| t.stage == Stage::Done).count();
    let in_progress = tasks.iter().filter(|t| t.stage == Stage::Active).count();
    let percentage = if total > 0 {
        (done as f64 / total as f64 * 100.0).round() as u32
    } else {
        0
    };
    ProgressSummary {
        total,
        done,
        in_progress,
        percentage,
    }
}

/// Same computation scoped to one category's tasks
pub fn category_progress(tasks: &[Task], category_id: &str) -> ProgressSummary {
    let scoped: Vec<Task> = tasks
        .iter()
        .filter(|t| t.category_id == category_id)
        .cloned()
        .collect();
    progress(&scoped)
}

pub fn person_by_id<'a>(people: &'a [Person], id: &str) -> Option<&'a Person> {
    people.iter().find(|p| p.id == id)
}

pub fn category_by_id<'a>(categories: &'a [Category], id: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.id == id)
}

/// A task joined with its display context
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskRow {
    pub id: String,
    pub name: String,
    pub stage: Stage,
    pub category_id: String,
    pub category_name: String,
    pub category_emoji: String,
    pub assignee_id: Option<String>,
    pub assignee: Option<String>,
    pub category_percentage: u32,
}

/// Resolve every task against its category and assignee. Missing referents
/// degrade to the fallback labels, never to an error.
pub fn task_rows(state: &EventState) -> Vec<TaskRow> {
    state
        .tasks
        .iter()
        .map(|task| {
            let category = category_by_id(&state.categories, &task.category_id);
            let assignee = task
                .assigned_to
                .as_deref()
                .and_then(|id| person_by_id(&state.people, id));
            TaskRow {
                id: task.id.clone(),
                name: task.name.clone(),
                stage: task.stage,
                category_id: task.category_id.clone(),
                category_name: category
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| FALLBACK_CATEGORY_NAME.to_string()),
                category_emoji: category
                    .map(|c| c.emoji.clone())
                    .unwrap_or_else(|| FALLBACK_CATEGORY_EMOJI.to_string()),
                assignee_id: task.assigned_to.clone(),
                assignee: assignee.map(|p| p.short_name.clone()),
                category_percentage: category_progress(&state.tasks, &task.category_id).percentage,
            }
        })
        .collect()
}

/// An update joined with its author's display name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedRow {
    pub id: String,
    pub person_id: String,
    pub author: String,
    pub message: String,
    pub kind: UpdateKind,
    pub created_at: DateTime<Utc>,
}

/// Resolve feed authors; order is the collection's own (newest first).
pub fn feed_rows(state: &EventState) -> Vec<FeedRow> {
    state
        .updates
        .iter()
        .map(|update| FeedRow {
            id: update.id.clone(),
            person_id: update.person_id.clone(),
            author: person_by_id(&state.people, &update.person_id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| FALLBACK_AUTHOR_NAME.to_string()),
            message: update.message.clone(),
            kind: update.kind,
            created_at: update.created_at,
        })
        .collect()
}

/// Tasks split into the three stage buckets, relative order preserved
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StagePartition {
    pub backlog: Vec<Task>,
    pub active: Vec<Task>,
    pub done: Vec<Task>,
}

pub fn partition_by_stage(tasks: &[Task]) -> StagePartition {
    let mut partition = StagePartition::default();
    for task in tasks {
        match task.stage {
            Stage::Backlog => partition.backlog.push(task.clone()),
            Stage::Active => partition.active.push(task.clone()),
            Stage::Done => partition.done.push(task.clone()),
        }
    }
    partition
}

/// One person's slice of the board, for the avatar strip
#[derive(Debug, Clone, PartialEq)]
pub struct PersonSummary {
    pub person: Person,
    pub assigned: usize,
    pub done: usize,
    pub live_task_name: Option<String>,
}

pub fn person_summaries(state: &EventState) -> Vec<PersonSummary> {
    state
        .people
        .iter()
        .map(|person| {
            let assigned: Vec<&Task> = state
                .tasks
                .iter()
                .filter(|t| t.assigned_to.as_deref() == Some(person.id.as_str()))
                .collect();
            let done = assigned.iter().filter(|t| t.stage == Stage::Done).count();
            // A dangling live-task id just means no task name to show
            let live_task_name = person
                .live_task_id
                .as_deref()
                .and_then(|id| state.tasks.iter().find(|t| t.id == id))
                .map(|t| t.name.clone());
            PersonSummary {
                person: person.clone(),
                assigned: assigned.len(),
                done,
                live_task_name,
            }
        })
        .collect()
}

// ========================
// Time
// ========================

/// Countdown display values, clamped to zero at the event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// Under 72 hours to go
    pub fn is_urgent(&self) -> bool {
        self.days * 24 + self.hours < 72
    }
}

/// Time remaining until `event_date`, all zeros at or past it.
pub fn time_remaining(event_date: DateTime<Utc>, now: DateTime<Utc>) -> TimeLeft {
    let diff = event_date - now;
    if diff <= Duration::zero() {
        return TimeLeft::default();
    }
    TimeLeft {
        days: diff.num_days(),
        hours: diff.num_hours() % 24,
        minutes: diff.num_minutes() % 60,
        seconds: diff.num_seconds() % 60,
    }
}

/// Relative-time label for feed timestamps
pub fn relative_time(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - created_at).num_seconds().max(0);
    if seconds < 60 {
        return format!("{} סעק צוריק", seconds);
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{} מינוט צוריק", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{} שעה צוריק", hours);
    }
    format!("{} טעג צוריק", hours / 24)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_task(id: &str, category_id: &str, stage: Stage, assigned_to: Option<&str>) -> Task {
        Task {
            id: id.to_string(),
            category_id: category_id.to_string(),
            name: format!("Task {}", id),
            stage,
            assigned_to: assigned_to.map(str::to_string),
            created_at: Utc::now(),
            stuck_since: None,
        }
    }

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

    fn make_state(tasks: Vec<Task>, people: Vec<Person>, categories: Vec<Category>) -> EventState {
        EventState {
            tasks,
            people,
            categories,
            ..Default::default()
        }
    }

    #[test]
    fn test_progress_rounds_to_nearest() {
        let tasks = vec![
            make_task("t1", "c1", Stage::Done, None),
            make_task("t2", "c1", Stage::Active, None),
            make_task("t3", "c1", Stage::Backlog, None),
        ];
        // 1/3 -> 33, 2/3 -> 67
        assert_eq!(progress(&tasks).percentage, 33);
        let tasks2 = vec![
            make_task("t1", "c1", Stage::Done, None),
            make_task("t2", "c1", Stage::Done, None),
            make_task("t3", "c1", Stage::Backlog, None),
        ];
        assert_eq!(progress(&tasks2).percentage, 67);
    }

    #[test]
    fn test_progress_empty_collection_is_zero() {
        let summary = progress(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.percentage, 0);
    }

    #[test]
    fn test_queries_are_total_on_empty_state() {
        let state = EventState::default();
        assert_eq!(progress(&state.tasks).percentage, 0);
        assert!(task_rows(&state).is_empty());
        assert!(feed_rows(&state).is_empty());
        assert!(person_summaries(&state).is_empty());
        let partition = partition_by_stage(&state.tasks);
        assert!(partition.backlog.is_empty());
        assert!(partition.active.is_empty());
        assert!(partition.done.is_empty());
    }

    #[test]
    fn test_progress_stays_in_bounds() {
        let all_done: Vec<Task> = (0..7)
            .map(|i| make_task(&format!("t{}", i), "c1", Stage::Done, None))
            .collect();
        assert_eq!(progress(&all_done).percentage, 100);
        let none_done: Vec<Task> = (0..7)
            .map(|i| make_task(&format!("t{}", i), "c1", Stage::Backlog, None))
            .collect();
        assert_eq!(progress(&none_done).percentage, 0);
    }

    #[test]
    fn test_category_progress_is_scoped() {
        let tasks = vec![
            make_task("t1", "c1", Stage::Done, None),
            make_task("t2", "c1", Stage::Backlog, None),
            make_task("t3", "c2", Stage::Backlog, None),
            make_task("t4", "c2", Stage::Backlog, None),
        ];
        assert_eq!(category_progress(&tasks, "c1").percentage, 50);
        assert_eq!(category_progress(&tasks, "c2").percentage, 0);
        assert_eq!(category_progress(&tasks, "c-missing").total, 0);
    }

    #[test]
    fn test_category_progress_sums_to_overall() {
        // seed categories partition all tasks, so the per-category
        // counts must add up to the overall ones
        let state = EventState::seed();
        let overall = progress(&state.tasks);
        let (total, done) = state
            .categories
            .iter()
            .map(|category| category_progress(&state.tasks, &category.id))
            .fold((0, 0), |acc, s| (acc.0 + s.total, acc.1 + s.done));
        assert_eq!(total, overall.total);
        assert_eq!(done, overall.done);
    }

    #[test]
    fn test_partition_matches_progress_counts() {
        let state = EventState::seed();
        let partition = partition_by_stage(&state.tasks);
        let summary = progress(&state.tasks);
        assert_eq!(partition.done.len(), summary.done);
        assert_eq!(partition.active.len(), summary.in_progress);
        assert_eq!(
            partition.backlog.len() + partition.active.len() + partition.done.len(),
            summary.total
        );
        // relative order inside a bucket follows insertion order
        let backlog_ids: Vec<&str> = partition.backlog.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(backlog_ids, ["task-6", "task-11", "task-15"]);
    }

    #[test]
    fn test_task_rows_fall_back_on_missing_referents() {
        let state = make_state(
            vec![make_task("t1", "c-gone", Stage::Active, Some("p-gone"))],
            vec![],
            vec![],
        );
        let rows = task_rows(&state);
        assert_eq!(rows[0].category_name, FALLBACK_CATEGORY_NAME);
        assert_eq!(rows[0].category_emoji, FALLBACK_CATEGORY_EMOJI);
        assert_eq!(rows[0].assignee, None);
    }

    #[test]
    fn test_task_rows_resolve_known_referents() {
        let state = EventState::seed();
        let rows = task_rows(&state);
        let row = rows.iter().find(|r| r.id == "task-1").unwrap();
        assert_eq!(row.category_name, "Invitations");
        assert_eq!(row.category_emoji, "💌");
        assert_eq!(row.assignee.as_deref(), Some("כלה"));
        // cat-1: 2 of 3 done
        assert_eq!(row.category_percentage, 67);
    }

    #[test]
    fn test_resolvers_tolerate_missing_ids() {
        // the edit form seeds its selects through these, so a dangling
        // reference must come back as "no selection", not a panic
        let state = EventState::seed();
        assert!(person_by_id(&state.people, "person-2").is_some());
        assert!(person_by_id(&state.people, "person-404").is_none());
        assert!(category_by_id(&state.categories, "cat-1").is_some());
        assert!(category_by_id(&state.categories, "cat-404").is_none());
    }

    #[test]
    fn test_feed_rows_anonymous_fallback() {
        let mut state = EventState::seed();
        state.people.retain(|p| p.id != "person-2");
        let rows = feed_rows(&state);
        let row = rows.iter().find(|r| r.id == "update-1").unwrap();
        assert_eq!(row.author, FALLBACK_AUTHOR_NAME);
        // the rest of the entry passes through untouched
        assert_eq!(row.message, "הזמנות זענען פארטיק!");
        assert_eq!(row.kind, UpdateKind::Completed);
    }

    #[test]
    fn test_feed_rows_keep_store_order() {
        let state = EventState::seed();
        let rows = feed_rows(&state);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["update-1", "update-2"]);
    }

    #[test]
    fn test_person_summaries_counts() {
        let state = EventState::seed();
        let summaries = person_summaries(&state);
        let kale = summaries.iter().find(|s| s.person.id == "person-2").unwrap();
        // person-2: task-1 done, task-10 active, task-12 done, task-14 done
        assert_eq!(kale.assigned, 4);
        assert_eq!(kale.done, 3);
        assert_eq!(kale.live_task_name, None);
    }

    #[test]
    fn test_person_summaries_dangling_live_task() {
        let mut state = EventState::seed();
        state.people[0].is_live = true;
        state.people[0].live_task_id = Some("task-gone".to_string());
        let summaries = person_summaries(&state);
        assert_eq!(summaries[0].live_task_name, None);

        state.people[0].live_task_id = Some("task-8".to_string());
        let summaries = person_summaries(&state);
        assert_eq!(summaries[0].live_task_name.as_deref(), Some("זינגער פֿאַר חופה"));
    }

    #[test]
    fn test_person_summaries_carry_live_flag() {
        // the people strip derives its live count from this flag
        let mut state = EventState::seed();
        let summaries = person_summaries(&state);
        assert_eq!(summaries.iter().filter(|s| s.person.is_live).count(), 0);

        state.people[0].is_live = true;
        state.people[2].is_live = true;
        let summaries = person_summaries(&state);
        assert_eq!(summaries.iter().filter(|s| s.person.is_live).count(), 2);
    }

    #[test]
    fn test_time_remaining_decomposition() {
        let event = Utc.with_ymd_and_hms(2026, 1, 7, 18, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 15, 30, 45).unwrap();
        let left = time_remaining(event, now);
        assert_eq!(left.days, 5);
        assert_eq!(left.hours, 2);
        assert_eq!(left.minutes, 29);
        assert_eq!(left.seconds, 15);
    }

    #[test]
    fn test_time_remaining_clamps_at_event() {
        let event = Utc.with_ymd_and_hms(2026, 1, 7, 18, 0, 0).unwrap();
        assert_eq!(time_remaining(event, event), TimeLeft::default());
        let after = Utc.with_ymd_and_hms(2026, 1, 8, 0, 0, 0).unwrap();
        assert_eq!(time_remaining(event, after), TimeLeft::default());
    }

    #[test]
    fn test_urgency_boundary_at_72_hours() {
        let event = Utc.with_ymd_and_hms(2026, 1, 7, 18, 0, 0).unwrap();
        let at_73h = event - Duration::hours(73);
        assert!(!time_remaining(event, at_73h).is_urgent());
        let at_72h = event - Duration::hours(72);
        assert!(!time_remaining(event, at_72h).is_urgent());
        let under_72h = event - Duration::hours(72) + Duration::minutes(1);
        assert!(time_remaining(event, under_72h).is_urgent());
    }

    #[test]
    fn test_relative_time_tiers() {
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 12, 0, 0).unwrap();
        let at = |d: Duration| relative_time(now - d, now);
        assert_eq!(at(Duration::seconds(0)), "0 סעק צוריק");
        assert_eq!(at(Duration::seconds(59)), "59 סעק צוריק");
        assert_eq!(at(Duration::seconds(60)), "1 מינוט צוריק");
        assert_eq!(at(Duration::minutes(59)), "59 מינוט צוריק");
        assert_eq!(at(Duration::minutes(60)), "1 שעה צוריק");
        assert_eq!(at(Duration::hours(23)), "23 שעה צוריק");
        assert_eq!(at(Duration::hours(24)), "1 טעג צוריק");
        assert_eq!(at(Duration::days(3)), "3 טעג צוריק");
    }
}
