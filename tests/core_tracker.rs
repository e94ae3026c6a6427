mod common;

use common::{date, make_habit, make_log, setup_store};
use zenith::core::progress::parse_target;
use zenith::core::tracker::{HabitEdit, Tracker};
use zenith::models::{Category, LogPatch};

// ── load / commit ────────────────────────────────────────────────────────────

#[test]
fn test_load_seeds_habits_on_first_run() {
    let (_dir, store) = setup_store();
    let tracker = Tracker::load(&store).unwrap();

    assert_eq!(tracker.habits.len(), 3);
    assert!(tracker.logs.is_empty());
    let categories: Vec<_> = tracker.habits.iter().map(|h| h.category).collect();
    assert!(categories.contains(&Category::MentalHealth));
    assert!(categories.contains(&Category::Study));
    assert!(categories.contains(&Category::PhysicalHealth));
}

#[test]
fn test_commit_and_reload_round_trips_state() {
    let (_dir, store) = setup_store();
    let mut tracker = Tracker::load(&store).unwrap();

    let today = date(2026, 8, 30);
    let id = tracker
        .create_habit("Stretch", Category::SelfCare, None, Some("5 minutes".to_string()), None)
        .unwrap()
        .id
        .clone();
    tracker.toggle_completion(&id, today, true);
    tracker.commit(&store).unwrap();

    let reloaded = Tracker::load(&store).unwrap();
    assert_eq!(reloaded.habits.len(), 4);
    let habit = reloaded.habit(&id).unwrap();
    assert!(habit.completed_dates.contains(&today));
    assert_eq!(
        reloaded.today_log(today).habit_progress.get(&id),
        Some(&5)
    );
}

#[test]
fn test_empty_habit_list_persists_as_empty_not_reseeded() {
    let (_dir, store) = setup_store();
    let mut tracker = Tracker::load(&store).unwrap();

    tracker.import(Vec::new(), Vec::new());
    tracker.commit(&store).unwrap();

    let reloaded = Tracker::load(&store).unwrap();
    assert!(reloaded.habits.is_empty());
}

// ── create / edit / delete ───────────────────────────────────────────────────

#[test]
fn test_create_habit_rejects_blank_name() {
    let (_dir, store) = setup_store();
    let mut tracker = Tracker::load(&store).unwrap();

    let err = tracker.create_habit("   ", Category::Study, None, None, None);
    assert!(err.is_err());
    assert_eq!(tracker.habits.len(), 3);
}

#[test]
fn test_create_habit_trims_name_and_assigns_fresh_id() {
    let (_dir, store) = setup_store();
    let mut tracker = Tracker::load(&store).unwrap();

    let habit = tracker
        .create_habit("  Journal  ", Category::MentalHealth, None, None, None)
        .unwrap();
    assert_eq!(habit.name, "Journal");
    assert!(!habit.id.is_empty());
    assert!(habit.completed_dates.is_empty());
    assert_eq!(habit.streak, 0);
}

#[test]
fn test_edit_habit_replaces_display_fields_only() {
    let (_dir, store) = setup_store();
    let mut tracker = Tracker::load(&store).unwrap();

    let today = date(2026, 8, 30);
    let id = tracker.habits[0].id.clone();
    tracker.toggle_completion(&id, today, true);

    let edited = tracker
        .edit_habit(
            &id,
            HabitEdit {
                name: Some("Evening meditation".to_string()),
                goal: Some("15 minutes".to_string()),
                ..HabitEdit::default()
            },
        )
        .unwrap();

    assert_eq!(edited.name, "Evening meditation");
    assert_eq!(parse_target(edited.goal.as_deref()), 15);
    assert_eq!(edited.id, id);
    // Completion history survives an edit.
    assert!(edited.completed_dates.contains(&today));
}

#[test]
fn test_edit_unknown_habit_is_benign_miss() {
    let (_dir, store) = setup_store();
    let mut tracker = Tracker::load(&store).unwrap();

    let result = tracker.edit_habit(
        "no-such-id",
        HabitEdit {
            name: Some("x".to_string()),
            ..HabitEdit::default()
        },
    );
    assert!(result.is_none());
    assert_eq!(tracker.habits.len(), 3);
}

#[test]
fn test_delete_habit_keeps_orphaned_progress_entries() {
    let (_dir, store) = setup_store();
    let mut tracker = Tracker::load(&store).unwrap();

    let today = date(2026, 8, 30);
    let id = tracker.habits[0].id.clone();
    tracker.toggle_completion(&id, today, true);

    assert!(tracker.delete_habit(&id));
    assert!(tracker.habit(&id).is_none());
    // Historical log rows are not scrubbed.
    assert!(tracker.today_log(today).habit_progress.contains_key(&id));
}

#[test]
fn test_delete_unknown_habit_returns_false() {
    let (_dir, store) = setup_store();
    let mut tracker = Tracker::load(&store).unwrap();
    assert!(!tracker.delete_habit("no-such-id"));
}

// ── progress through the tracker ─────────────────────────────────────────────

#[test]
fn test_toggle_unknown_habit_leaves_log_untouched() {
    let (_dir, store) = setup_store();
    let mut tracker = Tracker::load(&store).unwrap();

    let today = date(2026, 8, 30);
    assert!(!tracker.toggle_completion("no-such-id", today, true));
    assert!(tracker.logs.is_empty());
}

#[test]
fn test_set_progress_unknown_habit_returns_none() {
    let (_dir, store) = setup_store();
    let mut tracker = Tracker::load(&store).unwrap();

    assert!(tracker.set_progress("no-such-id", date(2026, 8, 30), 3).is_none());
}

/// End-to-end scenario: goal "10 pages", progress to target, then back off.
#[test]
fn test_progress_scenario_read_ten_pages() {
    let (_dir, store) = setup_store();
    let mut tracker = Tracker::load(&store).unwrap();

    let today = date(2026, 8, 30);
    let id = tracker
        .create_habit("Read 10 pages", Category::Study, None, Some("10 pages".to_string()), None)
        .unwrap()
        .id
        .clone();

    assert_eq!(tracker.set_progress(&id, today, 10), Some(10));
    assert!(tracker.habit(&id).unwrap().completed_dates.contains(&today));
    assert_eq!(tracker.today_log(today).habit_progress.get(&id), Some(&10));

    assert_eq!(tracker.set_progress(&id, today, 5), Some(5));
    assert!(!tracker.habit(&id).unwrap().completed_dates.contains(&today));
    assert_eq!(tracker.today_log(today).habit_progress.get(&id), Some(&5));
}

/// The cross-entity invariant: a date is in completed_dates iff that day's
/// recorded progress equals the habit's target.
#[test]
fn test_completion_set_and_progress_map_stay_consistent() {
    let (_dir, store) = setup_store();
    let mut tracker = Tracker::load(&store).unwrap();

    let today = date(2026, 8, 30);
    let ids: Vec<String> = tracker.habits.iter().map(|h| h.id.clone()).collect();
    tracker.toggle_completion(&ids[0], today, true);
    tracker.set_progress(&ids[1], today, 1);
    tracker.set_progress(&ids[2], today, 0);
    tracker.toggle_completion(&ids[0], today, false);
    tracker.set_progress(&ids[0], today, 1);

    let log = tracker.today_log(today);
    for habit in &tracker.habits {
        let target = parse_target(habit.goal.as_deref());
        let progress = log.habit_progress.get(&habit.id).copied().unwrap_or(0);
        assert_eq!(
            habit.completed_dates.contains(&today),
            progress == target,
            "habit {} disagrees between completion set and progress map",
            habit.name
        );
    }
}

// ── wellness log updates ─────────────────────────────────────────────────────

#[test]
fn test_update_log_lazily_materializes_today_row() {
    let (_dir, store) = setup_store();
    let mut tracker = Tracker::load(&store).unwrap();

    let today = date(2026, 8, 30);
    // Reading alone never persists a row.
    let _ = tracker.today_log(today);
    assert!(tracker.logs.is_empty());

    tracker.update_log(
        today,
        &LogPatch {
            water_intake: Some(2),
            ..LogPatch::default()
        },
    );
    assert_eq!(tracker.logs.len(), 1);
}

// ── import / reset ───────────────────────────────────────────────────────────

#[test]
fn test_import_wholesale_replaces_not_merges() {
    let (_dir, store) = setup_store();
    let mut tracker = Tracker::load(&store).unwrap();

    let today = date(2026, 8, 30);
    let id = tracker.habits[0].id.clone();
    tracker.toggle_completion(&id, today, true);

    // Importing empty collections fully clears existing data.
    tracker.import(Vec::new(), Vec::new());
    assert!(tracker.habits.is_empty());
    assert!(tracker.logs.is_empty());

    let imported = vec![make_habit("Imported", Category::SelfCare, None)];
    tracker.import(imported, vec![make_log(today)]);
    assert_eq!(tracker.habits.len(), 1);
    assert_eq!(tracker.habits[0].name, "Imported");
    assert_eq!(tracker.logs.len(), 1);
}

#[test]
fn test_reset_restores_seed_habits_and_clears_logs() {
    let (_dir, store) = setup_store();
    let mut tracker = Tracker::load(&store).unwrap();

    let today = date(2026, 8, 30);
    tracker
        .create_habit("Extra", Category::Study, None, None, None)
        .unwrap();
    tracker.update_log(
        today,
        &LogPatch {
            sleep_hours: Some(7),
            ..LogPatch::default()
        },
    );

    tracker.reset();

    assert_eq!(tracker.habits.len(), 3);
    assert!(tracker.habits.iter().all(|h| h.completed_dates.is_empty()));
    assert!(tracker.logs.is_empty());
}
