mod common;

use common::{date, make_habit, make_log};
use serde_json::Value;
use zenith::core::backup::{default_filename, export_json, import_json};
use zenith::models::Category;

#[test]
fn test_export_document_shape() {
    let mut habit = make_habit("Read", Category::Study, Some("10 pages"));
    habit.completed_dates.insert(date(2026, 8, 30));
    let log = make_log(date(2026, 8, 30));

    let json = export_json(&[habit], &[log]).unwrap();
    let doc: Value = serde_json::from_str(&json).unwrap();

    assert!(doc["habits"].is_array());
    assert!(doc["logs"].is_array());
    assert_eq!(doc["version"], "1.0");
    assert!(doc["exportedAt"].as_str().is_some());

    // Field names use the original web app's casing so backups round-trip.
    let habit = &doc["habits"][0];
    assert!(habit["completedDates"].is_array());
    assert_eq!(habit["completedDates"][0], "2026-08-30");
    let log = &doc["logs"][0];
    assert_eq!(log["stressLevel"], 5);
    assert_eq!(log["waterIntake"], 0);
}

#[test]
fn test_default_filename_embeds_date() {
    assert_eq!(
        default_filename(date(2026, 8, 30)),
        "zenith-backup-2026-08-30.json"
    );
}

#[test]
fn test_import_rejects_missing_collections() {
    assert!(import_json("{}").is_err());
    assert!(import_json(r#"{"habits": []}"#).is_err());
    assert!(import_json(r#"{"logs": []}"#).is_err());
    assert!(import_json("not json at all").is_err());
}

#[test]
fn test_import_accepts_minimal_document() {
    let (habits, logs) = import_json(r#"{"habits": [], "logs": []}"#).unwrap();
    assert!(habits.is_empty());
    assert!(logs.is_empty());
}

#[test]
fn test_import_ignores_extra_keys() {
    let (habits, _) = import_json(
        r#"{"habits": [], "logs": [], "version": "1.0", "exportedAt": "2026-08-30T00:00:00Z"}"#,
    )
    .unwrap();
    assert!(habits.is_empty());
}

#[test]
fn test_export_import_round_trip() {
    let habit = make_habit("Walk", Category::PhysicalHealth, None);
    let mut log = make_log(date(2026, 8, 30));
    log.water_intake = 4;
    log.habit_progress.insert(habit.id.clone(), 1);

    let json = export_json(&[habit.clone()], &[log]).unwrap();
    let (habits, logs) = import_json(&json).unwrap();

    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].id, habit.id);
    assert_eq!(habits[0].name, "Walk");
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].water_intake, 4);
    assert_eq!(logs[0].habit_progress.get(&habit.id), Some(&1));
}

#[test]
fn test_import_accepts_original_app_backup() {
    // Shape produced by the web app this replaces.
    let payload = r#"{
        "habits": [
            {
                "id": "1",
                "name": "Meditate for 10 mins",
                "category": "Mental Health",
                "icon": "🧘",
                "completedDates": ["2026-08-29", "2026-08-30"],
                "streak": 0
            }
        ],
        "logs": [
            {
                "date": "2026-08-30",
                "mood": "Happy",
                "stressLevel": 3,
                "journal": "",
                "waterIntake": 5,
                "sleepHours": 8,
                "exerciseMinutes": 20,
                "habitProgress": {"1": 1}
            }
        ],
        "version": "1.0",
        "exportedAt": "2026-08-30T12:00:00.000Z"
    }"#;

    let (habits, logs) = import_json(payload).unwrap();
    assert_eq!(habits[0].category, Category::MentalHealth);
    assert_eq!(habits[0].completed_dates.len(), 2);
    assert_eq!(logs[0].sleep_hours, 8);
    assert_eq!(logs[0].mood, Some(zenith::models::Mood::Happy));
}
