mod common;

use chrono::Duration;
use common::{date, make_habit, make_log};
use zenith::core::achievements::evaluate;
use zenith::models::Category;

fn unlocked(badges: &[zenith::core::achievements::Achievement], id: &str) -> bool {
    badges.iter().find(|a| a.id == id).unwrap().unlocked
}

#[test]
fn test_everything_locked_on_fresh_state() {
    let badges = evaluate(&[], &[]);
    assert_eq!(badges.len(), 4);
    assert!(badges.iter().all(|a| !a.unlocked));
}

#[test]
fn test_sprout_unlocks_on_first_completion() {
    let mut habit = make_habit("Walk", Category::PhysicalHealth, None);
    habit.completed_dates.insert(date(2026, 8, 30));

    let badges = evaluate(&[habit], &[]);
    assert!(unlocked(&badges, "sprout"));
    assert!(!unlocked(&badges, "flawless"));
}

#[test]
fn test_flawless_requires_seven_total_completions() {
    let today = date(2026, 8, 30);
    let mut a = make_habit("Walk", Category::PhysicalHealth, None);
    let mut b = make_habit("Read", Category::Study, None);
    for i in 0..4 {
        a.completed_dates.insert(today - Duration::days(i));
    }
    for i in 0..3 {
        b.completed_dates.insert(today - Duration::days(i));
    }

    // 4 + 3 = 7 across habits.
    let badges = evaluate(&[a, b], &[]);
    assert!(unlocked(&badges, "flawless"));
}

#[test]
fn test_deep_sea_requires_more_than_forty_cups() {
    let mut logs = Vec::new();
    for i in 0..10 {
        let mut log = make_log(date(2026, 8, 1) + Duration::days(i));
        log.water_intake = 4;
        logs.push(log);
    }
    // Exactly 40 is not enough.
    assert!(!unlocked(&evaluate(&[], &logs), "deep-sea"));

    logs[0].water_intake = 5;
    assert!(unlocked(&evaluate(&[], &logs), "deep-sea"));
}

#[test]
fn test_zen_master_counts_meditation_completions() {
    let today = date(2026, 8, 30);
    let mut habit = make_habit("Meditate for 10 mins", Category::MentalHealth, None);
    for i in 0..5 {
        habit.completed_dates.insert(today - Duration::days(i));
    }

    let badges = evaluate(&[habit], &[]);
    assert!(unlocked(&badges, "zen-master"));
}

#[test]
fn test_zen_master_ignores_other_habits() {
    let today = date(2026, 8, 30);
    let mut habit = make_habit("Morning walk", Category::PhysicalHealth, None);
    for i in 0..5 {
        habit.completed_dates.insert(today - Duration::days(i));
    }

    let badges = evaluate(&[habit], &[]);
    assert!(!unlocked(&badges, "zen-master"));
}
