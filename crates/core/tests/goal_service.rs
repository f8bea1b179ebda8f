//! `GoalService` lifecycle operations against an in-memory repository.

mod support;

use std::sync::Arc;

use chrono::Utc;
use support::fixtures::{at, date, goal, log};
use support::repositories::MockGoalRepository;
use timepal_core::GoalService;
use timepal_domain::{GoalMetric, GoalStatus, ProgressState, TimePalError};

fn service_with(repo: &MockGoalRepository) -> GoalService<Utc> {
    GoalService::new(Arc::new(repo.clone())).with_timezone(Utc)
}

fn seeded() -> MockGoalRepository {
    MockGoalRepository::new(vec![goal(GoalMetric::DurationRaw, 3_600.0, date(2024, 3, 1), date(2024, 3, 31))])
}

#[test]
fn save_rejects_invalid_goals() {
    let repo = MockGoalRepository::default();
    let service = service_with(&repo);

    let zero_target = goal(GoalMetric::TaskCount, 0.0, date(2024, 3, 1), date(2024, 3, 2));
    assert!(matches!(service.save_goal(zero_target), Err(TimePalError::InvalidInput(_))));

    let backwards = goal(GoalMetric::TaskCount, 3.0, date(2024, 3, 2), date(2024, 3, 1));
    assert!(matches!(service.save_goal(backwards), Err(TimePalError::InvalidInput(_))));

    assert!(repo.stored().is_empty());
}

#[test]
fn save_replaces_goal_with_same_id() {
    let repo = seeded();
    let service = service_with(&repo);

    let mut updated = goal(GoalMetric::DurationRaw, 7_200.0, date(2024, 3, 1), date(2024, 3, 31));
    updated.title = "Renamed".to_string();
    service.save_goal(updated).unwrap();

    let stored = repo.stored();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].title, "Renamed");
}

#[test]
fn delete_reports_missing_goal() {
    let repo = seeded();
    let service = service_with(&repo);

    assert_eq!(service.delete_goal("g1").unwrap().id, "g1");
    assert!(matches!(service.delete_goal("g1"), Err(TimePalError::NotFound(_))));
}

#[test]
fn archive_toggles_back_to_active() {
    let repo = seeded();
    let service = service_with(&repo);

    assert_eq!(service.toggle_archive("g1").unwrap().status, GoalStatus::Archived);
    assert_eq!(service.toggle_archive("g1").unwrap().status, GoalStatus::Active);
    assert_eq!(repo.stored()[0].status, GoalStatus::Active);
}

#[test]
fn extend_pushes_deadline_and_counts() {
    let repo = seeded();
    let service = service_with(&repo);

    let extended = service.extend_goal("g1", 7).unwrap();
    assert_eq!(extended.end_date, date(2024, 4, 7));
    assert_eq!(extended.extended_count, 1);
    assert_eq!(extended.status, GoalStatus::Active);

    assert!(matches!(service.extend_goal("g1", 0), Err(TimePalError::InvalidInput(_))));
    assert_eq!(repo.stored()[0].extended_count, 1);
}

#[test]
fn increase_target_requires_positive_amount() {
    let repo = seeded();
    let service = service_with(&repo);

    let raised = service.increase_target("g1", 1_800.0).unwrap();
    assert!((raised.target_value - 5_400.0).abs() < f64::EPSILON);

    assert!(matches!(service.increase_target("g1", -10_000.0), Err(TimePalError::InvalidInput(_))));
    assert!(matches!(service.increase_target("missing", 1.0), Err(TimePalError::NotFound(_))));
}

#[test]
fn goals_are_listed_per_scope() {
    let mut other = goal(GoalMetric::TaskCount, 3.0, date(2024, 3, 1), date(2024, 3, 31));
    other.id = "g2".to_string();
    other.scope_id = "s2".to_string();
    let repo = seeded();
    let service = service_with(&repo);
    service.save_goal(other).unwrap();

    let ids: Vec<_> = service.goals_for_scope("s2").unwrap().into_iter().map(|goal| goal.id).collect();
    assert_eq!(ids, vec!["g2".to_string()]);
}

#[test]
fn progress_and_status_use_stored_goal() {
    let repo = seeded();
    let service = service_with(&repo);
    let logs = vec![log("l1", "a1", at(2024, 3, 4, 9, 0), 1_800, &["s1"])];

    let progress = service.progress_for("g1", &logs, &[]).unwrap();
    assert!((progress.percentage - 50.0).abs() < 1e-9);

    let report = service.status_for("g1", &logs, &[], at(2024, 4, 2, 0, 0)).unwrap();
    assert_eq!(report.state, ProgressState::Failed);

    assert!(matches!(service.progress_for("nope", &logs, &[]), Err(TimePalError::NotFound(_))));
}
