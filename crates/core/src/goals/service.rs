//! Goal management service - validation and lifecycle operations

use std::sync::Arc;

use chrono::{Days, Local, TimeZone};
use timepal_domain::{
    Goal, GoalProgress, GoalStatus, GoalStatusReport, Log, Result, TimePalError, TodoItem,
};
use tracing::{debug, info};

use super::ports::GoalRepository;
use super::progress::calculate_goal_progress_in;
use super::status::evaluate_goal_status_in;

/// Goal management service
///
/// Owns no state beyond the injected repository and the zone used to bucket
/// days. Progress is always computed from the snapshots the caller passes in.
pub struct GoalService<Tz: TimeZone = Local> {
    repository: Arc<dyn GoalRepository>,
    tz: Tz,
}

impl GoalService<Local> {
    /// Create a new goal service evaluating days in the host's local zone
    pub fn new(repository: Arc<dyn GoalRepository>) -> Self {
        Self { repository, tz: Local }
    }
}

impl<Tz: TimeZone> GoalService<Tz> {
    /// Evaluate days in `tz` instead
    pub fn with_timezone<Other: TimeZone>(self, tz: Other) -> GoalService<Other> {
        GoalService { repository: self.repository, tz }
    }

    /// Validate and store a goal, replacing any goal with the same id
    ///
    /// # Errors
    /// Returns `TimePalError::InvalidInput` when the goal fails validation,
    /// or any repository error.
    pub fn save_goal(&self, goal: Goal) -> Result<()> {
        goal.validate()?;
        info!(goal_id = %goal.id, metric = %goal.metric, "Saving goal");
        self.repository.upsert_goal(goal)
    }

    /// Delete a goal
    ///
    /// # Errors
    /// Returns `TimePalError::NotFound` when no goal has this id.
    pub fn delete_goal(&self, goal_id: &str) -> Result<Goal> {
        let removed = self.repository.delete_goal(goal_id)?.ok_or_else(|| not_found(goal_id))?;
        info!(goal_id, "Deleted goal");
        Ok(removed)
    }

    /// Flip a goal between archived and active
    ///
    /// Any non-archived status (including completed/failed) archives.
    ///
    /// # Errors
    /// Returns `TimePalError::NotFound` when no goal has this id.
    pub fn toggle_archive(&self, goal_id: &str) -> Result<Goal> {
        self.update(goal_id, |goal| {
            goal.status = if goal.status == GoalStatus::Archived {
                GoalStatus::Active
            } else {
                GoalStatus::Archived
            };
            Ok(())
        })
    }

    /// Push the deadline back by `days` and count the extension
    ///
    /// # Errors
    /// Returns `TimePalError::InvalidInput` for zero days or a date overflow,
    /// `TimePalError::NotFound` when no goal has this id.
    pub fn extend_goal(&self, goal_id: &str, days: u32) -> Result<Goal> {
        if days == 0 {
            return Err(TimePalError::InvalidInput(
                "Goal extension must be at least one day".to_string(),
            ));
        }
        self.update(goal_id, |goal| {
            goal.end_date = goal.end_date.checked_add_days(Days::new(u64::from(days))).ok_or_else(
                || TimePalError::InvalidInput(format!("Cannot extend goal by {days} days")),
            )?;
            goal.extended_count += 1;
            Ok(())
        })
    }

    /// Raise (or, with a negative amount, lower) the target value
    ///
    /// # Errors
    /// Returns `TimePalError::InvalidInput` when the resulting target is not
    /// positive, `TimePalError::NotFound` when no goal has this id.
    pub fn increase_target(&self, goal_id: &str, amount: f64) -> Result<Goal> {
        self.update(goal_id, |goal| {
            goal.target_value += amount;
            Ok(())
        })
    }

    /// Goals owned by a scope, in storage order
    ///
    /// # Errors
    /// Propagates repository errors.
    pub fn goals_for_scope(&self, scope_id: &str) -> Result<Vec<Goal>> {
        let goals = self.repository.list_goals()?;
        Ok(goals.into_iter().filter(|goal| goal.scope_id == scope_id).collect())
    }

    /// Current progress of a stored goal
    ///
    /// # Errors
    /// Returns `TimePalError::NotFound` when no goal has this id.
    pub fn progress_for(&self, goal_id: &str, logs: &[Log], todos: &[TodoItem]) -> Result<GoalProgress> {
        let goal = self.load(goal_id)?;
        Ok(calculate_goal_progress_in(&goal, logs, todos, &self.tz))
    }

    /// Status report of a stored goal at `now_ms`
    ///
    /// # Errors
    /// Returns `TimePalError::NotFound` when no goal has this id.
    pub fn status_for(
        &self,
        goal_id: &str,
        logs: &[Log],
        todos: &[TodoItem],
        now_ms: i64,
    ) -> Result<GoalStatusReport> {
        let goal = self.load(goal_id)?;
        let report = evaluate_goal_status_in(&goal, logs, todos, now_ms, &self.tz);
        debug!(goal_id, state = %report.state, percentage = report.progress.percentage, "Evaluated goal");
        Ok(report)
    }

    fn load(&self, goal_id: &str) -> Result<Goal> {
        self.repository.get_goal(goal_id)?.ok_or_else(|| not_found(goal_id))
    }

    fn update<F>(&self, goal_id: &str, change: F) -> Result<Goal>
    where
        F: FnOnce(&mut Goal) -> Result<()>,
    {
        let mut goal = self.load(goal_id)?;
        change(&mut goal)?;
        goal.validate()?;
        self.repository.upsert_goal(goal.clone())?;
        info!(goal_id, status = %goal.status, end_date = %goal.end_date, "Updated goal");
        Ok(goal)
    }
}

fn not_found(goal_id: &str) -> TimePalError {
    TimePalError::NotFound(format!("goal {goal_id}"))
}
