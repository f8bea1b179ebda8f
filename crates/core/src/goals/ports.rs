//! Port interfaces for goal persistence

use timepal_domain::{Goal, Result};

/// Trait for persisting goals
///
/// Implementations treat the backing store as an opaque collection; ordering
/// of `list_goals` is insertion order.
pub trait GoalRepository: Send + Sync {
    /// All stored goals
    fn list_goals(&self) -> Result<Vec<Goal>>;

    /// Goal by id, `None` when absent
    fn get_goal(&self, id: &str) -> Result<Option<Goal>>;

    /// Insert, or replace the goal with the same id
    fn upsert_goal(&self, goal: Goal) -> Result<()>;

    /// Remove a goal, returning it when it existed
    fn delete_goal(&self, id: &str) -> Result<Option<Goal>>;
}
