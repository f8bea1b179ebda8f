//! Goals attached to scopes and the values derived from them

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::errors::{Result, TimePalError};
use crate::impl_domain_status_conversions;

/// What a goal measures
///
/// Closed set: adding a metric forces a decision in every `match` over it,
/// including the progress computation and the label/hint tables below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum GoalMetric {
    /// Total logged seconds
    DurationRaw,
    /// Logged seconds scaled by focus score / 5
    DurationWeighted,
    /// Distinct days with at least one log
    FrequencyDays,
    /// Completed todos
    TaskCount,
    /// Total logged seconds, read as a ceiling
    DurationLimit,
}

impl_domain_status_conversions!(GoalMetric {
    DurationRaw => "duration_raw",
    DurationWeighted => "duration_weighted",
    FrequencyDays => "frequency_days",
    TaskCount => "task_count",
    DurationLimit => "duration_limit",
});

impl GoalMetric {
    pub const ALL: [Self; 5] = [
        Self::DurationRaw,
        Self::DurationWeighted,
        Self::FrequencyDays,
        Self::TaskCount,
        Self::DurationLimit,
    ];

    /// Display name shown next to a goal
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DurationRaw => "投入时长",
            Self::DurationWeighted => "有效时长",
            Self::FrequencyDays => "活跃天数",
            Self::TaskCount => "完成任务",
            Self::DurationLimit => "时长上限",
        }
    }

    /// Input hint for the target field
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::DurationRaw => "设置累计投入时间目标（小时）",
            Self::DurationWeighted => "设置有效时长目标（考虑专注度，小时）",
            Self::FrequencyDays => "设置活跃天数目标（天）",
            Self::TaskCount => "设置完成待办数量目标（个）",
            Self::DurationLimit => "设置时长上限（不超过，小时）",
        }
    }

    /// Metrics whose values are seconds
    #[must_use]
    pub const fn is_duration(self) -> bool {
        matches!(self, Self::DurationRaw | Self::DurationWeighted | Self::DurationLimit)
    }

    /// Inverse goals: staying under the target is success
    #[must_use]
    pub const fn is_limit(self) -> bool {
        matches!(self, Self::DurationLimit)
    }
}

/// Lifecycle state stored on the goal record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    #[default]
    Active,
    Completed,
    Failed,
    Archived,
}

impl_domain_status_conversions!(GoalStatus {
    Active => "active",
    Completed => "completed",
    Failed => "failed",
    Archived => "archived",
});

/// A time-bound target owned by exactly one scope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub scope_id: String,
    pub metric: GoalMetric,
    pub target_value: f64,
    /// First day counted (local midnight)
    pub start_date: NaiveDate,
    /// Last day counted, inclusive through 23:59:59.999
    pub end_date: NaiveDate,
    /// Restricts log-based metrics to these activities when non-empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter_activity_ids: Vec<String>,
    /// Restricts `task_count` to these todo categories when non-empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter_todo_categories: Vec<String>,
    #[serde(default)]
    pub status: GoalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivation: Option<String>,
    /// How many times the deadline was pushed back
    #[serde(default)]
    pub extended_count: u32,
}

impl Goal {
    /// Active goal with no filters.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        scope_id: impl Into<String>,
        metric: GoalMetric,
        target_value: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            scope_id: scope_id.into(),
            metric,
            target_value,
            start_date,
            end_date,
            filter_activity_ids: Vec::new(),
            filter_todo_categories: Vec::new(),
            status: GoalStatus::Active,
            motivation: None,
            extended_count: 0,
        }
    }

    /// Check the invariants a goal must hold before it is stored.
    ///
    /// # Errors
    /// Returns `TimePalError::InvalidInput` for an empty title or scope, a
    /// target that is not a positive finite number, or a start date after
    /// the end date.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(TimePalError::InvalidInput("Goal title must not be empty".to_string()));
        }
        if self.scope_id.trim().is_empty() {
            return Err(TimePalError::InvalidInput(format!(
                "Goal {} is not attached to a scope",
                self.id
            )));
        }
        if !self.target_value.is_finite() || self.target_value <= 0.0 {
            return Err(TimePalError::InvalidInput(format!(
                "Goal target must be greater than zero, got {}",
                self.target_value
            )));
        }
        if self.start_date > self.end_date {
            return Err(TimePalError::InvalidInput(format!(
                "Goal start date {} is after end date {}",
                self.start_date, self.end_date
            )));
        }
        Ok(())
    }
}

/// Output of the goal progress engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct GoalProgress {
    pub current: f64,
    pub target: f64,
    /// Always within `0.0..=100.0`
    pub percentage: f64,
}

/// Outcome of a goal judged against its deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ProgressState {
    InProgress,
    Completed,
    Failed,
}

impl_domain_status_conversions!(ProgressState {
    InProgress => "in_progress",
    Completed => "completed",
    Failed => "failed",
});

/// Progress plus deadline bookkeeping for one goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct GoalStatusReport {
    pub state: ProgressState,
    pub progress: GoalProgress,
    /// Whole days left, rounded up; zero or negative once expired
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub days_until_deadline: i64,
    pub is_expired: bool,
}

impl GoalStatusReport {
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self.state, ProgressState::Completed)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.state, ProgressState::Failed)
    }

    /// Settled goals (completed or failed) get surfaced to the user
    #[must_use]
    pub const fn needs_alert(&self) -> bool {
        self.is_completed() || self.is_failed()
    }
}
