//! Time log records

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::MILLIS_PER_SECOND;

/// Immutable record of a tracked interval
///
/// `duration` is seconds and by convention equals
/// `(end_time - start_time) / 1000`; the engines read it as stored and never
/// recompute it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Log {
    pub id: String,
    pub category_id: String,
    pub activity_id: String,
    /// Epoch milliseconds
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub start_time: i64,
    /// Epoch milliseconds
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub end_time: i64,
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_todo_id: Option<String>,
    /// A missing list and an empty list mean the same thing: no scope
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scope_ids: Vec<String>,
    /// Units contributed to the linked progress todo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_increment: Option<f64>,
    /// 0..=5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_score: Option<u8>,
}

impl Log {
    /// Minimal log spanning `[start_time, end_time]` with a derived duration.
    pub fn new(
        id: impl Into<String>,
        category_id: impl Into<String>,
        activity_id: impl Into<String>,
        start_time: i64,
        end_time: i64,
    ) -> Self {
        Self {
            id: id.into(),
            category_id: category_id.into(),
            activity_id: activity_id.into(),
            start_time,
            end_time,
            duration: duration_seconds(start_time, end_time),
            title: None,
            note: None,
            linked_todo_id: None,
            scope_ids: Vec::new(),
            progress_increment: None,
            focus_score: None,
        }
    }

    pub fn has_scope(&self, scope_id: &str) -> bool {
        self.scope_ids.iter().any(|id| id == scope_id)
    }
}

/// Seconds between two epoch-millisecond instants.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn duration_seconds(start_ms: i64, end_ms: i64) -> f64 {
    (end_ms - start_ms) as f64 / MILLIS_PER_SECOND as f64
}
