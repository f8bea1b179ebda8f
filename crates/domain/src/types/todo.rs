//! Todo records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// Todo list a todo belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct TodoCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

/// A todo, optionally in quantity-tracking ("progress") mode
///
/// In progress mode `total_amount` is the target and `completed_units` the
/// running counter, which never goes below zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: String,
    pub category_id: String,
    pub title: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_activity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_scope_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub is_progress: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_units: Option<f64>,
}

impl TodoItem {
    pub fn new(id: impl Into<String>, category_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category_id: category_id.into(),
            title: title.into(),
            is_completed: false,
            completed_at: None,
            linked_activity_id: None,
            linked_category_id: None,
            default_scope_ids: Vec::new(),
            note: None,
            is_progress: false,
            total_amount: None,
            unit_amount: None,
            completed_units: None,
        }
    }

    pub fn has_default_scope(&self, scope_id: &str) -> bool {
        self.default_scope_ids.iter().any(|id| id == scope_id)
    }

    /// Completed units, treating an unset counter as zero
    #[must_use]
    pub fn units_done(&self) -> f64 {
        self.completed_units.unwrap_or(0.0)
    }
}
