//! Saved log filters and their parsed form

use std::fmt;

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::{OR_SEPARATOR, SCOPE_PREFIX, TAG_PREFIX, TODO_PREFIX};

/// A saved filter; `filter_expression` is the only source of matching logic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub id: String,
    pub name: String,
    /// e.g. `瑜伽 #运动 %健康 @柔韧`
    pub filter_expression: String,
    #[serde(default)]
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Filter {
    pub fn new(id: impl Into<String>, name: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            filter_expression: expression.into(),
            created_at: 0,
            icon: None,
        }
    }
}

/// Parsed filter expression
///
/// Each bucket is a list of OR-groups. Every group of every non-empty bucket
/// must match (AND); inside a group one keyword is enough (OR).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct FilterCondition {
    /// `#` keywords, matched against activity names
    pub tags: Vec<Vec<String>>,
    /// `%` keywords, matched against scope names
    pub scopes: Vec<Vec<String>>,
    /// `@` keywords, matched against the linked todo title
    pub todos: Vec<Vec<String>>,
    /// Unprefixed keywords, matched against the note
    pub notes: Vec<Vec<String>>,
}

impl FilterCondition {
    /// True when no bucket constrains anything, i.e. every log matches
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.scopes.is_empty() && self.todos.is_empty() && self.notes.is_empty()
    }
}

/// Canonical expression: tags, scopes, todos, then notes
///
/// A notes group whose first keyword starts with a prefix character is
/// written with a leading `|` so it reads back as a note.
impl fmt::Display for FilterCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buckets: [(Option<char>, &Vec<Vec<String>>); 4] = [
            (Some(TAG_PREFIX), &self.tags),
            (Some(SCOPE_PREFIX), &self.scopes),
            (Some(TODO_PREFIX), &self.todos),
            (None, &self.notes),
        ];

        let mut first = true;
        for (prefix, groups) in buckets {
            for group in groups {
                if !first {
                    f.write_str(" ")?;
                }
                first = false;
                if let Some(prefix) = prefix {
                    write!(f, "{prefix}")?;
                } else if group.first().is_some_and(|keyword| starts_with_prefix(keyword)) {
                    write!(f, "{OR_SEPARATOR}")?;
                }
                f.write_str(&group.join(&OR_SEPARATOR.to_string()))?;
            }
        }
        Ok(())
    }
}

fn starts_with_prefix(keyword: &str) -> bool {
    keyword.starts_with([TAG_PREFIX, SCOPE_PREFIX, TODO_PREFIX])
}

/// Aggregate over the logs a filter selects
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct FilterStats {
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub count: usize,
    /// Seconds
    pub total_duration: f64,
}
