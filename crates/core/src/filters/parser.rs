//! Filter expression parser.
//!
//! Grammar: whitespace-separated tokens, no quoting or escaping.
//!
//! | token        | bucket  | matched against          |
//! |--------------|---------|--------------------------|
//! | `#a\|b`      | tags    | activity name            |
//! | `%a\|b`      | scopes  | scope names              |
//! | `@a\|b`      | todos   | linked todo title        |
//! | `a\|b`       | notes   | note text                |
//!
//! Each token becomes one OR-group (`|`-separated keywords). Groups are
//! AND-ed, inside a bucket and across buckets. Empty keywords are dropped and
//! a token that leaves no keyword adds no group.

use timepal_domain::constants::{OR_SEPARATOR, SCOPE_PREFIX, TAG_PREFIX, TODO_PREFIX};
use timepal_domain::FilterCondition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Tags,
    Scopes,
    Todos,
    Notes,
}

impl Bucket {
    /// Bucket a token belongs to and the part holding its keywords
    fn classify(token: &str) -> (Self, &str) {
        if let Some(rest) = token.strip_prefix(TAG_PREFIX) {
            (Self::Tags, rest)
        } else if let Some(rest) = token.strip_prefix(SCOPE_PREFIX) {
            (Self::Scopes, rest)
        } else if let Some(rest) = token.strip_prefix(TODO_PREFIX) {
            (Self::Todos, rest)
        } else {
            (Self::Notes, token)
        }
    }

    fn groups_mut(self, condition: &mut FilterCondition) -> &mut Vec<Vec<String>> {
        match self {
            Self::Tags => &mut condition.tags,
            Self::Scopes => &mut condition.scopes,
            Self::Todos => &mut condition.todos,
            Self::Notes => &mut condition.notes,
        }
    }
}

/// Parse a filter expression into its condition buckets.
///
/// Never fails: anything that is not a prefixed token is a note keyword, and
/// a blank expression yields the empty (match-everything) condition.
///
/// # Examples
///
/// ```
/// use timepal_core::filters::parse_filter_expression;
///
/// let condition = parse_filter_expression("瑜伽|跑步 #运动 %健康|工作");
/// assert_eq!(condition.tags, vec![vec!["运动".to_string()]]);
/// assert_eq!(condition.scopes, vec![vec!["健康".to_string(), "工作".to_string()]]);
/// assert_eq!(condition.notes, vec![vec!["瑜伽".to_string(), "跑步".to_string()]]);
/// assert!(condition.todos.is_empty());
/// ```
#[must_use]
pub fn parse_filter_expression(expression: &str) -> FilterCondition {
    let mut condition = FilterCondition::default();

    for token in expression.split_whitespace() {
        let (bucket, body) = Bucket::classify(token);
        let group = split_keywords(body);
        if !group.is_empty() {
            bucket.groups_mut(&mut condition).push(group);
        }
    }

    condition
}

fn split_keywords(body: &str) -> Vec<String> {
    body.split(OR_SEPARATOR)
        .filter(|keyword| !keyword.trim().is_empty())
        .map(str::to_string)
        .collect()
}
