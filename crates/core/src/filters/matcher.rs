//! Log matching against a parsed filter condition.
//!
//! All comparisons are case-insensitive substring containment. A bucket with
//! no groups imposes nothing; a bucket with groups fails closed whenever the
//! log lacks the field it inspects or the referenced entity cannot be
//! resolved.

use timepal_domain::{Category, FilterCondition, Log, Scope, TodoCategory, TodoItem};

/// Read-only lookups used to turn log references into display names
#[derive(Debug, Clone, Copy)]
pub struct FilterContext<'a> {
    pub categories: &'a [Category],
    pub scopes: &'a [Scope],
    pub todos: &'a [TodoItem],
    pub todo_categories: &'a [TodoCategory],
}

impl<'a> FilterContext<'a> {
    pub const fn new(
        categories: &'a [Category],
        scopes: &'a [Scope],
        todos: &'a [TodoItem],
        todo_categories: &'a [TodoCategory],
    ) -> Self {
        Self { categories, scopes, todos, todo_categories }
    }

    fn activity_name(&self, log: &Log) -> Option<&'a str> {
        self.categories
            .iter()
            .find(|category| category.id == log.category_id)
            .and_then(|category| category.activity(&log.activity_id))
            .map(|activity| activity.name.as_str())
    }

    fn scope_names(&self, log: &Log) -> Vec<String> {
        self.scopes
            .iter()
            .filter(|scope| log.has_scope(&scope.id))
            .map(|scope| scope.name.to_lowercase())
            .collect()
    }

    fn todo(&self, todo_id: &str) -> Option<&'a TodoItem> {
        self.todos.iter().find(|todo| todo.id == todo_id)
    }
}

/// Whether `log` satisfies every bucket of `condition`.
///
/// Buckets are checked tags, scopes, todos, notes and evaluation stops at
/// the first failing one.
#[must_use]
pub fn matches_filter(log: &Log, condition: &FilterCondition, context: &FilterContext<'_>) -> bool {
    matches_tags(log, &condition.tags, context)
        && matches_scopes(log, &condition.scopes, context)
        && matches_todos(log, &condition.todos, context)
        && matches_notes(log, &condition.notes)
}

fn matches_tags(log: &Log, groups: &[Vec<String>], context: &FilterContext<'_>) -> bool {
    if groups.is_empty() {
        return true;
    }
    let Some(name) = context.activity_name(log) else {
        return false;
    };
    all_groups_match(groups, &[name.to_lowercase()])
}

fn matches_scopes(log: &Log, groups: &[Vec<String>], context: &FilterContext<'_>) -> bool {
    if groups.is_empty() {
        return true;
    }
    if log.scope_ids.is_empty() {
        return false;
    }
    all_groups_match(groups, &context.scope_names(log))
}

fn matches_todos(log: &Log, groups: &[Vec<String>], context: &FilterContext<'_>) -> bool {
    if groups.is_empty() {
        return true;
    }
    let Some(todo) = log.linked_todo_id.as_deref().and_then(|id| context.todo(id)) else {
        return false;
    };
    all_groups_match(groups, &[todo.title.to_lowercase()])
}

fn matches_notes(log: &Log, groups: &[Vec<String>]) -> bool {
    if groups.is_empty() {
        return true;
    }
    let Some(note) = log.note.as_deref() else {
        return false;
    };
    all_groups_match(groups, &[note.to_lowercase()])
}

/// Every group has a keyword contained in at least one of the (lowercased)
/// haystacks.
fn all_groups_match(groups: &[Vec<String>], haystacks: &[String]) -> bool {
    groups.iter().all(|group| {
        group.iter().any(|keyword| {
            let keyword = keyword.to_lowercase();
            haystacks.iter().any(|haystack| haystack.contains(&keyword))
        })
    })
}
