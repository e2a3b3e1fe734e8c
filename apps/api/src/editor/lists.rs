//! List helpers shared by the section editors.
//!
//! Every helper takes the current list by reference and returns a new one.
//! Inputs are never mutated.
//!
//! # Free-text slot rules (bullet points, technology tags)
//! - `push_slot` appends one empty slot, no trimming
//! - `set_slot` writes by index (index == len appends), then trims
//! - `remove_slot` drops one slot by index; removing the last slot leaves one
//!   empty slot
//! - trimming drops trailing blank slots while more than one slot remains

use crate::models::resume::{
    has_text, CertificateItem, EducationItem, ItemId, ProjectItem, WorkExperienceItem,
};

/// An entry of an id-keyed section list.
pub trait ListItem: Clone {
    fn id(&self) -> &ItemId;
}

impl ListItem for EducationItem {
    fn id(&self) -> &ItemId {
        &self.id
    }
}

impl ListItem for WorkExperienceItem {
    fn id(&self) -> &ItemId {
        &self.id
    }
}

impl ListItem for ProjectItem {
    fn id(&self) -> &ItemId {
        &self.id
    }
}

impl ListItem for CertificateItem {
    fn id(&self) -> &ItemId {
        &self.id
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Id-keyed lists
// ────────────────────────────────────────────────────────────────────────────

pub fn append<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut next = items.to_vec();
    next.push(item);
    next
}

pub fn remove_by_id<T: ListItem>(items: &[T], id: &ItemId) -> Vec<T> {
    items.iter().filter(|i| i.id() != id).cloned().collect()
}

/// Copies the list and applies `edit` to the item with `id`. Unknown ids leave
/// the copy identical to the input.
pub fn update_by_id<T: ListItem>(items: &[T], id: &ItemId, edit: impl FnOnce(&mut T)) -> Vec<T> {
    let mut next = items.to_vec();
    if let Some(item) = next.iter_mut().find(|i| i.id() == id) {
        edit(item);
    }
    next
}

// ────────────────────────────────────────────────────────────────────────────
// Free-text slots
// ────────────────────────────────────────────────────────────────────────────

pub fn push_slot(values: &[String]) -> Vec<String> {
    append(values, String::new())
}

pub fn set_slot(values: &[String], index: usize, value: &str) -> Vec<String> {
    let mut next = values.to_vec();
    match index {
        i if i < next.len() => next[i] = value.to_string(),
        i if i == next.len() => next.push(value.to_string()),
        _ => return next,
    }
    trim_trailing_blanks(&mut next);
    next
}

/// Drops the value at `index`. Out-of-range indexes return an unchanged copy.
pub fn remove_at<T: Clone>(values: &[T], index: usize) -> Vec<T> {
    values
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, v)| v.clone())
        .collect()
}

pub fn remove_slot(values: &[String], index: usize) -> Vec<String> {
    let mut next = remove_at(values, index);
    if next.is_empty() {
        next.push(String::new());
    }
    next
}

pub fn trim_trailing_blanks(values: &mut Vec<String>) {
    while values.len() > 1 && values.last().is_some_and(|v| !has_text(v)) {
        values.pop();
    }
}
