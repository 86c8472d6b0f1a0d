#[cfg(test)]
#[path = "entries_test.rs"]
mod entries_test;

use crate::net::types::{DiaryEntry, SortOrder};

/// Target of the edit modal on the list page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditTarget {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Shared diary-list state for the list page.
#[derive(Clone, Debug, Default)]
pub struct EntriesState {
    pub items: Vec<DiaryEntry>,
    pub loading: bool,
    pub sort: SortOrder,
    pub editing: Option<EditTarget>,
}
