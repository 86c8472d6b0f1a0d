use super::*;
use crate::net::types::SortOrder;

// =============================================================
// EntriesState defaults
// =============================================================

#[test]
fn entries_state_default_empty() {
    let state = EntriesState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
}

#[test]
fn entries_state_default_sort_is_desc() {
    let state = EntriesState::default();
    assert_eq!(state.sort, SortOrder::Desc);
}

#[test]
fn entries_state_default_no_edit_target() {
    let state = EntriesState::default();
    assert!(state.editing.is_none());
}
