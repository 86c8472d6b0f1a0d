//! Reusable UI components shared across pages.

pub mod edit_entry_modal;
pub mod entry_card;
pub mod login_required_modal;
