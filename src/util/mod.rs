//! Small browser utilities.

pub mod format;
