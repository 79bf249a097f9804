//! Widget handoff
//!
//! A lightweight snapshot of the current word, written to a shared file
//! so an out-of-process widget renderer can display it without calling
//! into the scheduler.

mod snapshot;

pub use snapshot::{SnapshotStore, WidgetError, WordSnapshot};
