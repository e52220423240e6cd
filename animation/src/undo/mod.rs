//!
//! # The undo subsystem
//!
//! One global undo stack and one global redo stack, shared by every tool. An
//! entry snapshots a single cel before and after one gesture; tools that touch
//! several cels in one call (a multi-sublayer erase) commit one entry per cel.
//!

mod undo_entry;
mod undo_log;
mod undo_log_size;
#[cfg(test)] mod tests;

pub use self::undo_entry::*;
pub use self::undo_log::*;
pub use self::undo_log_size::*;
