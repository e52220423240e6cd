//!
//! # The persistence contract
//!
//! The editor talks to whatever stores projects through a command/response
//! vocabulary; the backend behind it is out of the core's scope. Cels cross
//! this boundary addressed by (layer index, colour string, frame index), with
//! colour strings re-normalized on the way back in.
//!

mod storage_command;
mod storage_response;
mod storage_error;
mod cel_storage;
mod in_memory_storage;
#[cfg(test)] mod tests;

pub use self::storage_command::*;
pub use self::storage_response::*;
pub use self::storage_error::*;
pub use self::cel_storage::*;
pub use self::in_memory_storage::*;
