//!
//! # The sublayer store
//!
//! A main layer holds one sublayer per colour actually used on it, and each
//! sublayer holds one surface slot per frame. Nothing here is allocated ahead
//! of first use: a colour that was never drawn with costs nothing, and a frame
//! that was never drawn on holds no surface.
//!

mod sublayer;
mod layer_state;
mod cel_store;
#[cfg(test)] mod tests;

pub use self::sublayer::*;
pub use self::layer_state::*;
pub use self::cel_store::*;
