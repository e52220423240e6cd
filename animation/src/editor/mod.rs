//!
//! # The editor
//!
//! `CelAnimationCore` owns the store, the compositor and the undo log and
//! implements every editing operation synchronously. `CelAnimation` wraps the
//! core in a `Desync` so gestures run to completion in order however the host
//! drives them.
//!

mod cel_animation_core;
mod cel_animation;
#[cfg(test)] mod tests;

pub use self::cel_animation_core::*;
pub use self::cel_animation::*;
