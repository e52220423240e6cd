//!
//! # flo_cel_animation
//!
//! The model for a raster cel-animation editor: a fixed stack of main layers,
//! each holding an unbounded set of per-colour sublayers with one raster surface
//! per frame, plus the engines that operate on them: the frame compositor, the
//! gap-tolerant region fill/erase engine and the cross-layer undo log.
//!
//! The `CelAnimation` type in `editor` is the public entry point; everything else
//! is the machinery behind it.
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate strum_macros;

mod traits;
pub mod sublayer;
pub mod compositor;
pub mod fill;
pub mod undo;
pub mod editor;
pub mod storage;
pub mod serializer;

pub use self::traits::*;
pub use self::sublayer::*;
pub use self::compositor::*;
pub use self::fill::*;
pub use self::undo::*;
pub use self::editor::*;
pub use self::storage::*;
pub use self::serializer::*;
