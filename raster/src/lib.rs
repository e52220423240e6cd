//!
//! Pixel-level primitives for raster cel animation: canonical colour keys,
//! RGBA surfaces with cached content flags, binary masks with morphological
//! operators, and the compositing operations that work on all of them
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate lazy_static;

mod color;
mod surface;
mod pool;
mod mask;
mod blend;
mod pen;

pub use self::color::*;
pub use self::surface::*;
pub use self::pool::*;
pub use self::mask::*;
pub use self::blend::*;
pub use self::pen::*;
