//!
//! # The region fill/erase engine
//!
//! Treats hand-drawn line art as a topological boundary: an occupancy mask is
//! built from the boundary layers' ink, morphologically closed to bridge small
//! gaps, and classified into outside (reachable from the canvas border), closed
//! ink and the enclosed inside. Fills and erases then flood the inside from the
//! user's seed points.
//!

mod fill_options;
mod region_map;
mod region_fill;
#[cfg(test)] mod tests;

pub use self::fill_options::*;
pub use self::region_map::*;
pub use self::region_fill::*;
