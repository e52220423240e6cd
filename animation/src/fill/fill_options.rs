use crate::traits::*;

use smallvec::*;

/// Alpha strictly above this counts as ink when building the boundary mask.
/// Anti-aliased fringe pixels sit at or below it and must not close regions.
pub const INK_ALPHA_THRESHOLD: u8 = 10;

///
/// Parameters for a region fill or erase
///
#[derive(Clone, PartialEq, Debug)]
pub struct FillOptions {
    /// Gaps in the ink up to roughly this many pixels wide are treated as closed
    pub gap_tolerance: u32,

    /// Which layers' ink forms the boundary. The same set is used for fills and
    /// erases; callers wanting colour edges to act as boundaries add `Color`.
    pub boundary_layers: SmallVec<[MainLayer; 2]>,
}

impl Default for FillOptions {
    fn default() -> FillOptions {
        FillOptions {
            gap_tolerance:      0,
            boundary_layers:    smallvec![MainLayer::Line],
        }
    }
}

impl FillOptions {
    ///
    /// A fill that tolerates gaps up to `gap_tolerance` pixels
    ///
    pub fn with_gap_tolerance(gap_tolerance: u32) -> FillOptions {
        FillOptions {
            gap_tolerance:  gap_tolerance,
            ..Default::default()
        }
    }
}
