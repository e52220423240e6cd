use super::fill_options::*;
use crate::sublayer::*;

use flo_raster::*;

///
/// The per-invocation region analysis for one frame
///
/// Every cell of the canvas is classified exactly once: it is closed ink, or it
/// is outside (reachable from the canvas border through non-ink), or it is
/// inside an enclosed region. Fills and erases may only touch inside cells.
///
pub struct RegionMap {
    /// Ink occupancy after morphological closing
    closed: BitMask,

    /// Cells reachable from the canvas border
    outside: BitMask,
}

impl RegionMap {
    ///
    /// Analyses one frame of the store under the given fill options
    ///
    pub fn build(store: &CelStore, frame: usize, options: &FillOptions) -> RegionMap {
        let mut ink = BitMask::new(store.width(), store.height());

        for layer in options.boundary_layers.iter() {
            for surface in store.surfaces_at(*layer, frame) {
                for y in 0..ink.height() {
                    for x in 0..ink.width() {
                        if surface.alpha_at(x, y) > INK_ALPHA_THRESHOLD {
                            ink.set(x, y, true);
                        }
                    }
                }
            }
        }

        ink.close(options.gap_tolerance);
        let outside = ink.reachable_from_border();

        RegionMap {
            closed:     ink,
            outside:    outside,
        }
    }

    pub fn width(&self) -> usize { self.closed.width() }
    pub fn height(&self) -> usize { self.closed.height() }

    ///
    /// True if a cell is enclosed by ink: neither boundary nor outside
    ///
    pub fn is_inside(&self, x: usize, y: usize) -> bool {
        !self.closed.get(x, y) && !self.outside.get(x, y)
    }

    ///
    /// True if a cell is part of the closed ink boundary
    ///
    pub fn is_ink(&self, x: usize, y: usize) -> bool {
        self.closed.get(x, y)
    }

    ///
    /// True if a cell is reachable from the canvas border
    ///
    pub fn is_outside(&self, x: usize, y: usize) -> bool {
        self.outside.get(x, y)
    }
}
