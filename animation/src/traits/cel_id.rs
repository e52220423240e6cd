use super::main_layer::*;

use flo_raster::*;

use std::fmt;

///
/// The compound address of a single cel: one colour's surface on one layer at one frame
///
/// Every subsystem that needs to name a surface (the store, the fill engine, the
/// undo log, the storage contract) addresses it with one of these.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CelId {
    pub layer: MainLayer,
    pub frame: usize,
    pub color: ColorKey,
}

impl CelId {
    pub fn new(layer: MainLayer, frame: usize, color: ColorKey) -> CelId {
        CelId { layer, frame, color }
    }
}

impl fmt::Display for CelId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}@{}", self.layer, self.color, self.frame)
    }
}
