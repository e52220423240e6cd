use super::*;
use crate::traits::*;

use flo_raster::*;

mod addressing;
mod pruning;

///
/// A small store for the tests
///
pub fn create_store() -> CelStore {
    CelStore::new(32, 32, 4)
}

///
/// Paints a single opaque pixel on a cel
///
pub fn dab(store: &mut CelStore, layer: MainLayer, frame: usize, color: ColorKey, x: usize, y: usize) {
    let value   = color.to_rgba(255);
    let surface = store.get_or_create_surface(layer, frame, color);

    surface.set_pixel(x, y, value);
}
