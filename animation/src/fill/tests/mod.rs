use super::*;
use crate::traits::*;
use crate::sublayer::*;

use flo_raster::*;

mod region_analysis;
mod filling;

pub const RED: ColorKey = ColorKey::from_channels(255, 0, 0);

///
/// A store with a closed square outline on the line layer at frame 0
///
/// The outline runs from (x0, y0) to (x1, y1) inclusive, 1px black stroke.
///
pub fn store_with_square(width: usize, height: usize, x0: i32, y0: i32, x1: i32, y1: i32) -> CelStore {
    let mut store   = CelStore::new(width, height, 2);
    let line        = store.get_or_create_surface(MainLayer::Line, 0, ColorKey::BLACK);

    outline_rect(line, x0, y0, x1, y1, ColorKey::BLACK.to_rgba(255));
    store
}

///
/// Knocks a horizontal gap of `width` pixels out of the top edge of an outline
///
pub fn cut_gap(store: &mut CelStore, y: usize, from_x: usize, width: usize) {
    let surface = store.peek_surface_mut(MainLayer::Line, 0, ColorKey::BLACK).unwrap();

    for x in from_x..from_x + width {
        surface.set_pixel(x, y, Rgba::TRANSPARENT);
    }
}

///
/// Counts the pixels of a cel with non-zero alpha
///
pub fn painted_pixels(store: &CelStore, layer: MainLayer, frame: usize, color: ColorKey) -> usize {
    match store.peek_surface(layer, frame, color) {
        None            => 0,
        Some(surface)   => surface.pixels().chunks_exact(4).filter(|px| px[3] != 0).count(),
    }
}
