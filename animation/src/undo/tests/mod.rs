use super::*;
use crate::traits::*;

use flo_raster::*;

mod stacks;

pub fn cel(layer: MainLayer, frame: usize) -> CelId {
    CelId::new(layer, frame, ColorKey::BLACK)
}

///
/// A 2x2 snapshot with one opaque pixel whose red channel is `tag`
///
pub fn snapshot(tag: u8) -> SurfacePixels {
    let mut surface = RasterSurface::new(2, 2);
    surface.set_pixel(0, 0, Rgba { r: tag, g: 0, b: 0, a: 255 });

    surface.snapshot()
}
