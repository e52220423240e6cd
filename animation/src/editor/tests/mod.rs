use super::*;
use crate::traits::*;
use crate::fill::*;

use flo_raster::*;


pub const RED: ColorKey     = ColorKey::from_channels(255, 0, 0);
pub const GREEN: ColorKey   = ColorKey::from_channels(0, 255, 0);

pub fn create_core() -> CelAnimationCore {
    CelAnimationCore::new(50, 50, 4)
}

///
/// Runs one complete brush gesture that paints a single pixel
///
pub fn stroke_dot(core: &mut CelAnimationCore, layer: MainLayer, frame: usize, color: ColorKey, x: usize, y: usize) {
    core.begin_stroke_key(layer, frame, color);

    let value = color.to_rgba(255);
    if let Some(surface) = core.stroke_surface() {
        surface.set_pixel(x, y, value);
    }
    core.mark_dirty();
    core.commit_stroke();
}

///
/// Draws a closed square outline on the line layer outside the history protocol
///
pub fn draw_square(core: &mut CelAnimationCore, frame: usize, x0: i32, y0: i32, x1: i32, y1: i32) {
    let surface = core.get_surface(MainLayer::Line, frame, ColorKey::BLACK);
    outline_rect(surface, x0, y0, x1, y1, ColorKey::BLACK.to_rgba(255));
}
