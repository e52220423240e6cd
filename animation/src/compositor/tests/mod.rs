use super::*;
use crate::traits::*;
use crate::sublayer::*;

use flo_raster::*;


pub fn create_store() -> CelStore {
    CelStore::new(16, 16, 4)
}

///
/// Fills an entire cel with a colour at full opacity
///
pub fn paint_cel(store: &mut CelStore, layer: MainLayer, frame: usize, color: ColorKey) {
    let value   = color.to_rgba(255);
    let surface = store.get_or_create_surface(layer, frame, color);

    fill_all(surface, value);
}

///
/// Renders one frame with the given options and returns the destination
///
pub fn render(store: &CelStore, frame: usize, options: &FrameRenderOptions) -> RasterSurface {
    let mut compositor  = Compositor::new();
    let mut dest        = RasterSurface::new(store.width(), store.height());

    compositor.render_frame(store, &mut dest, frame, options);
    dest
}
