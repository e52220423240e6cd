use super::compositor::*;
use crate::traits::*;
use crate::sublayer::*;

use flo_raster::*;

impl Compositor {
    ///
    /// Overlays the neighbouring frames of `frame` onto `dest` for editing
    ///
    /// Each neighbour with content is composited at `options.alpha`, halved for
    /// every step of distance beyond the first. This is purely an overlay: the
    /// current frame itself is never drawn here, and empty neighbours are skipped
    /// rather than substituted.
    ///
    pub fn render_onion_skin(&mut self, store: &CelStore, dest: &mut RasterSurface, frame: usize, options: &OnionSkinOptions) {
        assert!(dest.width() == store.width() && dest.height() == store.height(), "destination does not match the canvas size");

        // The overlay scratch leaves the compositor while the layer passes run
        let mut overlay = match self.overlay.take() {
            Some(overlay) if overlay.width() == store.width() && overlay.height() == store.height() => overlay,
            _ => RasterSurface::new(store.width(), store.height()),
        };

        let mut neighbours = vec![];
        for distance in 1..=options.frames_before {
            if let Some(before) = frame.checked_sub(distance) {
                neighbours.push((before, distance));
            }
        }
        for distance in 1..=options.frames_after {
            let after = frame + distance;
            if after < store.total_frames() {
                neighbours.push((after, distance));
            }
        }

        for (neighbour, distance) in neighbours {
            if !store.has_any_content(neighbour) {
                continue;
            }

            let falloff = options.alpha * 0.5f32.powi(distance as i32 - 1);

            overlay.clear();
            self.render_layers(store, &mut overlay, neighbour, 1.0, None);
            blend_over(dest, &overlay, falloff);
        }

        self.overlay = Some(overlay);
    }
}
