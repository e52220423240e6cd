use crate::traits::*;
use crate::sublayer::*;

use flo_raster::*;

///
/// Renders frames of a `CelStore` into a destination surface
///
/// The compositor owns a pair of scratch surfaces for the clip-to-below path so
/// repeated renders don't reallocate; it carries no other state and can render
/// any store whose dimensions match the destination.
///
pub struct Compositor {
    /// Scratch buffer the clipped layer is drawn into
    work: Option<RasterSurface>,

    /// Scratch buffer the clip mask is drawn into
    mask: Option<RasterSurface>,

    /// Scratch buffer for overlay passes (onion skin)
    pub (crate) overlay: Option<RasterSurface>,
}

/// The paper background colour
const PAPER: Rgba = Rgba { r: 255, g: 255, b: 255, a: 255 };

impl Compositor {
    pub fn new() -> Compositor {
        Compositor {
            work:       None,
            mask:       None,
            overlay:    None,
        }
    }

    ///
    /// Composites one frame of the store into `dest`
    ///
    /// When the requested frame is empty everywhere and `hold_previous_when_empty`
    /// is set, the nearest earlier frame with content is rendered in its place at
    /// `hold_alpha`, so scrubbing past undrawn frames shows the held pose rather
    /// than a blank canvas.
    ///
    pub fn render_frame(&mut self, store: &CelStore, dest: &mut RasterSurface, frame: usize, options: &FrameRenderOptions) {
        assert!(dest.width() == store.width() && dest.height() == store.height(), "destination does not match the canvas size");
        assert!(frame < store.total_frames(), "frame {} is outside the {}-frame timeline", frame, store.total_frames());

        if options.with_background {
            fill_all(dest, PAPER);
        }

        // Decide which frame actually gets drawn
        let (source_frame, alpha) = if store.has_any_content(frame) {
            (frame, 1.0)
        } else if options.hold_previous_when_empty {
            match (0..frame).rev().find(|prior| store.has_any_content(*prior)) {
                Some(prior) => (prior, options.hold_alpha),
                None        => return,
            }
        } else {
            return;
        };

        self.render_layers(store, dest, source_frame, alpha, options.solo_layer);
    }

    ///
    /// Draws the drawable layers bottom-to-top at one frame
    ///
    pub (crate) fn render_layers(&mut self, store: &CelStore, dest: &mut RasterSurface, frame: usize, alpha: f32, solo: Option<MainLayer>) {
        for layer in MainLayer::DRAWABLE {
            if let Some(solo) = solo {
                if solo != layer {
                    continue;
                }
            }

            let state = store.layer_state(layer);
            if !state.is_visible() {
                continue;
            }

            let surfaces = store.surfaces_at(layer, frame);
            if surfaces.is_empty() {
                continue;
            }

            let opacity = state.opacity() * alpha;

            if state.clip_to_below() && layer.clip_eligible() {
                self.render_clipped(store, dest, layer, frame, opacity, &surfaces);
            } else {
                for surface in surfaces {
                    blend_over(dest, surface, opacity);
                }
            }
        }
    }

    ///
    /// Draws a layer masked by the alpha of the layer beneath it
    ///
    /// A clipped layer with nothing visible beneath it draws nothing at all:
    /// clipping never falls back to unclipped drawing.
    ///
    fn render_clipped(&mut self, store: &CelStore, dest: &mut RasterSurface, layer: MainLayer, frame: usize, opacity: f32, surfaces: &[&RasterSurface]) {
        let below       = layer.layer_below().expect("clip-eligible layers have a layer below");
        let below_state = store.layer_state(below);

        if !below_state.is_visible() {
            return;
        }

        let below_surfaces = store.surfaces_at(below, frame);
        if below_surfaces.is_empty() {
            return;
        }

        let (work, mask) = self.scratch_pair(store.width(), store.height());

        work.clear();
        for surface in surfaces {
            blend_over(work, surface, 1.0);
        }

        mask.clear();
        for surface in below_surfaces {
            blend_over(mask, surface, below_state.opacity());
        }

        mask_alpha(work, mask);
        blend_over(dest, work, opacity);
    }

    ///
    /// The two clip scratch buffers, sized for the current canvas
    ///
    fn scratch_pair(&mut self, width: usize, height: usize) -> (&mut RasterSurface, &mut RasterSurface) {
        let stale = |scratch: &Option<RasterSurface>| {
            scratch.as_ref().map(|s| s.width() != width || s.height() != height).unwrap_or(true)
        };

        if stale(&self.work) { self.work = Some(RasterSurface::new(width, height)); }
        if stale(&self.mask) { self.mask = Some(RasterSurface::new(width, height)); }

        match (&mut self.work, &mut self.mask) {
            (Some(work), Some(mask))    => (work, mask),
            _                           => unreachable!(),
        }
    }
}
