use super::cel_animation_core::*;
use crate::traits::*;
use crate::fill::*;
use crate::undo::*;

use flo_raster::*;

use ::desync::*;
use futures::prelude::*;

use std::sync::*;

///
/// The public face of the editor
///
/// Wraps the core in a `Desync` so every operation runs to completion before
/// the next begins, whatever thread the host calls from: the single-writer
/// gesture discipline, enforced structurally. Most operations delegate with
/// `sync`; rendering is also available as a future for hosts that schedule
/// redraws asynchronously.
///
pub struct CelAnimation {
    core: Arc<Desync<CelAnimationCore>>,
}

impl CelAnimation {
    ///
    /// Creates an empty animation with the given canvas size and timeline length
    ///
    pub fn new(width: usize, height: usize, total_frames: usize) -> CelAnimation {
        CelAnimation {
            core: Arc::new(Desync::new(CelAnimationCore::new(width, height, total_frames))),
        }
    }

    pub fn size(&self) -> (usize, usize) {
        self.core.sync(|core| (core.width(), core.height()))
    }

    pub fn total_frames(&self) -> usize {
        self.core.sync(|core| core.total_frames())
    }

    pub fn current_frame(&self) -> usize {
        self.core.sync(|core| core.current_frame())
    }

    pub fn current_layer(&self) -> MainLayer {
        self.core.sync(|core| core.current_layer())
    }

    pub fn set_current_frame(&self, frame: usize) {
        self.core.sync(|core| core.set_current_frame(frame))
    }

    pub fn set_current_layer(&self, layer: MainLayer) {
        self.core.sync(|core| core.set_current_layer(layer))
    }

    pub fn has_content(&self, layer: MainLayer, frame: usize) -> bool {
        self.core.sync(|core| core.has_content(layer, frame))
    }

    pub fn has_any_content(&self, frame: usize) -> bool {
        self.core.sync(|core| core.has_any_content(frame))
    }

    pub fn active_color(&self, layer: MainLayer) -> ColorKey {
        self.core.sync(|core| core.active_color(layer))
    }

    pub fn set_active_color(&self, layer: MainLayer, color: ColorKey) {
        self.core.sync(|core| core.set_active_color(layer, color))
    }

    ///
    /// Runs one drawing gesture against the editor
    ///
    /// The callback receives the gesture's surface and returns whether it
    /// changed anything; begin, dirty-marking and commit happen around it.
    ///
    pub fn stroke<DrawFn>(&self, layer: MainLayer, frame: usize, color: ColorKey, draw: DrawFn) -> bool
    where DrawFn: Send + FnOnce(&mut RasterSurface) -> bool {
        self.core.sync(move |core| {
            core.begin_stroke_key(layer, frame, color);

            let changed = match core.stroke_surface() {
                Some(surface)   => draw(surface),
                None            => false,
            };
            if changed {
                core.mark_dirty();
            }

            core.commit_stroke()
        })
    }

    pub fn fill_region(&self, frame: usize, seeds: &[(i32, i32)], target_layer: MainLayer, options: &FillOptions) -> bool {
        self.core.sync(|core| core.fill_region(frame, seeds, target_layer, options))
    }

    pub fn erase_region(&self, frame: usize, seeds: &[(i32, i32)], target_layer: MainLayer, options: &FillOptions) -> bool {
        self.core.sync(|core| core.erase_region(frame, seeds, target_layer, options))
    }

    pub fn undo(&self) -> bool {
        self.core.sync(|core| core.undo())
    }

    pub fn redo(&self) -> bool {
        self.core.sync(|core| core.redo())
    }

    pub fn undo_log_size(&self) -> UndoLogSize {
        self.core.sync(|core| core.undo_log_size())
    }

    pub fn prune_unused(&self, layer: MainLayer) -> Vec<ColorKey> {
        self.core.sync(|core| core.prune_unused(layer))
    }

    ///
    /// Renders one frame synchronously
    ///
    pub fn render_frame(&self, frame: usize, options: &FrameRenderOptions) -> RasterSurface {
        self.core.sync(|core| {
            let mut dest = RasterSurface::new(core.width(), core.height());
            core.render_frame(&mut dest, frame, options);
            dest
        })
    }

    ///
    /// Renders one frame as a future, for hosts that schedule redraws
    /// asynchronously. Yields `None` only if the editor shut down first.
    ///
    pub fn when_rendered(&self, frame: usize, options: FrameRenderOptions) -> impl Future<Output=Option<RasterSurface>> {
        let core = Arc::clone(&self.core);

        async move {
            core.future_sync(move |core| {
                async move {
                    let mut dest = RasterSurface::new(core.width(), core.height());
                    core.render_frame(&mut dest, frame, &options);
                    dest
                }.boxed()
            }).await.ok()
        }
    }

    ///
    /// The undo/redo depths as a future, for UI state bindings
    ///
    pub fn when_log_size(&self) -> impl Future<Output=Option<UndoLogSize>> {
        let core = Arc::clone(&self.core);

        async move {
            core.future_sync(|core| {
                async move { core.undo_log_size() }.boxed()
            }).await.ok()
        }
    }

    ///
    /// Runs an arbitrary operation against the core
    ///
    pub fn edit<EditFn, Output>(&self, edit: EditFn) -> Output
    where EditFn: Send + FnOnce(&mut CelAnimationCore) -> Output, Output: Send {
        self.core.sync(edit)
    }
}
