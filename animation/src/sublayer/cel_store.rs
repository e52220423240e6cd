use super::sublayer::*;
use super::layer_state::*;
use crate::traits::*;

use flo_raster::*;

use itertools::{Itertools};

///
/// The sparse store of every cel in the animation
///
/// Addressing is always by (layer, frame, colour). Surfaces live in a shared
/// pool and sublayers are created lazily by `get_or_create_surface`; the peek
/// operations never create anything, which is what lets tools like the eraser
/// guarantee they only ever touch surfaces that already exist.
///
pub struct CelStore {
    /// The arena holding every allocated surface
    pool: SurfacePool,

    /// State for the drawable layers, indexed by stacking order
    layers: Vec<LayerState>,

    /// Length of the timeline; every sublayer has exactly this many frame slots
    total_frames: usize,
}

impl CelStore {
    ///
    /// Creates a store for a canvas of the given pixel size and timeline length
    ///
    pub fn new(width: usize, height: usize, total_frames: usize) -> CelStore {
        assert!(total_frames >= 1, "a timeline must have at least one frame");

        CelStore {
            pool:           SurfacePool::new(width, height),
            layers:         MainLayer::DRAWABLE.iter().map(|layer| LayerState::new(*layer)).collect(),
            total_frames:   total_frames,
        }
    }

    pub fn width(&self) -> usize { self.pool.surface_width() }
    pub fn height(&self) -> usize { self.pool.surface_height() }
    pub fn total_frames(&self) -> usize { self.total_frames }

    ///
    /// Panics if an address names the paper layer or a frame off the timeline:
    /// both are programmer errors, never user-reachable states
    ///
    fn assert_addressable(&self, layer: MainLayer, frame: usize) {
        assert!(layer.is_drawable(), "the paper background cannot hold cels");
        assert!(frame < self.total_frames, "frame {} is outside the {}-frame timeline", frame, self.total_frames);
    }

    ///
    /// The state of one drawable layer
    ///
    pub fn layer_state(&self, layer: MainLayer) -> &LayerState {
        &self.layers[layer.stacking_order()]
    }

    ///
    /// Mutable state of one drawable layer
    ///
    pub fn layer_state_mut(&mut self, layer: MainLayer) -> &mut LayerState {
        &mut self.layers[layer.stacking_order()]
    }

    ///
    /// The colour new strokes on a layer will target
    ///
    pub fn active_color(&self, layer: MainLayer) -> ColorKey {
        self.layer_state(layer).active_color
    }

    ///
    /// Points new strokes on a layer at a colour. The sublayer itself is not
    /// created until something is actually drawn.
    ///
    pub fn set_active_color(&mut self, layer: MainLayer, color: ColorKey) {
        self.layer_state_mut(layer).active_color = color;
    }

    ///
    /// The surface for a cel, creating the sublayer and the surface as needed.
    /// Never fails for a valid address.
    ///
    pub fn get_or_create_surface(&mut self, layer: MainLayer, frame: usize, color: ColorKey) -> &mut RasterSurface {
        self.assert_addressable(layer, frame);

        let total_frames    = self.total_frames;
        let state           = &mut self.layers[layer.stacking_order()];

        if !state.sublayers.contains_key(&color) {
            state.sublayers.insert(color, Sublayer::new(color, total_frames));
            state.suborder.push(color);
        }

        let sublayer    = state.sublayers.get_mut(&color).expect("sublayer was just created");
        let handle      = match sublayer.frames[frame] {
            Some(handle)    => handle,
            None            => {
                let handle = self.pool.allocate();
                sublayer.frames[frame] = Some(handle);
                handle
            }
        };

        self.pool.surface_mut(handle)
    }

    ///
    /// The surface for a cel if it has been allocated. Never creates anything.
    ///
    pub fn peek_surface(&self, layer: MainLayer, frame: usize, color: ColorKey) -> Option<&RasterSurface> {
        self.peek_handle(layer, frame, color).map(|handle| self.pool.surface(handle))
    }

    ///
    /// Mutable access to an already-allocated surface. Never creates anything.
    ///
    pub fn peek_surface_mut(&mut self, layer: MainLayer, frame: usize, color: ColorKey) -> Option<&mut RasterSurface> {
        match self.peek_handle(layer, frame, color) {
            Some(handle)    => Some(self.pool.surface_mut(handle)),
            None            => None,
        }
    }

    fn peek_handle(&self, layer: MainLayer, frame: usize, color: ColorKey) -> Option<SurfaceHandle> {
        self.assert_addressable(layer, frame);
        self.layer_state(layer).sublayers.get(&color).and_then(|sublayer| sublayer.frames[frame])
    }

    ///
    /// Flags a cel as containing content without a pixel scan
    ///
    pub fn mark_has_content(&mut self, layer: MainLayer, frame: usize, color: ColorKey) {
        if let Some(surface) = self.peek_surface(layer, frame, color) {
            surface.mark_has_content();
        }
    }

    ///
    /// True if any sublayer of a layer has visible pixels at a frame
    ///
    pub fn has_content(&self, layer: MainLayer, frame: usize) -> bool {
        self.assert_addressable(layer, frame);

        let state = self.layer_state(layer);
        state.sublayers.values().any(|sublayer| {
            sublayer.frames[frame]
                .map(|handle| self.pool.surface(handle).has_content())
                .unwrap_or(false)
        })
    }

    ///
    /// True if any layer has visible pixels at a frame
    ///
    pub fn has_any_content(&self, frame: usize) -> bool {
        MainLayer::DRAWABLE.iter().any(|layer| self.has_content(*layer, frame))
    }

    ///
    /// The surfaces with content for one layer at one frame, in stacking order
    ///
    pub fn surfaces_at(&self, layer: MainLayer, frame: usize) -> Vec<&RasterSurface> {
        self.assert_addressable(layer, frame);

        let state = self.layer_state(layer);
        state.suborder.iter()
            .filter_map(|color| state.sublayers.get(color))
            .filter_map(|sublayer| sublayer.frames[frame])
            .map(|handle| self.pool.surface(handle))
            .filter(|surface| surface.has_content())
            .collect()
    }

    ///
    /// Every allocated cel with content, for the persistence collaborator
    ///
    pub fn cels_with_content(&self) -> Vec<(CelId, &RasterSurface)> {
        let mut cels = vec![];

        for state in self.layers.iter() {
            for color in state.suborder.iter() {
                let sublayer = match state.sublayers.get(color) {
                    Some(sublayer)  => sublayer,
                    None            => continue,
                };

                for (frame, handle) in sublayer.allocated_frames() {
                    let surface = self.pool.surface(handle);
                    if surface.has_content() {
                        cels.push((CelId::new(state.layer, frame, *color), surface));
                    }
                }
            }
        }

        cels
    }

    ///
    /// Frees the pixels of one cel, returning whether anything was freed
    ///
    pub fn clear_cel(&mut self, layer: MainLayer, frame: usize, color: ColorKey) -> bool {
        self.assert_addressable(layer, frame);

        let state   = &mut self.layers[layer.stacking_order()];
        let slot    = state.sublayers.get_mut(&color).map(|sublayer| sublayer.frames[frame].take());

        match slot {
            Some(Some(handle))  => { self.pool.release(handle); true }
            _                   => false,
        }
    }

    ///
    /// Takes a snapshot of a cel's pixels, or None if the cel is empty
    ///
    pub fn snapshot_cel(&self, layer: MainLayer, frame: usize, color: ColorKey) -> Option<SurfacePixels> {
        self.peek_surface(layer, frame, color)
            .filter(|surface| surface.has_content())
            .map(|surface| surface.snapshot())
    }

    ///
    /// Restores a snapshot onto a cel. `None` restores 'empty', which only ever
    /// clears an existing surface and never allocates one. A snapshot whose
    /// dimensions no longer match the canvas degrades to clearing the cel.
    ///
    pub fn restore_cel(&mut self, layer: MainLayer, frame: usize, color: ColorKey, snapshot: Option<&SurfacePixels>) {
        match snapshot {
            None => {
                if let Some(surface) = self.peek_surface_mut(layer, frame, color) {
                    surface.clear();
                }
            }

            Some(pixels) => {
                let (width, height) = (self.width(), self.height());

                let surface = self.get_or_create_surface(layer, frame, color);
                if !surface.restore(pixels) {
                    warn!("discarded a {}x{} snapshot for cel {}: the canvas is now {}x{}",
                        pixels.width(), pixels.height(), CelId::new(layer, frame, color), width, height);
                }
            }
        }
    }

    ///
    /// Removes every sublayer of a layer that has no visible pixel on any frame,
    /// returning the removed colours so the caller can purge their history
    ///
    /// The cached content flags are trusted when they say 'empty'; a flag that
    /// says 'has content' is re-verified by a pixel scan, since `mark_has_content`
    /// can leave it stale.
    ///
    pub fn prune_unused(&mut self, layer: MainLayer) -> Vec<ColorKey> {
        let layer_idx   = layer.stacking_order();
        let mut removed = vec![];

        let keys = self.layers[layer_idx].suborder.clone();
        for color in keys {
            let has_content = {
                let state       = &self.layers[layer_idx];
                let sublayer    = match state.sublayers.get(&color) {
                    Some(sublayer)  => sublayer,
                    None            => continue,
                };

                sublayer.allocated_frames().any(|(_, handle)| {
                    let surface = self.pool.surface(handle);
                    surface.has_content() && surface.verify_content()
                })
            };

            if !has_content {
                self.remove_sublayer(layer, color);
                removed.push(color);
            }
        }

        if !removed.is_empty() {
            debug!("pruned {} unused sublayer(s) from the {} layer", removed.len(), layer);

            // Repoint the active colour if its sublayer went away
            let state = &mut self.layers[layer_idx];
            if removed.contains(&state.active_color) {
                state.active_color = state.suborder.last().copied().unwrap_or_else(|| layer.default_color());
            }
        }

        removed
    }

    ///
    /// Removes one sublayer outright, releasing its surfaces and pairing links
    ///
    fn remove_sublayer(&mut self, layer: MainLayer, color: ColorKey) {
        let state = &mut self.layers[layer.stacking_order()];

        let sublayer = match state.sublayers.remove(&color) {
            Some(sublayer)  => sublayer,
            None            => return,
        };
        state.suborder.retain(|key| *key != color);

        // Unhook the pairing relation in both directions
        if let Some(parent) = sublayer.parent {
            if let Some(parent) = state.sublayers.get_mut(&parent) {
                parent.children.retain(|key| *key != color);
            }
        }
        for child in sublayer.children.iter() {
            if let Some(child) = state.sublayers.get_mut(child) {
                child.parent = None;
            }
        }

        for (_, handle) in sublayer.allocated_frames() {
            self.pool.release(handle);
        }
    }

    ///
    /// Moves a sublayer to another layer, surfaces and all
    ///
    /// Fails if the destination already has a sublayer of this colour. Pairing
    /// links are detached on the way out: children are released to the top level
    /// and the old parent forgets the moved sublayer.
    ///
    pub fn move_to_layer(&mut self, src: MainLayer, color: ColorKey, dst: MainLayer) -> Result<(), StoreError> {
        assert!(src.is_drawable() && dst.is_drawable(), "the paper background cannot hold cels");

        if src == dst {
            return Ok(());
        }
        if !self.layer_state(src).sublayers.contains_key(&color) {
            return Err(StoreError::UnknownKey(src, color));
        }
        if self.layer_state(dst).sublayers.contains_key(&color) {
            return Err(StoreError::KeyAlreadyExists(dst, color));
        }

        let mut sublayer = self.detach_sublayer(src, color);
        sublayer.parent = None;
        sublayer.children.clear();

        let dst_state = &mut self.layers[dst.stacking_order()];
        dst_state.sublayers.insert(color, sublayer);
        dst_state.suborder.push(color);

        Ok(())
    }

    ///
    /// Nests a sublayer under a parent sublayer, moving it across layers first
    /// when the parent lives on a different one
    ///
    pub fn pair_under_parent(&mut self, src: MainLayer, color: ColorKey, dst: MainLayer, parent: ColorKey) -> Result<(), StoreError> {
        assert!(src.is_drawable() && dst.is_drawable(), "the paper background cannot hold cels");

        if color == parent {
            return Err(StoreError::PairingCycle(color, parent));
        }
        if !self.layer_state(src).sublayers.contains_key(&color) {
            return Err(StoreError::UnknownKey(src, color));
        }
        if !self.layer_state(dst).sublayers.contains_key(&parent) {
            return Err(StoreError::UnknownKey(dst, parent));
        }
        if src != dst && self.layer_state(dst).sublayers.contains_key(&color) {
            return Err(StoreError::KeyAlreadyExists(dst, color));
        }

        // Walking up from the intended parent must not reach the sublayer being paired
        let mut ancestor = Some(parent);
        while let Some(key) = ancestor {
            if key == color {
                return Err(StoreError::PairingCycle(color, parent));
            }
            ancestor = self.layer_state(dst).sublayers.get(&key).and_then(|sublayer| sublayer.parent);
        }

        let mut sublayer = self.detach_sublayer(src, color);
        sublayer.parent = Some(parent);
        sublayer.children.clear();

        let dst_state = &mut self.layers[dst.stacking_order()];
        dst_state.sublayers.insert(color, sublayer);
        dst_state.suborder.push(color);
        if let Some(parent) = dst_state.sublayers.get_mut(&parent) {
            parent.children.push(color);
        }

        Ok(())
    }

    ///
    /// Removes a sublayer from a layer without releasing its surfaces, unhooking
    /// any pairing links that refer to it
    ///
    fn detach_sublayer(&mut self, layer: MainLayer, color: ColorKey) -> Sublayer {
        let state       = &mut self.layers[layer.stacking_order()];
        let sublayer    = state.sublayers.remove(&color).expect("caller checked the sublayer exists");

        state.suborder.retain(|key| *key != color);

        if let Some(parent) = sublayer.parent {
            if let Some(parent) = state.sublayers.get_mut(&parent) {
                parent.children.retain(|key| *key != color);
            }
        }
        for child in sublayer.children.iter() {
            if let Some(child) = state.sublayers.get_mut(child) {
                child.parent = None;
            }
        }

        sublayer
    }

    ///
    /// Folds or unfolds a sublayer's children in the UI
    ///
    pub fn set_collapsed(&mut self, layer: MainLayer, color: ColorKey, collapsed: bool) -> Result<(), StoreError> {
        match self.layers[layer.stacking_order()].sublayers.get_mut(&color) {
            Some(sublayer)  => { sublayer.collapsed = collapsed; Ok(()) }
            None            => Err(StoreError::UnknownKey(layer, color)),
        }
    }

    ///
    /// Grows or shrinks the timeline, preserving frame content by index.
    /// Shrinking frees the surfaces of the dropped frames.
    ///
    pub fn set_total_frames(&mut self, total_frames: usize) {
        assert!(total_frames >= 1, "a timeline must have at least one frame");

        let mut released = vec![];
        for state in self.layers.iter_mut() {
            for sublayer in state.sublayers.values_mut() {
                released.extend(sublayer.frames.drain(total_frames.min(sublayer.frames.len())..).flatten());
                sublayer.frames.resize(total_frames, None);
            }
        }

        for handle in released {
            self.pool.release(handle);
        }

        self.total_frames = total_frames;
    }

    ///
    /// Inserts an empty frame before `at`, shifting every layer's later cels up
    ///
    pub fn insert_frame(&mut self, at: usize) {
        assert!(at <= self.total_frames, "frame {} is outside the {}-frame timeline", at, self.total_frames);

        for state in self.layers.iter_mut() {
            for sublayer in state.sublayers.values_mut() {
                sublayer.frames.insert(at, None);
            }
        }

        self.total_frames += 1;
    }

    ///
    /// Deletes frame `at` from every layer, freeing its cels
    ///
    pub fn delete_frame(&mut self, at: usize) -> Result<(), StoreError> {
        self.assert_addressable(MainLayer::Line, at);

        if self.total_frames == 1 {
            return Err(StoreError::CannotDeleteLastFrame);
        }

        let mut released = vec![];
        for state in self.layers.iter_mut() {
            for sublayer in state.sublayers.values_mut() {
                released.extend(sublayer.frames.remove(at));
            }
        }

        for handle in released {
            self.pool.release(handle);
        }

        self.total_frames -= 1;
        Ok(())
    }

    ///
    /// Reorders a layer's sublayers. Unknown keys are dropped, duplicates keep
    /// their first position, and keys missing from the new order keep their
    /// relative order at the bottom of the stack.
    ///
    pub fn set_suborder(&mut self, layer: MainLayer, order: &[ColorKey]) {
        let state = &mut self.layers[layer.stacking_order()];

        let known       = order.iter().copied().unique().filter(|key| state.sublayers.contains_key(key)).collect::<Vec<_>>();
        let mut result  = state.suborder.iter().copied().filter(|key| !known.contains(key)).collect::<Vec<_>>();
        result.extend(known);

        state.suborder = result;
    }

    ///
    /// Restores a cel from the persistence collaborator
    ///
    /// The colour arrives as the string the project file stored, which may be a
    /// legacy spelling: it is re-normalized here, and when two stored spellings
    /// collapse to one key the second cel is composited onto the first rather
    /// than replacing it.
    ///
    pub fn composite_restored_cel(&mut self, layer: MainLayer, frame: usize, color_spec: &str, pixels: &SurfacePixels) -> bool {
        let color = match ColorKey::parse(color_spec) {
            Ok(color)   => color,
            Err(err)    => {
                warn!("skipped a stored cel on the {} layer: {}", layer, err);
                return false;
            }
        };

        if pixels.width() != self.width() || pixels.height() != self.height() {
            warn!("skipped a {}x{} stored cel for {}: the canvas is {}x{}",
                pixels.width(), pixels.height(), CelId::new(layer, frame, color),
                self.width(), self.height());
            return false;
        }

        let (width, height) = (self.width(), self.height());
        let surface         = self.get_or_create_surface(layer, frame, color);

        if surface.has_content() {
            // A second spelling of the same colour: merge rather than shadow
            let mut incoming = RasterSurface::new(width, height);
            incoming.restore(pixels);
            blend_over(surface, &incoming, 1.0);
        } else {
            surface.restore(pixels);
        }

        true
    }
}
