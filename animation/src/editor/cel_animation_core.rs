use crate::traits::*;
use crate::sublayer::*;
use crate::compositor::*;
use crate::fill::*;
use crate::undo::*;
use crate::storage::*;
use crate::serializer::*;

use flo_raster::*;

///
/// The editor core: every editing operation, run synchronously
///
/// Tools follow one protocol around a user gesture: `begin_stroke`, mutate the
/// surface from `stroke_surface` (calling `mark_dirty`), then `commit_stroke`
/// or `cancel_stroke`. The fill and erase operations run that protocol
/// internally, once per cel they touch.
///
pub struct CelAnimationCore {
    /// The cels themselves
    store: CelStore,

    /// The global undo/redo log
    undo_log: UndoLog,

    /// Renders frames of the store
    compositor: Compositor,

    /// The frame edits currently apply to
    current_frame: usize,

    /// The layer edits currently apply to
    current_layer: MainLayer,

    /// Project display name
    name: String,

    /// Playback rate in frames per second
    frame_rate: f64,
}

impl CelAnimationCore {
    ///
    /// Creates an empty animation with the given canvas size and timeline length
    ///
    pub fn new(width: usize, height: usize, total_frames: usize) -> CelAnimationCore {
        CelAnimationCore {
            store:          CelStore::new(width, height, total_frames),
            undo_log:       UndoLog::new(),
            compositor:     Compositor::new(),
            current_frame:  0,
            current_layer:  MainLayer::Line,
            name:           "Untitled".to_string(),
            frame_rate:     12.0,
        }
    }

    pub fn width(&self) -> usize { self.store.width() }
    pub fn height(&self) -> usize { self.store.height() }
    pub fn total_frames(&self) -> usize { self.store.total_frames() }
    pub fn current_frame(&self) -> usize { self.current_frame }
    pub fn current_layer(&self) -> MainLayer { self.current_layer }
    pub fn name(&self) -> &str { &self.name }
    pub fn frame_rate(&self) -> f64 { self.frame_rate }

    pub fn set_name(&mut self, name: &str) { self.name = name.to_string(); }
    pub fn set_frame_rate(&mut self, frame_rate: f64) { self.frame_rate = frame_rate; }

    ///
    /// Read access to the store, for UI queries
    ///
    pub fn store(&self) -> &CelStore {
        &self.store
    }

    pub fn set_current_frame(&mut self, frame: usize) {
        assert!(frame < self.store.total_frames(), "frame {} is outside the {}-frame timeline", frame, self.store.total_frames());
        self.current_frame = frame;
    }

    pub fn set_current_layer(&mut self, layer: MainLayer) {
        assert!(layer.is_drawable(), "the paper background cannot be edited");
        self.current_layer = layer;
    }

    ///
    /// The surface for a cel, creating it if needed
    ///
    pub fn get_surface(&mut self, layer: MainLayer, frame: usize, color: ColorKey) -> &mut RasterSurface {
        self.store.get_or_create_surface(layer, frame, color)
    }

    pub fn has_content(&self, layer: MainLayer, frame: usize) -> bool {
        self.store.has_content(layer, frame)
    }

    pub fn has_any_content(&self, frame: usize) -> bool {
        self.store.has_any_content(frame)
    }

    pub fn active_color(&self, layer: MainLayer) -> ColorKey {
        self.store.active_color(layer)
    }

    pub fn set_active_color(&mut self, layer: MainLayer, color: ColorKey) {
        self.store.set_active_color(layer, color);
    }

    ///
    /// Opens a history step for one gesture on a cel
    ///
    /// The colour arrives as whatever the UI has (a palette string, a stored
    /// spelling): if it cannot be normalized there is nothing this gesture can
    /// meaningfully undo, so no step opens and the gesture proceeds unrecorded.
    ///
    pub fn begin_stroke(&mut self, layer: MainLayer, frame: usize, color_spec: &str) -> bool {
        let color = match ColorKey::parse(color_spec) {
            Ok(color)   => color,
            Err(err)    => {
                warn!("gesture will not be undoable: {}", err);
                return false;
            }
        };

        self.begin_stroke_key(layer, frame, color);
        true
    }

    ///
    /// Opens a history step for a colour that is already normalized
    ///
    pub fn begin_stroke_key(&mut self, layer: MainLayer, frame: usize, color: ColorKey) {
        let cel     = CelId::new(layer, frame, color);
        let before  = self.store.snapshot_cel(layer, frame, color);

        self.undo_log.begin_step(cel, before);
    }

    ///
    /// The surface of the open gesture's cel, creating it on first use
    ///
    pub fn stroke_surface(&mut self) -> Option<&mut RasterSurface> {
        let cel = self.undo_log.pending_cel()?;
        Some(self.store.get_or_create_surface(cel.layer, cel.frame, cel.color))
    }

    ///
    /// Reports that the gesture mutated its cel
    ///
    pub fn mark_dirty(&mut self) {
        self.undo_log.mark_dirty();
    }

    ///
    /// Closes the open gesture, recording it if it changed anything
    ///
    pub fn commit_stroke(&mut self) -> bool {
        let after = match self.undo_log.pending_cel() {
            Some(cel)   => self.store.snapshot_cel(cel.layer, cel.frame, cel.color),
            None        => None,
        };

        self.undo_log.commit_step(after)
    }

    ///
    /// Abandons the open gesture without recording anything
    ///
    pub fn cancel_stroke(&mut self) {
        self.undo_log.cancel_step();
    }

    ///
    /// Undoes the most recent gesture, switching the editing context to where
    /// the change happened so it is visible
    ///
    pub fn undo(&mut self) -> bool {
        let entry = match self.undo_log.undo() {
            Some(entry) => entry,
            None        => return false,
        };

        self.current_frame = entry.cel.frame;
        self.current_layer = entry.cel.layer;
        self.store.restore_cel(entry.cel.layer, entry.cel.frame, entry.cel.color, entry.before.as_ref());

        true
    }

    ///
    /// Redoes the most recently undone gesture
    ///
    pub fn redo(&mut self) -> bool {
        let entry = match self.undo_log.redo() {
            Some(entry) => entry,
            None        => return false,
        };

        self.current_frame = entry.cel.frame;
        self.current_layer = entry.cel.layer;
        self.store.restore_cel(entry.cel.layer, entry.cel.frame, entry.cel.color, entry.after.as_ref());

        true
    }

    pub fn undo_log_size(&self) -> UndoLogSize {
        self.undo_log.size()
    }

    ///
    /// Region-fills the enclosed areas under the seed points into the target
    /// layer's active colour. Returns whether anything changed; a fill that
    /// touches nothing records no history and creates no sublayer.
    ///
    pub fn fill_region(&mut self, frame: usize, seeds: &[(i32, i32)], target_layer: MainLayer, options: &FillOptions) -> bool {
        let region  = RegionMap::build(&self.store, frame, options);
        let flood   = flood_from_seeds(&region, seeds);

        if flood.is_empty() {
            return false;
        }

        let color = self.store.active_color(target_layer);

        self.begin_stroke_key(target_layer, frame, color);
        self.mark_dirty();
        apply_fill(&mut self.store, target_layer, frame, color, &flood);
        self.commit_stroke();

        true
    }

    ///
    /// Region-erases the enclosed areas under the seed points from every
    /// sublayer of the target layer with pixels under the seeds. Commits one
    /// history entry per cel it clears, then prunes the layer.
    ///
    pub fn erase_region(&mut self, frame: usize, seeds: &[(i32, i32)], target_layer: MainLayer, options: &FillOptions) -> bool {
        let region  = RegionMap::build(&self.store, frame, options);
        let flood   = flood_from_seeds(&region, seeds);

        if flood.is_empty() {
            return false;
        }

        let mut changed = false;
        for color in erase_matches(&self.store, target_layer, frame, &flood) {
            self.begin_stroke_key(target_layer, frame, color);

            if apply_erase(&mut self.store, target_layer, frame, color, &flood) {
                self.mark_dirty();
                changed = true;
            }
            self.commit_stroke();
        }

        if changed {
            self.prune_unused(target_layer);
        }

        changed
    }

    ///
    /// Removes content-free sublayers from a layer, along with their history
    ///
    pub fn prune_unused(&mut self, layer: MainLayer) -> Vec<ColorKey> {
        let removed = self.store.prune_unused(layer);

        for color in removed.iter() {
            self.undo_log.purge(layer, *color);
        }

        removed
    }

    ///
    /// Moves a sublayer to another layer, taking its history with it
    ///
    pub fn move_sublayer(&mut self, src: MainLayer, color: ColorKey, dst: MainLayer) -> Result<(), StoreError> {
        self.store.move_to_layer(src, color, dst)?;
        self.undo_log.migrate(src, color, dst);

        Ok(())
    }

    ///
    /// Pairs a sublayer under a parent, taking its history along if it crossed layers
    ///
    pub fn pair_sublayer(&mut self, src: MainLayer, color: ColorKey, dst: MainLayer, parent: ColorKey) -> Result<(), StoreError> {
        self.store.pair_under_parent(src, color, dst, parent)?;
        if src != dst {
            self.undo_log.migrate(src, color, dst);
        }

        Ok(())
    }

    ///
    /// Frees the pixels of the active colour's cel at the current frame
    ///
    pub fn clear_active_cel(&mut self) -> bool {
        let layer = self.current_layer;
        let color = self.store.active_color(layer);
        let frame = self.current_frame;

        self.begin_stroke_key(layer, frame, color);

        let changed = self.store.clear_cel(layer, frame, color);
        if changed {
            self.mark_dirty();
        }
        self.commit_stroke();

        if changed {
            self.prune_unused(layer);
        }
        changed
    }

    pub fn set_layer_opacity(&mut self, layer: MainLayer, opacity: f32) {
        self.store.layer_state_mut(layer).set_opacity(opacity);
    }

    pub fn toggle_layer_visible(&mut self, layer: MainLayer) {
        self.store.layer_state_mut(layer).toggle_visible();
    }

    pub fn set_clip_to_below(&mut self, layer: MainLayer, clip: bool) {
        self.store.layer_state_mut(layer).set_clip_to_below(clip);
    }

    ///
    /// Renders one frame into a destination surface
    ///
    pub fn render_frame(&mut self, dest: &mut RasterSurface, frame: usize, options: &FrameRenderOptions) {
        self.compositor.render_frame(&self.store, dest, frame, options);
    }

    ///
    /// Overlays the onion skin for one frame onto a destination surface
    ///
    pub fn render_onion_skin(&mut self, dest: &mut RasterSurface, frame: usize, options: &OnionSkinOptions) {
        self.compositor.render_onion_skin(&self.store, dest, frame, options);
    }

    ///
    /// Resizes the timeline, keeping the current frame on it
    ///
    pub fn set_total_frames(&mut self, total_frames: usize) {
        self.store.set_total_frames(total_frames);
        self.current_frame = self.current_frame.min(total_frames - 1);
    }

    pub fn insert_frame(&mut self, at: usize) {
        self.store.insert_frame(at);
        if self.current_frame >= at {
            self.current_frame += 1;
        }
    }

    pub fn delete_frame(&mut self, at: usize) -> Result<(), StoreError> {
        self.store.delete_frame(at)?;
        self.current_frame = self.current_frame.min(self.store.total_frames() - 1);

        Ok(())
    }

    ///
    /// Writes the whole project through the persistence collaborator
    ///
    pub fn save_project(&self, storage: &mut dyn CelStorage) -> Result<(), StorageError> {
        let properties  = ProjectProperties::from_store(&self.store, &self.name, self.frame_rate);
        let json        = properties.to_json().map_err(|_| StorageError::General)?;

        let mut commands = vec![
            CelStorageCommand::DeleteEverything,
            CelStorageCommand::WriteProjectProperties(json),
        ];

        for (cel, surface) in self.store.cels_with_content() {
            commands.push(CelStorageCommand::WriteCel {
                layer:  cel.layer.stacking_order(),
                color:  cel.color.to_string(),
                frame:  cel.frame,
                data:   encode_cel_blob(&surface.snapshot()),
            });
        }

        let failed = storage.run_commands(commands).into_iter().any(|response| match response {
            CelStorageResponse::Updated => false,
            _                           => true,
        });

        if failed { Err(StorageError::General) } else { Ok(()) }
    }

    ///
    /// Replaces this animation with the one in the persistence collaborator
    ///
    /// Stored colour spellings are re-normalized on the way in (cels whose
    /// spellings collapse to one key are merged), undecodable cels are skipped
    /// with a warning, and every layer is pruned afterwards so the restored
    /// project starts consistent. The undo log does not survive a load.
    ///
    pub fn load_project(&mut self, storage: &mut dyn CelStorage) -> Result<(), StorageError> {
        let responses = storage.run_commands(vec![
            CelStorageCommand::ReadProjectProperties,
            CelStorageCommand::ReadAllCels,
        ]);

        // The properties must come back first for the store to be rebuilt
        let properties = responses.iter()
            .find_map(|response| match response {
                CelStorageResponse::ProjectProperties(json) => Some(json),
                _                                           => None,
            })
            .ok_or(StorageError::General)?;
        let properties = ProjectProperties::from_json(properties).map_err(|_| StorageError::General)?;

        let mut store = CelStore::new(properties.width, properties.height, properties.total_frames.max(1));

        for response in responses.iter() {
            if let CelStorageResponse::Cel { layer, color, frame, data } = response {
                let layer = match MainLayer::from_stacking_order(*layer) {
                    Some(layer) => layer,
                    None        => {
                        warn!("skipped a stored cel for unknown layer index {}", layer);
                        continue;
                    }
                };
                if *frame >= store.total_frames() {
                    warn!("skipped a stored cel at frame {} beyond the timeline", frame);
                    continue;
                }

                match decode_cel_blob(data) {
                    Some(pixels)    => { store.composite_restored_cel(layer, *frame, color, &pixels); }
                    None            => { warn!("skipped an undecodable cel blob for the {} layer", layer); }
                }
            }
        }

        // Layer settings apply last so the restored suborder keys exist
        properties.apply_layer_states(&mut store);

        self.store          = store;
        self.undo_log       = UndoLog::new();
        self.name           = properties.name;
        self.frame_rate     = properties.frame_rate;
        self.current_frame  = 0;

        for layer in MainLayer::DRAWABLE {
            self.prune_unused(layer);
        }

        Ok(())
    }
}
