use super::undo_entry::*;
use super::undo_log_size::*;
use crate::traits::*;

use flo_raster::*;

use std::collections::{VecDeque};

/// How many gestures are kept by default. Entries hold full-surface snapshots,
/// so this bounds the dominant memory cost of a long editing session.
pub const DEFAULT_UNDO_LIMIT: usize = 32;

///
/// The one uncommitted gesture, between `begin_step` and `commit_step`
///
struct PendingStep {
    /// The cel the gesture is editing
    cel: CelId,

    /// Snapshot taken when the gesture began
    before: Option<SurfacePixels>,

    /// Whether any mutation was reported since the gesture began
    dirty: bool,
}

///
/// The global undo/redo log
///
/// The log stores snapshots and addresses; it never touches surfaces itself.
/// The editor snapshots a cel when a gesture begins, reports mutations with
/// `mark_dirty`, and re-snapshots at commit; `undo`/`redo` hand an entry back
/// for the editor to apply.
///
pub struct UndoLog {
    /// Committed gestures, oldest at the front
    undo: VecDeque<UndoEntry>,

    /// Gestures that have been undone and can be redone, most recent last
    redo: Vec<UndoEntry>,

    /// The open gesture, if any
    pending: Option<PendingStep>,

    /// Maximum number of committed entries kept
    limit: usize,
}

impl UndoLog {
    ///
    /// Creates an empty log with the default depth limit
    ///
    pub fn new() -> UndoLog {
        Self::with_limit(DEFAULT_UNDO_LIMIT)
    }

    ///
    /// Creates an empty log keeping at most `limit` committed gestures
    ///
    pub fn with_limit(limit: usize) -> UndoLog {
        assert!(limit >= 1, "an undo log must keep at least one entry");

        UndoLog {
            undo:       VecDeque::new(),
            redo:       vec![],
            pending:    None,
            limit:      limit,
        }
    }

    ///
    /// Opens a pending step for one cel, with its pixels as they are now
    ///
    /// Gestures are serialized by the input layer, so a still-open step from an
    /// earlier gesture is simply discarded.
    ///
    pub fn begin_step(&mut self, cel: CelId, before: Option<SurfacePixels>) {
        if self.pending.is_some() {
            debug!("discarding an uncommitted step for cel {}", cel);
        }

        self.pending = Some(PendingStep {
            cel:    cel,
            before: before,
            dirty:  false,
        });
    }

    ///
    /// Reports that the pending step's cel has been mutated
    ///
    pub fn mark_dirty(&mut self) {
        if let Some(pending) = self.pending.as_mut() {
            pending.dirty = true;
        }
    }

    ///
    /// The cel of the open step, if one is open
    ///
    pub fn pending_cel(&self) -> Option<CelId> {
        self.pending.as_ref().map(|pending| pending.cel)
    }

    ///
    /// Closes the pending step with the cel's pixels as they are now
    ///
    /// Nothing is recorded unless the step was marked dirty, and a step that was
    /// empty on both sides records nothing either. Returns whether an entry was
    /// pushed; a real push clears the redo stack.
    ///
    pub fn commit_step(&mut self, after: Option<SurfacePixels>) -> bool {
        let pending = match self.pending.take() {
            Some(pending)   => pending,
            None            => return false,
        };

        if !pending.dirty {
            return false;
        }
        if pending.before.is_none() && after.is_none() {
            return false;
        }

        if self.undo.len() >= self.limit {
            self.undo.pop_front();
        }
        self.undo.push_back(UndoEntry {
            cel:    pending.cel,
            before: pending.before,
            after:  after,
        });
        self.redo.clear();

        true
    }

    ///
    /// Abandons the pending step without recording anything
    ///
    pub fn cancel_step(&mut self) {
        self.pending = None;
    }

    ///
    /// Moves the most recent committed entry to the redo stack and returns it
    /// so the caller can restore its `before` snapshot
    ///
    pub fn undo(&mut self) -> Option<UndoEntry> {
        let entry = self.undo.pop_back()?;
        self.redo.push(entry.clone());

        Some(entry)
    }

    ///
    /// Moves the most recently undone entry back to the undo stack and returns
    /// it so the caller can restore its `after` snapshot
    ///
    pub fn redo(&mut self) -> Option<UndoEntry> {
        let entry = self.redo.pop()?;
        self.undo.push_back(entry.clone());

        Some(entry)
    }

    ///
    /// The current stack depths
    ///
    pub fn size(&self) -> UndoLogSize {
        UndoLogSize {
            undo_depth: self.undo.len(),
            redo_depth: self.redo.len(),
        }
    }

    ///
    /// Drops every entry addressed to a (layer, colour) pair, as when the
    /// sublayer has been pruned away
    ///
    pub fn purge(&mut self, layer: MainLayer, color: ColorKey) {
        self.undo.retain(|entry| !(entry.cel.layer == layer && entry.cel.color == color));
        self.redo.retain(|entry| !(entry.cel.layer == layer && entry.cel.color == color));

        if self.pending.as_ref().map(|pending| pending.cel.layer == layer && pending.cel.color == color).unwrap_or(false) {
            self.pending = None;
        }
    }

    ///
    /// Re-addresses every entry for a (layer, colour) pair to another layer,
    /// as when the sublayer has been moved or paired across layers
    ///
    pub fn migrate(&mut self, layer: MainLayer, color: ColorKey, dst: MainLayer) {
        let rewrite = |entry: &mut UndoEntry| {
            if entry.cel.layer == layer && entry.cel.color == color {
                entry.cel.layer = dst;
            }
        };

        self.undo.iter_mut().for_each(rewrite);
        self.redo.iter_mut().for_each(rewrite);

        if let Some(pending) = self.pending.as_mut() {
            if pending.cel.layer == layer && pending.cel.color == color {
                pending.cel.layer = dst;
            }
        }
    }
}
