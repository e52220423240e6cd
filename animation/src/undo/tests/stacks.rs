use super::*;

fn commit(log: &mut UndoLog, cel_id: CelId, before: Option<SurfacePixels>, after: Option<SurfacePixels>) {
    log.begin_step(cel_id, before);
    log.mark_dirty();
    log.commit_step(after);
}

#[test]
fn undo_and_redo_move_entries_between_stacks() {
    let mut log = UndoLog::new();

    commit(&mut log, cel(MainLayer::Line, 0), None, Some(snapshot(1)));
    commit(&mut log, cel(MainLayer::Color, 0), None, Some(snapshot(2)));

    let undone = log.undo().unwrap();
    assert!(undone.cel == cel(MainLayer::Color, 0));
    assert!(log.size() == UndoLogSize { undo_depth: 1, redo_depth: 1 });

    let redone = log.redo().unwrap();
    assert!(redone.cel == cel(MainLayer::Color, 0));
    assert!(log.size() == UndoLogSize { undo_depth: 2, redo_depth: 0 });
}

#[test]
fn undo_on_an_empty_log_returns_nothing() {
    let mut log = UndoLog::new();

    assert!(log.undo().is_none());
    assert!(log.redo().is_none());
}

#[test]
fn the_oldest_entry_is_dropped_at_the_limit() {
    let mut log = UndoLog::with_limit(2);

    commit(&mut log, cel(MainLayer::Line, 0), None, Some(snapshot(1)));
    commit(&mut log, cel(MainLayer::Line, 1), None, Some(snapshot(2)));
    commit(&mut log, cel(MainLayer::Line, 2), None, Some(snapshot(3)));

    assert!(log.size().undo_depth == 2);

    // The frame-0 entry fell off the front
    assert!(log.undo().unwrap().cel == cel(MainLayer::Line, 2));
    assert!(log.undo().unwrap().cel == cel(MainLayer::Line, 1));
    assert!(log.undo().is_none());
}

#[test]
fn purge_removes_entries_for_a_pruned_sublayer() {
    let mut log = UndoLog::new();

    commit(&mut log, cel(MainLayer::Line, 0), None, Some(snapshot(1)));
    commit(&mut log, cel(MainLayer::Color, 0), None, Some(snapshot(2)));
    log.undo();

    log.purge(MainLayer::Color, ColorKey::BLACK);

    assert!(log.size() == UndoLogSize { undo_depth: 1, redo_depth: 0 });
    assert!(log.undo().unwrap().cel.layer == MainLayer::Line);
}

#[test]
fn purge_drops_a_matching_pending_step() {
    let mut log = UndoLog::new();

    log.begin_step(cel(MainLayer::Color, 0), Some(snapshot(1)));
    log.mark_dirty();

    log.purge(MainLayer::Color, ColorKey::BLACK);

    assert!(!log.commit_step(Some(snapshot(2))));
}

#[test]
fn migrate_readdresses_entries_to_the_new_layer() {
    let mut log = UndoLog::new();

    commit(&mut log, cel(MainLayer::Color, 0), None, Some(snapshot(1)));
    commit(&mut log, cel(MainLayer::Line, 0), None, Some(snapshot(2)));

    log.migrate(MainLayer::Color, ColorKey::BLACK, MainLayer::Shade);

    log.undo();     // the line entry, untouched
    assert!(log.undo().unwrap().cel.layer == MainLayer::Shade);
}

#[test]
fn snapshots_survive_the_round_trip_bit_for_bit() {
    let mut log = UndoLog::new();

    let before  = snapshot(10);
    let after   = snapshot(20);
    commit(&mut log, cel(MainLayer::Line, 0), Some(before.clone()), Some(after.clone()));

    let undone = log.undo().unwrap();
    assert!(undone.before.as_ref() == Some(&before));
    assert!(undone.after.as_ref() == Some(&after));
}
