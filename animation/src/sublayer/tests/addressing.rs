use super::*;

#[test]
fn surfaces_are_created_lazily() {
    let mut store = create_store();

    assert!(store.peek_surface(MainLayer::Line, 0, ColorKey::BLACK).is_none());

    store.get_or_create_surface(MainLayer::Line, 0, ColorKey::BLACK);

    assert!(store.peek_surface(MainLayer::Line, 0, ColorKey::BLACK).is_some());
    assert!(store.peek_surface(MainLayer::Line, 1, ColorKey::BLACK).is_none());
}

#[test]
fn different_spellings_reach_the_same_surface() {
    let mut store = create_store();

    let key_a = ColorKey::parse("#FFF").unwrap();
    let key_b = ColorKey::parse("rgb(255, 255, 255)").unwrap();

    dab(&mut store, MainLayer::Color, 0, key_a, 3, 3);

    // The second spelling must find the pixel the first one painted
    assert!(store.peek_surface(MainLayer::Color, 0, key_b).map(|s| s.alpha_at(3, 3)) == Some(255));
    assert!(store.layer_state(MainLayer::Color).suborder().len() == 1);
}

#[test]
fn peek_never_creates() {
    let mut store = create_store();

    store.peek_surface(MainLayer::Shade, 2, ColorKey::WHITE);
    store.peek_surface_mut(MainLayer::Shade, 2, ColorKey::WHITE);

    assert!(store.layer_state(MainLayer::Shade).suborder().is_empty());
}

#[test]
fn content_aggregates_across_sublayers_and_layers() {
    let mut store = create_store();

    assert!(!store.has_any_content(0));

    dab(&mut store, MainLayer::Shade, 0, ColorKey::from_channels(80, 80, 80), 1, 1);

    assert!(store.has_content(MainLayer::Shade, 0));
    assert!(!store.has_content(MainLayer::Line, 0));
    assert!(store.has_any_content(0));
    assert!(!store.has_any_content(1));
}

#[test]
fn suborder_tracks_creation_order() {
    let mut store = create_store();

    let red     = ColorKey::from_channels(255, 0, 0);
    let green   = ColorKey::from_channels(0, 255, 0);

    dab(&mut store, MainLayer::Color, 0, red, 0, 0);
    dab(&mut store, MainLayer::Color, 0, green, 1, 1);

    assert!(store.layer_state(MainLayer::Color).suborder() == &[red, green]);
}

#[test]
fn clear_cel_frees_the_surface() {
    let mut store = create_store();

    dab(&mut store, MainLayer::Line, 1, ColorKey::BLACK, 5, 5);

    assert!(store.clear_cel(MainLayer::Line, 1, ColorKey::BLACK));
    assert!(store.peek_surface(MainLayer::Line, 1, ColorKey::BLACK).is_none());

    // A second clear has nothing left to free
    assert!(!store.clear_cel(MainLayer::Line, 1, ColorKey::BLACK));
}

#[test]
fn snapshot_and_restore_round_trip() {
    let mut store = create_store();

    dab(&mut store, MainLayer::Fill, 0, ColorKey::WHITE, 7, 7);
    let saved = store.snapshot_cel(MainLayer::Fill, 0, ColorKey::WHITE);
    assert!(saved.is_some());

    store.clear_cel(MainLayer::Fill, 0, ColorKey::WHITE);
    store.restore_cel(MainLayer::Fill, 0, ColorKey::WHITE, saved.as_ref());

    assert!(store.peek_surface(MainLayer::Fill, 0, ColorKey::WHITE).map(|s| s.alpha_at(7, 7)) == Some(255));
}

#[test]
fn empty_cels_snapshot_as_none() {
    let mut store = create_store();

    // Allocated but blank counts as empty too
    store.get_or_create_surface(MainLayer::Color, 0, ColorKey::BLACK);

    assert!(store.snapshot_cel(MainLayer::Color, 0, ColorKey::BLACK).is_none());
}

#[test]
fn restoring_empty_never_allocates() {
    let mut store = create_store();

    store.restore_cel(MainLayer::Color, 0, ColorKey::BLACK, None);

    assert!(store.peek_surface(MainLayer::Color, 0, ColorKey::BLACK).is_none());
    assert!(store.layer_state(MainLayer::Color).suborder().is_empty());
}

#[test]
#[should_panic]
fn out_of_range_frame_is_a_programmer_error() {
    let mut store = create_store();
    store.get_or_create_surface(MainLayer::Line, 99, ColorKey::BLACK);
}

#[test]
#[should_panic]
fn paper_cannot_hold_cels() {
    let mut store = create_store();
    store.get_or_create_surface(MainLayer::Paper, 0, ColorKey::BLACK);
}
