use super::*;

#[test]
fn blank_sublayers_are_pruned() {
    let mut store = create_store();

    // Created by a tool that then never drew anything
    store.get_or_create_surface(MainLayer::Color, 0, ColorKey::from_channels(255, 0, 0));

    let removed = store.prune_unused(MainLayer::Color);

    assert!(removed == vec![ColorKey::from_channels(255, 0, 0)]);
    assert!(store.layer_state(MainLayer::Color).suborder().is_empty());
}

#[test]
fn sublayers_with_content_anywhere_survive() {
    let mut store   = create_store();
    let red         = ColorKey::from_channels(255, 0, 0);

    // Content on the last frame only
    store.get_or_create_surface(MainLayer::Color, 0, red);
    dab(&mut store, MainLayer::Color, 3, red, 0, 0);

    assert!(store.prune_unused(MainLayer::Color).is_empty());
    assert!(store.layer_state(MainLayer::Color).sublayer(red).is_some());
}

#[test]
fn pruning_is_idempotent() {
    let mut store   = create_store();
    let red         = ColorKey::from_channels(255, 0, 0);
    let green       = ColorKey::from_channels(0, 255, 0);

    dab(&mut store, MainLayer::Color, 0, red, 0, 0);
    store.get_or_create_surface(MainLayer::Color, 0, green);

    assert!(store.prune_unused(MainLayer::Color) == vec![green]);
    assert!(store.prune_unused(MainLayer::Color).is_empty());
    assert!(store.layer_state(MainLayer::Color).sublayer(red).is_some());
}

#[test]
fn pruning_corrects_a_stale_content_flag() {
    let mut store   = create_store();
    let red         = ColorKey::from_channels(255, 0, 0);

    store.get_or_create_surface(MainLayer::Color, 0, red);
    store.mark_has_content(MainLayer::Color, 0, red);

    // The flag claims content but the pixels say otherwise: the scan wins
    assert!(store.prune_unused(MainLayer::Color) == vec![red]);
}

#[test]
fn pruning_repoints_the_active_color() {
    let mut store   = create_store();
    let red         = ColorKey::from_channels(255, 0, 0);
    let green       = ColorKey::from_channels(0, 255, 0);

    dab(&mut store, MainLayer::Color, 0, green, 0, 0);
    store.get_or_create_surface(MainLayer::Color, 0, red);
    store.set_active_color(MainLayer::Color, red);

    store.prune_unused(MainLayer::Color);

    assert!(store.active_color(MainLayer::Color) == green);
}

#[test]
fn pruning_an_empty_layer_falls_back_to_the_default_color() {
    let mut store = create_store();

    store.get_or_create_surface(MainLayer::Fill, 0, ColorKey::from_channels(1, 2, 3));
    store.set_active_color(MainLayer::Fill, ColorKey::from_channels(1, 2, 3));
    store.prune_unused(MainLayer::Fill);

    // White for the fill layer, black elsewhere
    assert!(store.active_color(MainLayer::Fill) == ColorKey::WHITE);

    store.get_or_create_surface(MainLayer::Line, 0, ColorKey::from_channels(1, 2, 3));
    store.set_active_color(MainLayer::Line, ColorKey::from_channels(1, 2, 3));
    store.prune_unused(MainLayer::Line);

    assert!(store.active_color(MainLayer::Line) == ColorKey::BLACK);
}

#[test]
fn pruning_a_parent_releases_its_children() {
    let mut store   = create_store();
    let red         = ColorKey::from_channels(255, 0, 0);
    let green       = ColorKey::from_channels(0, 255, 0);

    dab(&mut store, MainLayer::Color, 0, green, 0, 0);
    store.get_or_create_surface(MainLayer::Color, 0, red);
    store.pair_under_parent(MainLayer::Color, green, MainLayer::Color, red).unwrap();

    // The parent is blank, the child is not: only the parent goes
    assert!(store.prune_unused(MainLayer::Color) == vec![red]);
    assert!(store.layer_state(MainLayer::Color).sublayer(green).map(|s| s.parent()) == Some(None));
}
