use super::*;

#[test]
fn fill_paints_exactly_the_enclosed_interior() {
    // The concrete case: 100x100 canvas, 20x20 square outline, seed at the centre
    let store   = store_with_square(100, 100, 40, 40, 59, 59);
    let region  = RegionMap::build(&store, 0, &FillOptions::default());
    let flood   = flood_from_seeds(&region, &[(50, 50)]);

    let mut store = store;
    assert!(apply_fill(&mut store, MainLayer::Color, 0, RED, &flood));

    // 18x18 interior pixels, nothing on the border or outside
    assert!(painted_pixels(&store, MainLayer::Color, 0, RED) == 324);

    let surface = store.peek_surface(MainLayer::Color, 0, RED).unwrap();
    assert!(surface.alpha_at(41, 41) == 255);
    assert!(surface.alpha_at(40, 40) == 0);     // the outline itself
    assert!(surface.alpha_at(20, 20) == 0);     // outside
}

#[test]
fn seeds_outside_or_on_ink_are_skipped() {
    let store   = store_with_square(50, 50, 10, 10, 30, 30);
    let region  = RegionMap::build(&store, 0, &FillOptions::default());

    // One seed on the border ink, one outside the square
    let flood = flood_from_seeds(&region, &[(10, 10), (45, 45)]);

    assert!(flood.is_empty());
    assert!(flood.inside_seeds.is_empty());
}

#[test]
fn empty_flood_creates_no_sublayer() {
    let store   = store_with_square(50, 50, 10, 10, 30, 30);
    let region  = RegionMap::build(&store, 0, &FillOptions::default());
    let flood   = flood_from_seeds(&region, &[(45, 45)]);

    let mut store = store;
    assert!(!apply_fill(&mut store, MainLayer::Color, 0, RED, &flood));
    assert!(store.layer_state(MainLayer::Color).sublayer(RED).is_none());
}

#[test]
fn multiple_seeds_fill_multiple_regions_once() {
    let mut store = store_with_square(80, 80, 5, 5, 30, 30);

    // A second, separate box
    let line = store.peek_surface_mut(MainLayer::Line, 0, ColorKey::BLACK).unwrap();
    outline_rect(line, 40, 40, 70, 70, ColorKey::BLACK.to_rgba(255));

    let region  = RegionMap::build(&store, 0, &FillOptions::default());

    // Two seeds in the first box, one in the second: the repeat seed revisits nothing
    let flood = flood_from_seeds(&region, &[(10, 10), (20, 20), (50, 50)]);

    let first_interior  = 24 * 24;
    let second_interior = 29 * 29;
    assert!(flood.cells.len() == first_interior + second_interior);
    assert!(flood.inside_seeds.len() == 3);
}

#[test]
fn fill_respects_a_leaky_boundary() {
    let mut store = store_with_square(50, 50, 10, 10, 30, 30);
    cut_gap(&mut store, 10, 15, 4);

    let region  = RegionMap::build(&store, 0, &FillOptions::default());
    let flood   = flood_from_seeds(&region, &[(20, 20)]);

    // The seed is part of the outside now: nothing to fill
    assert!(flood.is_empty());
}

#[test]
fn off_canvas_seeds_are_ignored() {
    let store   = store_with_square(50, 50, 10, 10, 30, 30);
    let region  = RegionMap::build(&store, 0, &FillOptions::default());
    let flood   = flood_from_seeds(&region, &[(-5, 20), (200, 20)]);

    assert!(flood.is_empty());
}
