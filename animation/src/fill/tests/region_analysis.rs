use super::*;

#[test]
fn closed_outline_classifies_inside_and_outside() {
    let store   = store_with_square(50, 50, 10, 10, 30, 30);
    let region  = RegionMap::build(&store, 0, &FillOptions::default());

    assert!(region.is_outside(0, 0));
    assert!(region.is_ink(10, 10));
    assert!(region.is_inside(20, 20));
    assert!(!region.is_inside(45, 45));
}

#[test]
fn anti_aliased_fringe_is_not_ink() {
    let mut store = CelStore::new(20, 20, 1);

    // A faint smudge below the ink threshold
    let line = store.get_or_create_surface(MainLayer::Line, 0, ColorKey::BLACK);
    for x in 0..20 {
        line.set_pixel(x, 10, Rgba { r: 0, g: 0, b: 0, a: INK_ALPHA_THRESHOLD });
    }

    let region = RegionMap::build(&store, 0, &FillOptions::default());
    assert!(region.is_outside(10, 10));
}

#[test]
fn gap_tolerance_closes_small_gaps() {
    let mut store = store_with_square(50, 50, 10, 10, 30, 30);
    cut_gap(&mut store, 10, 18, 3);

    // Without tolerance the region leaks
    let leaky = RegionMap::build(&store, 0, &FillOptions::default());
    assert!(leaky.is_outside(20, 20));

    // With tolerance at the gap width it is contained
    let closed = RegionMap::build(&store, 0, &FillOptions::with_gap_tolerance(3));
    assert!(closed.is_inside(20, 20));
}

#[test]
fn gap_tolerance_is_monotonic() {
    let mut store = store_with_square(60, 60, 10, 10, 40, 40);
    cut_gap(&mut store, 10, 20, 6);

    // Too small a tolerance still leaks, a large enough one contains
    let small = RegionMap::build(&store, 0, &FillOptions::with_gap_tolerance(2));
    assert!(small.is_outside(25, 25));

    let large = RegionMap::build(&store, 0, &FillOptions::with_gap_tolerance(6));
    assert!(large.is_inside(25, 25));
}

#[test]
fn extra_boundary_layers_add_their_ink() {
    let mut store = CelStore::new(40, 40, 1);

    // The left wall is line art, the rest of the box is colour
    let line = store.get_or_create_surface(MainLayer::Line, 0, ColorKey::BLACK);
    draw_line(line, (5, 5), (5, 30), ColorKey::BLACK.to_rgba(255));

    let color = store.get_or_create_surface(MainLayer::Color, 0, RED);
    draw_line(color, (5, 5), (30, 5), RED.to_rgba(255));
    draw_line(color, (30, 5), (30, 30), RED.to_rgba(255));
    draw_line(color, (30, 30), (5, 30), RED.to_rgba(255));

    // Line-only boundaries leak out of the three colour walls
    let line_only = RegionMap::build(&store, 0, &FillOptions::default());
    assert!(line_only.is_outside(15, 15));

    // Adding the colour layer closes the box
    let mut options = FillOptions::default();
    options.boundary_layers.push(MainLayer::Color);

    let both = RegionMap::build(&store, 0, &options);
    assert!(both.is_inside(15, 15));
}
