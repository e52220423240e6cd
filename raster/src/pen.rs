use super::color::*;
use super::surface::*;

///
/// Stamps a filled circle of the pen radius at one cell
///
fn stamp(surface: &mut RasterSurface, x: i32, y: i32, radius: i32, value: Rgba) {
    let (width, height) = (surface.width() as i32, surface.height() as i32);

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }

            let (px, py) = (x + dx, y + dy);
            if px >= 0 && py >= 0 && px < width && py < height {
                surface.set_pixel(px as usize, py as usize, value);
            }
        }
    }
}

///
/// Visits every cell on the line between two points (Bresenham)
///
fn walk_line(from: (i32, i32), to: (i32, i32), mut visit: impl FnMut(i32, i32)) {
    let (mut x, mut y)  = from;
    let (x1, y1)        = to;

    let dx  = (x1 - x).abs();
    let dy  = -(y1 - y).abs();
    let sx  = if x < x1 { 1 } else { -1 };
    let sy  = if y < y1 { 1 } else { -1 };

    let mut err = dx + dy;

    loop {
        visit(x, y);

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy { err += dy; x += sx; }
        if e2 <= dx { err += dx; y += sy; }
    }
}

///
/// Draws a 1px line between two cells
///
pub fn draw_line(surface: &mut RasterSurface, from: (i32, i32), to: (i32, i32), value: Rgba) {
    walk_line(from, to, |x, y| stamp(surface, x, y, 0, value));
}

///
/// Strokes a polyline with a round pen of the given radius
///
pub fn stroke_polyline(surface: &mut RasterSurface, points: &[(i32, i32)], radius: i32, value: Rgba) {
    match points {
        []      => { }
        [only]  => { stamp(surface, only.0, only.1, radius, value); }

        points  => {
            for segment in points.windows(2) {
                walk_line(segment[0], segment[1], |x, y| stamp(surface, x, y, radius, value));
            }
        }
    }
}

///
/// Draws the 1px outline of a rectangle (corners inclusive)
///
pub fn outline_rect(surface: &mut RasterSurface, x0: i32, y0: i32, x1: i32, y1: i32, value: Rgba) {
    draw_line(surface, (x0, y0), (x1, y0), value);
    draw_line(surface, (x1, y0), (x1, y1), value);
    draw_line(surface, (x1, y1), (x0, y1), value);
    draw_line(surface, (x0, y1), (x0, y0), value);
}

///
/// Fills a rectangle (corners inclusive)
///
pub fn fill_rect(surface: &mut RasterSurface, x0: i32, y0: i32, x1: i32, y1: i32, value: Rgba) {
    let (width, height) = (surface.width() as i32, surface.height() as i32);

    for y in y0.min(y1)..=y0.max(y1) {
        for x in x0.min(x1)..=x0.max(x1) {
            if x >= 0 && y >= 0 && x < width && y < height {
                surface.set_pixel(x as usize, y as usize, value);
            }
        }
    }
}
