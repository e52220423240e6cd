use super::region_map::*;
use crate::traits::*;
use crate::sublayer::*;

use flo_raster::*;

use std::collections::{VecDeque};

///
/// The cells a fill or erase stroke will touch
///
/// Built once per gesture from the seed points: the union of the 4-connected
/// inside regions under each seed. A region already flooded from an earlier seed
/// in the same stroke is not visited again.
///
pub struct FloodRegion {
    /// Every inside cell connected to a seed, each listed once
    pub cells: Vec<(usize, usize)>,

    /// The seed cells that actually landed inside an enclosed region
    pub inside_seeds: Vec<(usize, usize)>,
}

impl FloodRegion {
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

///
/// Floods the inside regions under a set of seed points
///
/// Seeds landing on outside or ink cells are skipped without error; seeds off
/// the canvas entirely are ignored the same way.
///
pub fn flood_from_seeds(region: &RegionMap, seeds: &[(i32, i32)]) -> FloodRegion {
    let (width, height) = (region.width(), region.height());

    let mut visited         = BitMask::new(width, height);
    let mut cells           = vec![];
    let mut inside_seeds    = vec![];
    let mut queue           = VecDeque::new();

    for seed in seeds {
        let (x, y) = (seed.0, seed.1);
        if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
            continue;
        }

        let (x, y) = (x as usize, y as usize);
        if !region.is_inside(x, y) {
            continue;
        }
        inside_seeds.push((x, y));

        if visited.get(x, y) {
            continue;
        }

        visited.set(x, y, true);
        queue.push_back((x, y));

        while let Some((x, y)) = queue.pop_front() {
            cells.push((x, y));

            let neighbours = [
                (x.wrapping_sub(1), y), (x + 1, y),
                (x, y.wrapping_sub(1)), (x, y + 1),
            ];
            for (nx, ny) in neighbours {
                if nx < width && ny < height && region.is_inside(nx, ny) && !visited.get(nx, ny) {
                    visited.set(nx, ny, true);
                    queue.push_back((nx, ny));
                }
            }
        }
    }

    FloodRegion {
        cells:          cells,
        inside_seeds:   inside_seeds,
    }
}

///
/// Paints a flood region onto the target sublayer at full opacity
///
/// Returns whether anything was painted. An empty region creates neither a
/// surface nor a sublayer.
///
pub fn apply_fill(store: &mut CelStore, layer: MainLayer, frame: usize, color: ColorKey, region: &FloodRegion) -> bool {
    if region.is_empty() {
        return false;
    }

    let value   = color.to_rgba(255);
    let surface = store.get_or_create_surface(layer, frame, color);

    for (x, y) in region.cells.iter() {
        surface.set_pixel(*x, *y, value);
    }

    debug!("filled {} cell(s) on cel {}", region.cells.len(), CelId::new(layer, frame, color));
    true
}

///
/// The sublayers of a layer with visible pixels under any inside seed cell
///
/// An eraser names no colour, so the sublayers it affects are discovered from
/// what is actually painted under the seed stroke. Results come back in
/// stacking order.
///
pub fn erase_matches(store: &CelStore, layer: MainLayer, frame: usize, region: &FloodRegion) -> Vec<ColorKey> {
    store.layer_state(layer).suborder().iter()
        .copied()
        .filter(|color| {
            store.peek_surface(layer, frame, *color)
                .map(|surface| region.inside_seeds.iter().any(|(x, y)| surface.alpha_at(*x, *y) > 0))
                .unwrap_or(false)
        })
        .collect()
}

///
/// Clears a flood region's pixels from one sublayer
///
/// Only ever peeks: an erase never allocates a surface. Returns whether any
/// pixel actually changed.
///
pub fn apply_erase(store: &mut CelStore, layer: MainLayer, frame: usize, color: ColorKey, region: &FloodRegion) -> bool {
    let surface = match store.peek_surface_mut(layer, frame, color) {
        Some(surface)   => surface,
        None            => return false,
    };

    let mut changed = false;
    for (x, y) in region.cells.iter() {
        if surface.alpha_at(*x, *y) > 0 {
            surface.set_pixel(*x, *y, Rgba::TRANSPARENT);
            changed = true;
        }
    }

    if changed {
        debug!("erased cel {} over {} cell(s)", CelId::new(layer, frame, color), region.cells.len());
    }

    changed
}
