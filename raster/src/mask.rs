use std::collections::{VecDeque};

///
/// A width × height binary grid, used for ink occupancy and region classification
///
#[derive(Clone, PartialEq, Debug)]
pub struct BitMask {
    width:  usize,
    height: usize,
    cells:  Vec<bool>,
}

impl BitMask {
    ///
    /// Creates a mask with every cell unset
    ///
    pub fn new(width: usize, height: usize) -> BitMask {
        BitMask {
            width:  width,
            height: height,
            cells:  vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        self.cells[y * self.width + x] = value;
    }

    ///
    /// The number of set cells
    ///
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    ///
    /// True if the 8-neighbourhood of (x, y) contains a set cell.
    /// Neighbours beyond the canvas edge count as unset.
    ///
    fn any_neighbour_set(&self, x: usize, y: usize) -> bool {
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 { continue; }

                let (nx, ny) = (x as i32 + dx, y as i32 + dy);
                if nx < 0 || ny < 0 || nx >= self.width as i32 || ny >= self.height as i32 {
                    continue;
                }

                if self.get(nx as usize, ny as usize) {
                    return true;
                }
            }
        }

        false
    }

    ///
    /// True if every cell of the 8-neighbourhood of (x, y) is set.
    /// Neighbours beyond the canvas edge count as set, so ink running against the
    /// edge of the canvas is not eaten away by erosion.
    ///
    fn all_neighbours_set(&self, x: usize, y: usize) -> bool {
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 { continue; }

                let (nx, ny) = (x as i32 + dx, y as i32 + dy);
                if nx < 0 || ny < 0 || nx >= self.width as i32 || ny >= self.height as i32 {
                    continue;
                }

                if !self.get(nx as usize, ny as usize) {
                    return false;
                }
            }
        }

        true
    }

    ///
    /// Morphological dilation: each pass sets every cell with a set 8-neighbour
    ///
    pub fn dilate(&mut self, iterations: usize) {
        for _ in 0..iterations {
            let mut next = self.cells.clone();

            for y in 0..self.height {
                for x in 0..self.width {
                    if !self.get(x, y) && self.any_neighbour_set(x, y) {
                        next[y * self.width + x] = true;
                    }
                }
            }

            self.cells = next;
        }
    }

    ///
    /// Morphological erosion: each pass clears every set cell with an unset 8-neighbour
    ///
    pub fn erode(&mut self, iterations: usize) {
        for _ in 0..iterations {
            let mut next = self.cells.clone();

            for y in 0..self.height {
                for x in 0..self.width {
                    if self.get(x, y) && !self.all_neighbours_set(x, y) {
                        next[y * self.width + x] = false;
                    }
                }
            }

            self.cells = next;
        }
    }

    ///
    /// Morphological closing: bridges gaps up to roughly `gap` cells wide without
    /// permanently fattening the ink. Dilate and erode remain separately callable
    /// so a host that needs to stay responsive can yield between the passes.
    ///
    pub fn close(&mut self, gap: u32) {
        let iterations = ((gap + 1) / 2) as usize;

        self.dilate(iterations);
        self.erode(iterations);
    }

    ///
    /// Classifies the cells reachable from the canvas border through unset cells
    ///
    /// This is the 'outside' of the region analysis: a breadth-first, 4-connected
    /// flood seeded from every border cell that is not ink. Cells that are neither
    /// in the result nor set in this mask are enclosed by ink.
    ///
    pub fn reachable_from_border(&self) -> BitMask {
        let mut outside = BitMask::new(self.width, self.height);
        let mut queue   = VecDeque::new();

        if self.width == 0 || self.height == 0 {
            return outside;
        }

        let mut try_seed = |x: usize, y: usize, outside: &mut BitMask, queue: &mut VecDeque<(usize, usize)>| {
            if !self.get(x, y) && !outside.get(x, y) {
                outside.set(x, y, true);
                queue.push_back((x, y));
            }
        };

        for x in 0..self.width {
            try_seed(x, 0, &mut outside, &mut queue);
            try_seed(x, self.height - 1, &mut outside, &mut queue);
        }
        for y in 0..self.height {
            try_seed(0, y, &mut outside, &mut queue);
            try_seed(self.width - 1, y, &mut outside, &mut queue);
        }

        while let Some((x, y)) = queue.pop_front() {
            let neighbours = [
                (x.wrapping_sub(1), y), (x + 1, y),
                (x, y.wrapping_sub(1)), (x, y + 1),
            ];

            for (nx, ny) in neighbours {
                if nx < self.width && ny < self.height && !self.get(nx, ny) && !outside.get(nx, ny) {
                    outside.set(nx, ny, true);
                    queue.push_back((nx, ny));
                }
            }
        }

        outside
    }
}
