use super::color::*;

use std::cell::{Cell};
use std::sync::{Arc};

///
/// A fixed-size straight-alpha RGBA8 pixel buffer for one cel
///
/// The surface memoizes the answer to 'does this contain any visible pixel?':
/// the full alpha scan is expensive and the question is asked on every redraw,
/// so the cached answer is kept until a mutable access invalidates it.
///
#[derive(Clone, Debug)]
pub struct RasterSurface {
    /// Width in pixels
    width: usize,

    /// Height in pixels
    height: usize,

    /// RGBA pixel data, 4 bytes per pixel, rows in order
    pixels: Vec<u8>,

    /// Memoized result of the content scan (None = not known)
    has_content: Cell<Option<bool>>,
}

///
/// An immutable snapshot of a surface's pixels, as stored by the undo log
///
/// Snapshots share their pixel data, so keeping one on the undo stack costs one
/// copy of the surface at snapshot time and nothing thereafter.
///
#[derive(Clone, Debug)]
pub struct SurfacePixels {
    width:  usize,
    height: usize,
    pixels: Arc<Vec<u8>>,
}

impl RasterSurface {
    ///
    /// Creates a new fully transparent surface
    ///
    pub fn new(width: usize, height: usize) -> RasterSurface {
        RasterSurface {
            width:          width,
            height:         height,
            pixels:         vec![0u8; width * height * 4],
            has_content:    Cell::new(Some(false)),
        }
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }

    ///
    /// The raw pixel bytes (RGBA, row-major)
    ///
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    ///
    /// Mutable access to the raw pixel bytes: invalidates the content memo
    ///
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        self.has_content.set(None);
        &mut self.pixels
    }

    #[inline]
    fn index_of(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y * self.width + x) * 4
    }

    ///
    /// Reads the pixel at a position
    ///
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        let idx = self.index_of(x, y);

        Rgba {
            r: self.pixels[idx],
            g: self.pixels[idx + 1],
            b: self.pixels[idx + 2],
            a: self.pixels[idx + 3],
        }
    }

    ///
    /// Writes the pixel at a position
    ///
    pub fn set_pixel(&mut self, x: usize, y: usize, value: Rgba) {
        let idx = self.index_of(x, y);

        self.pixels[idx]        = value.r;
        self.pixels[idx + 1]    = value.g;
        self.pixels[idx + 2]    = value.b;
        self.pixels[idx + 3]    = value.a;

        self.has_content.set(None);
    }

    ///
    /// Reads only the alpha channel at a position
    ///
    pub fn alpha_at(&self, x: usize, y: usize) -> u8 {
        self.pixels[self.index_of(x, y) + 3]
    }

    ///
    /// Resets every pixel to transparent
    ///
    pub fn clear(&mut self) {
        self.pixels.iter_mut().for_each(|b| *b = 0);
        self.has_content.set(Some(false));
    }

    ///
    /// True if any pixel has non-zero alpha, answered from the memo when possible
    ///
    pub fn has_content(&self) -> bool {
        match self.has_content.get() {
            Some(known) => known,
            None        => self.verify_content(),
        }
    }

    ///
    /// Flags this surface as having content without performing a pixel scan
    ///
    pub fn mark_has_content(&self) {
        self.has_content.set(Some(true));
    }

    ///
    /// Rescans the pixels unconditionally, correcting a stale memo
    ///
    pub fn verify_content(&self) -> bool {
        let any = self.pixels.chunks_exact(4).any(|px| px[3] != 0);
        self.has_content.set(Some(any));

        any
    }

    ///
    /// Captures the current pixels as an immutable snapshot
    ///
    pub fn snapshot(&self) -> SurfacePixels {
        SurfacePixels {
            width:  self.width,
            height: self.height,
            pixels: Arc::new(self.pixels.clone()),
        }
    }

    ///
    /// Restores a snapshot onto this surface
    ///
    /// When the snapshot's dimensions do not match (the canvas was resized after
    /// it was taken), the surface is cleared instead and `false` is returned: a
    /// stale snapshot degrades to 'empty' rather than failing.
    ///
    pub fn restore(&mut self, snapshot: &SurfacePixels) -> bool {
        if snapshot.width != self.width || snapshot.height != self.height {
            self.clear();
            return false;
        }

        self.pixels.copy_from_slice(&snapshot.pixels);
        self.has_content.set(None);

        true
    }
}

impl SurfacePixels {
    ///
    /// Builds a snapshot from raw RGBA bytes, as decoded from storage
    ///
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<u8>) -> SurfacePixels {
        assert!(pixels.len() == width * height * 4, "pixel data does not match the stated dimensions");

        SurfacePixels {
            width:  width,
            height: height,
            pixels: Arc::new(pixels),
        }
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    ///
    /// True if any pixel in this snapshot has non-zero alpha
    ///
    pub fn has_content(&self) -> bool {
        self.pixels.chunks_exact(4).any(|px| px[3] != 0)
    }
}

impl PartialEq for SurfacePixels {
    fn eq(&self, other: &SurfacePixels) -> bool {
        self.width == other.width && self.height == other.height && *self.pixels == *other.pixels
    }
}
