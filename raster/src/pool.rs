use super::surface::*;

use slab::{Slab};

///
/// A handle to a surface allocated from a `SurfacePool`
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SurfaceHandle(usize);

///
/// An arena of uniformly sized surfaces
///
/// Every cel in a project shares one pixel size, so the surfaces live together in
/// a slab and are addressed by handle. Nothing is allocated ahead of first use:
/// a cel that was never drawn on costs no pixels.
///
pub struct SurfacePool {
    /// Pixel width of every surface in this pool
    width: usize,

    /// Pixel height of every surface in this pool
    height: usize,

    /// The allocated surfaces
    surfaces: Slab<RasterSurface>,
}

impl SurfacePool {
    ///
    /// Creates an empty pool of surfaces of the given size
    ///
    pub fn new(width: usize, height: usize) -> SurfacePool {
        SurfacePool {
            width:      width,
            height:     height,
            surfaces:   Slab::new(),
        }
    }

    pub fn surface_width(&self) -> usize { self.width }
    pub fn surface_height(&self) -> usize { self.height }

    ///
    /// Allocates a new transparent surface and returns its handle
    ///
    pub fn allocate(&mut self) -> SurfaceHandle {
        SurfaceHandle(self.surfaces.insert(RasterSurface::new(self.width, self.height)))
    }

    ///
    /// Frees a surface. The handle must not be used afterwards.
    ///
    pub fn release(&mut self, handle: SurfaceHandle) {
        assert!(self.surfaces.contains(handle.0), "released an invalid surface handle");
        self.surfaces.remove(handle.0);
    }

    ///
    /// The surface for a handle. Panics on a stale handle: handing one in is a
    /// programmer error, never a recoverable state.
    ///
    pub fn surface(&self, handle: SurfaceHandle) -> &RasterSurface {
        self.surfaces.get(handle.0).expect("stale surface handle")
    }

    ///
    /// Mutable access to the surface for a handle
    ///
    pub fn surface_mut(&mut self, handle: SurfaceHandle) -> &mut RasterSurface {
        self.surfaces.get_mut(handle.0).expect("stale surface handle")
    }

    ///
    /// The number of surfaces currently allocated
    ///
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}
