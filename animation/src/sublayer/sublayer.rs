use flo_raster::*;

use smallvec::*;

///
/// One colour channel within a main layer
///
/// The `frames` list always has one slot per timeline frame; a slot is `None`
/// until something is drawn on that frame with this colour. The pairing fields
/// nest this sublayer under another for UI grouping only and have no effect on
/// compositing.
///
#[derive(Clone, Debug)]
pub struct Sublayer {
    /// The canonical colour identity of this sublayer
    pub (crate) color: ColorKey,

    /// One surface slot per frame, allocated on first write
    pub (crate) frames: Vec<Option<SurfaceHandle>>,

    /// The sublayer this one is paired under, if any
    pub (crate) parent: Option<ColorKey>,

    /// Sublayers paired under this one, in pairing order
    pub (crate) children: SmallVec<[ColorKey; 2]>,

    /// Whether the UI shows this sublayer's children folded away
    pub (crate) collapsed: bool,
}

impl Sublayer {
    ///
    /// Creates a new sublayer with every frame slot empty
    ///
    pub fn new(color: ColorKey, total_frames: usize) -> Sublayer {
        Sublayer {
            color:      color,
            frames:     vec![None; total_frames],
            parent:     None,
            children:   smallvec![],
            collapsed:  false,
        }
    }

    pub fn color(&self) -> ColorKey { self.color }
    pub fn parent(&self) -> Option<ColorKey> { self.parent }
    pub fn children(&self) -> &[ColorKey] { &self.children }
    pub fn is_collapsed(&self) -> bool { self.collapsed }

    ///
    /// The surface handle for a frame, if one has been allocated
    ///
    pub fn frame(&self, frame: usize) -> Option<SurfaceHandle> {
        self.frames[frame]
    }

    ///
    /// The frames that currently hold a surface
    ///
    pub fn allocated_frames(&self) -> impl Iterator<Item=(usize, SurfaceHandle)> + '_ {
        self.frames.iter()
            .enumerate()
            .filter_map(|(frame, handle)| handle.map(|handle| (frame, handle)))
    }
}
