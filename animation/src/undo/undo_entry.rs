use crate::traits::*;

use flo_raster::*;

///
/// One committed gesture's effect on one cel
///
/// `None` means the cel was empty on that side of the gesture. Snapshots share
/// their pixels, so cloning an entry is cheap.
///
#[derive(Clone, Debug)]
pub struct UndoEntry {
    /// The cel the gesture touched
    pub cel: CelId,

    /// The cel's pixels before the gesture, or None if it was empty
    pub before: Option<SurfacePixels>,

    /// The cel's pixels after the gesture, or None if it ended empty
    pub after: Option<SurfacePixels>,
}
