use super::main_layer::*;

///
/// How a frame should be composited
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FrameRenderOptions {
    /// Whether to paint the paper background before the layers
    pub with_background: bool,

    /// When the requested frame is empty on every layer, substitute the nearest
    /// prior frame that has content instead of leaving the canvas blank
    pub hold_previous_when_empty: bool,

    /// Alpha for a held frame: 1.0 for an ordinary playback hold, less for an
    /// editing ghost preview
    pub hold_alpha: f32,

    /// When set, only this layer is drawn. Clip masks are still taken from the
    /// real layer beneath, whether or not that layer is drawn.
    pub solo_layer: Option<MainLayer>,
}

///
/// How the onion-skin overlay should be composited
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct OnionSkinOptions {
    /// Number of earlier frames to overlay
    pub frames_before: usize,

    /// Number of later frames to overlay
    pub frames_after: usize,

    /// Alpha of the nearest neighbouring frame; each step further away halves it
    pub alpha: f32,
}

impl Default for FrameRenderOptions {
    fn default() -> FrameRenderOptions {
        FrameRenderOptions {
            with_background:            true,
            hold_previous_when_empty:   true,
            hold_alpha:                 1.0,
            solo_layer:                 None,
        }
    }
}

impl Default for OnionSkinOptions {
    fn default() -> OnionSkinOptions {
        OnionSkinOptions {
            frames_before:  1,
            frames_after:   1,
            alpha:          0.4,
        }
    }
}
