use flo_raster::*;

use serde::{Serialize, Deserialize};
use strum::{IntoEnumIterator};

///
/// The fixed set of main layers in a cel animation
///
/// Four of these are drawable; `Paper` is the background sentinel and can never
/// hold sublayers. Requesting drawable behaviour from `Paper` is a programmer
/// error and panics rather than silently falling back.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, EnumString, EnumIter, Serialize, Deserialize)]
pub enum MainLayer {
    /// The non-drawable background
    Paper,

    /// Flat fill colours, composited at the bottom of the drawable stack
    Fill,

    /// Main colouring layer
    Color,

    /// Shading on top of the colours
    Shade,

    /// Line art, composited on top of everything
    Line,
}

impl MainLayer {
    ///
    /// The drawable layers in compositing order, bottom first
    ///
    pub const DRAWABLE: [MainLayer; 4] = [MainLayer::Fill, MainLayer::Color, MainLayer::Shade, MainLayer::Line];

    ///
    /// True for every layer except the `Paper` background
    ///
    pub fn is_drawable(&self) -> bool {
        *self != MainLayer::Paper
    }

    ///
    /// Position of this layer in the drawable stack, bottom = 0
    ///
    pub fn stacking_order(&self) -> usize {
        match self {
            MainLayer::Paper    => panic!("the paper background has no stacking order"),
            MainLayer::Fill     => 0,
            MainLayer::Color    => 1,
            MainLayer::Shade    => 2,
            MainLayer::Line     => 3,
        }
    }

    ///
    /// The drawable layer for a stacking position
    ///
    pub fn from_stacking_order(order: usize) -> Option<MainLayer> {
        MainLayer::DRAWABLE.get(order).copied()
    }

    ///
    /// The drawable layer directly beneath this one, if any
    ///
    pub fn layer_below(&self) -> Option<MainLayer> {
        match self {
            MainLayer::Paper    => None,
            MainLayer::Fill     => None,
            MainLayer::Color    => Some(MainLayer::Fill),
            MainLayer::Shade    => Some(MainLayer::Color),
            MainLayer::Line     => Some(MainLayer::Shade),
        }
    }

    ///
    /// True if this layer may be clipped to the alpha of the layer beneath it
    ///
    pub fn clip_eligible(&self) -> bool {
        self.is_drawable() && self.layer_below().is_some()
    }

    ///
    /// The colour new strokes default to on this layer
    ///
    pub fn default_color(&self) -> ColorKey {
        match self {
            MainLayer::Fill => ColorKey::WHITE,
            _               => ColorKey::BLACK,
        }
    }

    ///
    /// The name shown for this layer in the UI
    ///
    pub fn display_name(&self) -> &str {
        use self::MainLayer::*;

        match self {
            Paper   => "Paper",
            Fill    => "Fill",
            Color   => "Color",
            Shade   => "Shade",
            Line    => "Line",
        }
    }

    ///
    /// Iterates the drawable layers bottom-to-top
    ///
    pub fn drawable_layers() -> impl Iterator<Item=MainLayer> {
        MainLayer::iter().filter(|layer| layer.is_drawable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacking_round_trips() {
        for layer in MainLayer::DRAWABLE {
            assert!(MainLayer::from_stacking_order(layer.stacking_order()) == Some(layer));
        }
    }

    #[test]
    fn fill_has_nothing_below_and_cannot_clip() {
        assert!(MainLayer::Fill.layer_below().is_none());
        assert!(!MainLayer::Fill.clip_eligible());
        assert!(MainLayer::Line.clip_eligible());
    }

    #[test]
    fn drawable_iteration_is_bottom_to_top() {
        let layers = MainLayer::drawable_layers().collect::<Vec<_>>();
        assert!(layers == vec![MainLayer::Fill, MainLayer::Color, MainLayer::Shade, MainLayer::Line]);
    }

    #[test]
    #[should_panic]
    fn paper_has_no_stacking_order() {
        MainLayer::Paper.stacking_order();
    }
}
