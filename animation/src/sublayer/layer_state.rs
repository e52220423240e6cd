use super::sublayer::*;
use crate::traits::*;

use flo_raster::*;

use std::collections::{HashMap};

///
/// The mutable state of one drawable main layer
///
/// `suborder` and `sublayers` are kept in lockstep: the order list contains
/// exactly the keys present in the map, with no duplicates, last-drawn on top.
///
#[derive(Clone, Debug)]
pub struct LayerState {
    /// Which main layer this is the state for
    pub (crate) layer: MainLayer,

    /// Display label
    pub (crate) name: String,

    /// Compositing opacity, 0.0 to 1.0
    pub (crate) opacity: f32,

    /// The last non-zero opacity, so hiding and re-showing the layer restores
    /// a custom value rather than resetting to 1.0
    pub (crate) previous_opacity: f32,

    /// Whether this layer's alpha is masked by the layer beneath it
    pub (crate) clip_to_below: bool,

    /// Stacking order of the sublayer colours, bottom first
    pub (crate) suborder: Vec<ColorKey>,

    /// The sublayers themselves
    pub (crate) sublayers: HashMap<ColorKey, Sublayer>,

    /// The colour new strokes on this layer target
    pub (crate) active_color: ColorKey,
}

impl LayerState {
    ///
    /// Creates the initial state for a main layer
    ///
    pub fn new(layer: MainLayer) -> LayerState {
        LayerState {
            layer:              layer,
            name:               layer.display_name().to_string(),
            opacity:            1.0,
            previous_opacity:   1.0,
            clip_to_below:      false,
            suborder:           vec![],
            sublayers:          HashMap::new(),
            active_color:       layer.default_color(),
        }
    }

    pub fn layer(&self) -> MainLayer { self.layer }
    pub fn name(&self) -> &str { &self.name }
    pub fn opacity(&self) -> f32 { self.opacity }
    pub fn clip_to_below(&self) -> bool { self.clip_to_below }
    pub fn suborder(&self) -> &[ColorKey] { &self.suborder }
    pub fn active_color(&self) -> ColorKey { self.active_color }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    ///
    /// Sets the opacity, remembering the last non-zero value
    ///
    pub fn set_opacity(&mut self, opacity: f32) {
        let opacity = opacity.clamp(0.0, 1.0);

        if opacity > 0.0 {
            self.previous_opacity = opacity;
        }
        self.opacity = opacity;
    }

    ///
    /// Toggles between hidden and the last visible opacity
    ///
    pub fn toggle_visible(&mut self) {
        if self.opacity > 0.0 {
            self.previous_opacity   = self.opacity;
            self.opacity            = 0.0;
        } else {
            self.opacity            = self.previous_opacity.max(0.01);
        }
    }

    ///
    /// Turns clipping to the layer below on or off
    ///
    pub fn set_clip_to_below(&mut self, clip: bool) {
        self.clip_to_below = clip;
    }

    ///
    /// The sublayer for a colour, if it exists
    ///
    pub fn sublayer(&self, color: ColorKey) -> Option<&Sublayer> {
        self.sublayers.get(&color)
    }
}
