use crate::traits::*;
use crate::sublayer::*;

use flo_raster::*;

use serde::{Serialize, Deserialize};
use serde_json;

///
/// The serializable settings of one main layer
///
/// Colours are stored as strings (the canonical `#rrggbb` spelling on the way
/// out, whatever a legacy file holds on the way in) and re-normalized on load.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerProperties {
    pub layer:          MainLayer,
    pub opacity:        f32,
    pub clip_to_below:  bool,
    pub suborder:       Vec<String>,
    pub active_color:   String,
}

///
/// The serializable settings of a whole project, everything except the pixels
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectProperties {
    pub name:           String,
    pub width:          usize,
    pub height:         usize,
    pub frame_rate:     f64,
    pub total_frames:   usize,
    pub layers:         Vec<LayerProperties>,
}

impl ProjectProperties {
    ///
    /// Captures the current settings of a store
    ///
    pub fn from_store(store: &CelStore, name: &str, frame_rate: f64) -> ProjectProperties {
        let layers = MainLayer::DRAWABLE.iter()
            .map(|layer| {
                let state = store.layer_state(*layer);

                LayerProperties {
                    layer:          *layer,
                    opacity:        state.opacity(),
                    clip_to_below:  state.clip_to_below(),
                    suborder:       state.suborder().iter().map(|color| color.to_string()).collect(),
                    active_color:   state.active_color().to_string(),
                }
            })
            .collect();

        ProjectProperties {
            name:           name.to_string(),
            width:          store.width(),
            height:         store.height(),
            frame_rate:     frame_rate,
            total_frames:   store.total_frames(),
            layers:         layers,
        }
    }

    ///
    /// Applies the stored layer settings to a freshly built store
    ///
    /// Called after the cels have been restored so the suborder keys exist.
    /// Unparseable colours are skipped with a warning rather than failing the
    /// whole load.
    ///
    pub fn apply_layer_states(&self, store: &mut CelStore) {
        for properties in self.layers.iter() {
            let layer = properties.layer;
            if !layer.is_drawable() {
                warn!("skipped stored settings for the non-drawable {} layer", layer);
                continue;
            }

            {
                let state = store.layer_state_mut(layer);
                state.set_opacity(properties.opacity);
                state.set_clip_to_below(properties.clip_to_below);
            }

            let suborder = properties.suborder.iter()
                .filter_map(|spec| match ColorKey::parse(spec) {
                    Ok(color)   => Some(color),
                    Err(err)    => { warn!("dropped a stored suborder entry: {}", err); None }
                })
                .collect::<Vec<_>>();
            store.set_suborder(layer, &suborder);

            match ColorKey::parse(&properties.active_color) {
                Ok(color)   => store.set_active_color(layer, color),
                Err(err)    => warn!("kept the default active colour for the {} layer: {}", layer, err),
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<ProjectProperties, serde_json::Error> {
        serde_json::from_str(json)
    }
}
