use super::main_layer::*;

use flo_raster::*;

use std::fmt;

///
/// Errors from structural operations on the sublayer store
///
#[derive(Clone, PartialEq, Debug)]
pub enum StoreError {
    /// No sublayer with this colour exists on the layer
    UnknownKey(MainLayer, ColorKey),

    /// The destination layer already holds a sublayer with this colour
    KeyAlreadyExists(MainLayer, ColorKey),

    /// Pairing these sublayers would create a cycle
    PairingCycle(ColorKey, ColorKey),

    /// The last frame of the timeline cannot be deleted
    CannotDeleteLastFrame,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::StoreError::*;

        match self {
            UnknownKey(layer, color)        => write!(f, "no sublayer {} on the {} layer", color, layer),
            KeyAlreadyExists(layer, color)  => write!(f, "the {} layer already has a sublayer {}", layer, color),
            PairingCycle(child, parent)     => write!(f, "pairing {} under {} would create a cycle", child, parent),
            CannotDeleteLastFrame           => write!(f, "the last remaining frame cannot be deleted"),
        }
    }
}

impl std::error::Error for StoreError { }
