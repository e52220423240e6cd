use serde::{Serialize, Deserialize};

///
/// Command that is sent to a storage backend
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CelStorageCommand {
    /// Writes a serialized version of the project settings
    WriteProjectProperties(String),

    /// Reads the project settings string
    ReadProjectProperties,

    /// Writes the encoded pixels of one cel
    WriteCel { layer: usize, color: String, frame: usize, data: Vec<u8> },

    /// Reads the encoded pixels of one cel
    ReadCel { layer: usize, color: String, frame: usize },

    /// Removes one cel from the storage
    DeleteCel { layer: usize, color: String, frame: usize },

    /// Reads every stored cel
    ReadAllCels,

    /// Removes the properties and every cel, ahead of a full rewrite
    DeleteEverything,
}
